use super::{changed_axis_words, PostProcessor, PostState};
use turnkit_core::{TPoint, Tool};

/// Haas ST series turning centers (ST-10, ST-20, ST-30, ...).
///
/// Words are space separated and feeds are posted per revolution (G99).
#[derive(Debug, Clone)]
pub struct HaasPost {
    precision: usize,
}

impl HaasPost {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn axis_words(&self, point: TPoint, state: &mut PostState) -> Option<String> {
        let words = changed_axis_words(point, self.precision, state);
        (!words.is_empty()).then(|| words.join(" "))
    }
}

impl Default for HaasPost {
    fn default() -> Self {
        Self::new(4)
    }
}

impl PostProcessor for HaasPost {
    fn name(&self) -> &'static str {
        "haas_st"
    }

    fn header(&self, _state: &mut PostState) -> String {
        [
            "(HAAS ST SERIES LATHE)",
            "(TURNKIT GENERATED PROGRAM)",
            "",
            "G18 (XZ PLANE)",
            "G20 (INCH)",
            "G40 (CANCEL CUTTER COMP)",
            "G80 (CANCEL CANNED CYCLES)",
            "G99 (FEED PER REV)",
            "",
            "G28 U0 W0 (HOME)",
            "",
        ]
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
    }

    fn tool_change(&self, tool_number: u32, _tool: Option<&Tool>, state: &mut PostState) -> String {
        let out = format!(
            "\n(TOOL {n})\nG28 U0 W0\nT{n:02}{n:02}\nG54\nM08\n",
            n = tool_number
        );
        state.tool_number = Some(tool_number);
        state.clear_position();
        out
    }

    fn spindle_on(&self, rpm: f64, state: &mut PostState) -> String {
        state.spindle_on = true;
        state.spindle_rpm = Some(rpm);
        format!("M03 S{}\n", rpm.trunc() as i64)
    }

    fn spindle_off(&self, state: &mut PostState) -> String {
        if !state.spindle_on {
            return String::new();
        }
        state.spindle_on = false;
        state.spindle_rpm = None;
        "M05\n".to_string()
    }

    fn rapid_move(&self, point: TPoint, state: &mut PostState) -> String {
        match self.axis_words(point, state) {
            Some(words) => format!("G00 {}\n", words),
            None => String::new(),
        }
    }

    fn linear_move(&self, point: TPoint, feedrate: f64, state: &mut PostState) -> String {
        match self.axis_words(point, state) {
            Some(words) => format!("G01 {} F{:.3}\n", words, feedrate),
            None => String::new(),
        }
    }

    // M30 also stops the spindle and coolant.
    fn footer(&self, state: &mut PostState) -> String {
        state.clear_position();
        "\nG28 U0 W0\nM30\n%\n".to_string()
    }
}
