use super::{changed_axis_words, PostProcessor, PostState};
use turnkit_core::{TPoint, Tool};

/// Fanuc 0-T / 0i-T style lathe controls.
///
/// Axis words that did not change are left out of moves.
#[derive(Debug, Clone)]
pub struct FanucPost {
    precision: usize,
}

impl FanucPost {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn axis_words(&self, point: TPoint, state: &mut PostState) -> Option<String> {
        let words = changed_axis_words(point, self.precision, state);
        (!words.is_empty()).then(|| words.concat())
    }

    fn home(&self) -> &'static str {
        "G28U0.\nG28W0.\n"
    }
}

impl Default for FanucPost {
    fn default() -> Self {
        Self::new(3)
    }
}

impl PostProcessor for FanucPost {
    fn name(&self) -> &'static str {
        "fanuc_0t"
    }

    fn header(&self, _state: &mut PostState) -> String {
        [
            "%",
            "O1001 (TURNKIT GENERATED PROGRAM)",
            "(FANUC 0-T CONTROL)",
            "",
            "G18 (XZ PLANE)",
            "G21 (METRIC)",
            "G40 (CANCEL RADIUS COMP)",
            "G80 (CANCEL CANNED CYCLES)",
            "G97 (CONSTANT SPEED)",
            "",
        ]
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
    }

    fn tool_change(&self, tool_number: u32, tool: Option<&Tool>, state: &mut PostState) -> String {
        let mut out = String::from("\n");
        match tool {
            Some(tool) if !tool.description.is_empty() => out.push_str(&format!(
                "(TOOL {} {})\n",
                tool_number,
                tool.description.to_uppercase()
            )),
            _ => out.push_str(&format!("(TOOL {})\n", tool_number)),
        }
        out.push_str(&self.spindle_off(state));
        out.push_str(self.home());
        out.push_str(&format!("T{:02}{:02}\n", tool_number, tool_number));

        state.tool_number = Some(tool_number);
        state.clear_position();
        out
    }

    fn spindle_on(&self, rpm: f64, state: &mut PostState) -> String {
        state.spindle_on = true;
        state.spindle_rpm = Some(rpm);
        format!("M03S{:.0}\n", rpm)
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
            Some(words) => format!("G00{}\n", words),
            None => String::new(),
        }
    }

    fn linear_move(&self, point: TPoint, feedrate: f64, state: &mut PostState) -> String {
        match self.axis_words(point, state) {
            Some(words) => format!("G01{}F{:.2}\n", words, feedrate),
            None => String::new(),
        }
    }

    fn footer(&self, state: &mut PostState) -> String {
        let mut out = String::from("\n");
        out.push_str(&self.spindle_off(state));
        out.push_str(self.home());
        out.push_str("M30\n%\n");
        state.clear_position();
        out
    }
}
