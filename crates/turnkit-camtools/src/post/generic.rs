use super::{format_coord, PostProcessor, PostState};
use turnkit_core::{TPoint, Tool};

/// Plain RS-274 output with both axis words on every move.
#[derive(Debug, Clone)]
pub struct GenericPost {
    precision: usize,
}

impl GenericPost {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn coords(&self, point: TPoint) -> String {
        format!(
            "X{} Z{}",
            format_coord(point.x, self.precision),
            format_coord(point.z, self.precision)
        )
    }
}

impl PostProcessor for GenericPost {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn header(&self, _state: &mut PostState) -> String {
        let mut out = String::new();
        out.push_str("; TurnKit lathe program\n");
        out.push_str("G18 ; XZ plane\n");
        out.push_str("G21 ; Set units to millimeters\n");
        out.push_str("G90 ; Absolute positioning\n");
        out
    }

    fn tool_change(&self, tool_number: u32, tool: Option<&Tool>, state: &mut PostState) -> String {
        let mut out = match tool {
            Some(tool) => format!("; Tool {}: {} ({})\n", tool_number, tool.description, tool.iso_code),
            None => format!("; Tool {}\n", tool_number),
        };
        out.push_str(&self.spindle_off(state));
        out.push_str(&format!("T{}\n", tool_number));
        state.tool_number = Some(tool_number);
        out
    }

    fn spindle_on(&self, rpm: f64, state: &mut PostState) -> String {
        state.spindle_on = true;
        state.spindle_rpm = Some(rpm);
        format!("M3 S{:.0} ; Start spindle\n", rpm)
    }

    fn spindle_off(&self, state: &mut PostState) -> String {
        if !state.spindle_on {
            return String::new();
        }
        state.spindle_on = false;
        state.spindle_rpm = None;
        "M5 ; Stop spindle\n".to_string()
    }

    fn rapid_move(&self, point: TPoint, state: &mut PostState) -> String {
        state.set_position(point);
        format!("G0 {}\n", self.coords(point))
    }

    fn linear_move(&self, point: TPoint, feedrate: f64, state: &mut PostState) -> String {
        state.set_position(point);
        format!("G1 {} F{:.1}\n", self.coords(point), feedrate)
    }

    fn footer(&self, state: &mut PostState) -> String {
        let mut out = self.spindle_off(state);
        out.push_str("M30 ; End program\n");
        out
    }
}
