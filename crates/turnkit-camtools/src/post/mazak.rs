use super::{changed_axis_words, PostProcessor, PostState};
use turnkit_core::{TPoint, Tool};

/// Block numbers advance by this step.
const BLOCK_STEP: u32 = 10;

/// Mazak Quick Turn lathes in EIA mode, with numbered blocks.
#[derive(Debug, Clone)]
pub struct MazakPost {
    precision: usize,
    program_number: u32,
}

impl MazakPost {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            program_number: 1001,
        }
    }

    pub fn with_program_number(mut self, program_number: u32) -> Self {
        self.program_number = program_number;
        self
    }

    /// One numbered block.
    fn block(&self, words: &str, state: &mut PostState) -> String {
        state.block_number += BLOCK_STEP;
        format!("N{} {}\n", state.block_number, words)
    }

    fn home(&self, state: &mut PostState) -> String {
        let mut out = self.block("G28 U0", state);
        out.push_str(&self.block("G28 W0", state));
        state.clear_position();
        out
    }
}

impl Default for MazakPost {
    fn default() -> Self {
        Self::new(3)
    }
}

impl PostProcessor for MazakPost {
    fn name(&self) -> &'static str {
        "mazak_quick_turn"
    }

    fn header(&self, state: &mut PostState) -> String {
        let mut out = format!(
            "O{}\n(MAZAK QUICK TURN LATHE)\n(TURNKIT GENERATED PROGRAM)\n\n",
            self.program_number
        );
        out.push_str(&self.block("G18 G21 G40 G80 G97", state));
        out.push_str(&self.home(state));
        out.push('\n');
        out
    }

    fn tool_change(&self, tool_number: u32, _tool: Option<&Tool>, state: &mut PostState) -> String {
        let mut out = format!("\n(*** TOOL {} ***)\n", tool_number);
        out.push_str(&self.home(state));
        out.push_str(&self.block(&format!("T{n:02}{n:02}", n = tool_number), state));
        out.push_str(&self.block("G54", state));
        state.tool_number = Some(tool_number);
        out
    }

    fn spindle_on(&self, rpm: f64, state: &mut PostState) -> String {
        state.spindle_on = true;
        state.spindle_rpm = Some(rpm);
        self.block(&format!("M03 S{}", rpm.trunc() as i64), state)
    }

    fn spindle_off(&self, state: &mut PostState) -> String {
        if !state.spindle_on {
            return String::new();
        }
        state.spindle_on = false;
        state.spindle_rpm = None;
        self.block("M05", state)
    }

    fn rapid_move(&self, point: TPoint, state: &mut PostState) -> String {
        let words = changed_axis_words(point, self.precision, state);
        if words.is_empty() {
            return String::new();
        }
        self.block(&format!("G00 {}", words.join(" ")), state)
    }

    fn linear_move(&self, point: TPoint, feedrate: f64, state: &mut PostState) -> String {
        let words = changed_axis_words(point, self.precision, state);
        if words.is_empty() {
            return String::new();
        }
        self.block(&format!("G01 {} F{:.2}", words.join(" "), feedrate), state)
    }

    fn footer(&self, state: &mut PostState) -> String {
        let mut out = String::from("\n(*** PROGRAM END ***)\n");
        out.push_str(&self.home(state));
        out.push_str(&self.block("M30", state));
        out.push_str("%\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_numbers_blocks() {
        let post = MazakPost::default();
        let mut state = PostState::default();
        assert_eq!(
            post.header(&mut state),
            "O1001\n(MAZAK QUICK TURN LATHE)\n(TURNKIT GENERATED PROGRAM)\n\n\
             N10 G18 G21 G40 G80 G97\nN20 G28 U0\nN30 G28 W0\n\n"
        );
        assert_eq!(state.block_number, 30);
    }

    #[test]
    fn test_moves_continue_numbering() {
        let post = MazakPost::default().with_program_number(2002);
        let mut state = PostState {
            block_number: 40,
            ..PostState::default()
        };
        assert_eq!(post.rapid_move(TPoint::new(12.0, 2.0), &mut state), "N50 G00 X12.000 Z2.000\n");
        assert_eq!(
            post.linear_move(TPoint::new(12.0, -30.0), 100.0, &mut state),
            "N60 G01 Z-30.000 F100.00\n"
        );
        // Suppressed moves take no block number.
        assert_eq!(post.rapid_move(TPoint::new(12.0, -30.0), &mut state), "");
        assert_eq!(post.spindle_on(900.0, &mut state), "N70 M03 S900\n");
        assert!(post.header(&mut state).starts_with("O2002\n"));
    }

    #[test]
    fn test_tool_change() {
        let post = MazakPost::default();
        let mut state = PostState::default();
        assert_eq!(
            post.tool_change(3, None, &mut state),
            "\n(*** TOOL 3 ***)\nN10 G28 U0\nN20 G28 W0\nN30 T0303\nN40 G54\n"
        );
        assert_eq!(state.tool_number, Some(3));
    }
}
