//! Post-processors turning toolpath sequences into lathe G-code.
//!
//! A [`PostProcessor`] emits one text fragment per program event (header,
//! tool change, spindle, move, footer). [`emit_program`] walks the
//! sequences in order and decides which events occur.

mod fanuc;
mod generic;
mod haas;
mod mazak;

pub use fanuc::FanucPost;
pub use generic::GenericPost;
pub use haas::HaasPost;
pub use mazak::MazakPost;

use crate::error::{CamToolError, CamToolResult};
use tracing::{debug, info};
use turnkit_core::{MachineConfig, TPoint, Tool, ToolTable, ToolpathSequence};

/// Controller state tracked while posting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostState {
    /// Last commanded radius, if known.
    pub x: Option<f64>,
    /// Last commanded axial position, if known.
    pub z: Option<f64>,
    pub tool_number: Option<u32>,
    pub spindle_rpm: Option<f64>,
    pub spindle_on: bool,
    /// Last emitted block (N) number, for posts that number their blocks.
    pub block_number: u32,
}

impl PostState {
    pub fn is_at(&self, point: TPoint) -> bool {
        self.x == Some(point.x) && self.z == Some(point.z)
    }

    /// Forget the position, e.g. after returning to the reference point.
    pub fn clear_position(&mut self) {
        self.x = None;
        self.z = None;
    }

    pub fn set_position(&mut self, point: TPoint) {
        self.x = Some(point.x);
        self.z = Some(point.z);
    }
}

/// Controller dialect.
pub trait PostProcessor {
    /// Name used in `MachineConfig::postprocessor_class_name`.
    fn name(&self) -> &'static str;

    /// Program start.
    fn header(&self, state: &mut PostState) -> String;

    /// Switch to `tool_number`; `tool` is its tool table entry if present.
    fn tool_change(&self, tool_number: u32, tool: Option<&Tool>, state: &mut PostState) -> String;

    fn spindle_on(&self, rpm: f64, state: &mut PostState) -> String;

    fn spindle_off(&self, state: &mut PostState) -> String;

    /// Positioning move to `point`.
    fn rapid_move(&self, point: TPoint, state: &mut PostState) -> String;

    /// Feed move to `point` at `feedrate` mm/min.
    fn linear_move(&self, point: TPoint, feedrate: f64, state: &mut PostState) -> String;

    /// Program end.
    fn footer(&self, state: &mut PostState) -> String;
}

/// Format a coordinate with a fixed number of decimals.
pub fn format_coord(value: f64, precision: usize) -> String {
    // Avoid printing "-0.000".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.prec$}", value, prec = precision)
}

/// X/Z words for the axes of `point` that differ from the last commanded
/// position. The position is updated when any word is produced.
pub(crate) fn changed_axis_words(
    point: TPoint,
    precision: usize,
    state: &mut PostState,
) -> Vec<String> {
    let mut words = Vec::with_capacity(2);
    if state.x != Some(point.x) {
        words.push(format!("X{}", format_coord(point.x, precision)));
    }
    if state.z != Some(point.z) {
        words.push(format!("Z{}", format_coord(point.z, precision)));
    }
    if !words.is_empty() {
        state.set_position(point);
    }
    words
}

/// Generate the complete program for `sequences`, in order.
///
/// Emits a tool change whenever the tool number changes and a spindle
/// command whenever the speed changes. Moves at or above the machine's
/// rapid rate are posted as rapids, everything else as feed moves.
pub fn emit_program(
    post: &dyn PostProcessor,
    sequences: &[ToolpathSequence],
    machine: &MachineConfig,
    tools: &ToolTable,
) -> String {
    info!("Posting {} toolpath sequences with {}", sequences.len(), post.name());

    let mut state = PostState::default();
    let mut program = post.header(&mut state);
    let mut moves = 0usize;

    for toolpath in sequences.iter().flat_map(ToolpathSequence::iter) {
        let tool_number = toolpath.tool_number();
        if state.tool_number != Some(tool_number) {
            program.push_str(&post.tool_change(tool_number, tools.find(tool_number), &mut state));
        }

        let rpm = toolpath.rpm();
        if !state.spindle_on || state.spindle_rpm != Some(rpm) {
            program.push_str(&post.spindle_on(rpm, &mut state));
        }

        let start = toolpath.start();
        if !state.is_at(start) {
            program.push_str(&post.rapid_move(start, &mut state));
        }

        let end = toolpath.end();
        if toolpath.is_rapid(machine) {
            program.push_str(&post.rapid_move(end, &mut state));
        } else {
            program.push_str(&post.linear_move(end, toolpath.feed_rate(), &mut state));
        }
        moves += 1;
    }

    program.push_str(&post.footer(&mut state));
    debug!("Posted {} moves", moves);
    program
}

/// Built-in post-processor by name.
pub fn post_for_name(name: &str, machine: &MachineConfig) -> CamToolResult<Box<dyn PostProcessor>> {
    let precision = machine.display_precision as usize;
    match name.trim().to_ascii_lowercase().as_str() {
        "fanuc_0t" | "fanuc" | "" => Ok(Box::new(FanucPost::new(precision))),
        "haas_st" | "haas_st_series" | "haas" => Ok(Box::new(HaasPost::new(precision))),
        "mazak_quick_turn" | "mazak" => Ok(Box::new(MazakPost::new(precision))),
        "generic" => Ok(Box::new(GenericPost::new(precision))),
        other => Err(CamToolError::InvalidParameters(format!(
            "Unknown post-processor: {}",
            other
        ))),
    }
}
