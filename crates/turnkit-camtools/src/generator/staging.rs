//! Shared staging math and move emission for the pass generators.

use tracing::warn;
use turnkit_core::{MachineConfig, OperationConfiguration, TPoint, ToolpathSequence};

/// Upper bound on passes for a single operation.
pub const MAX_PASSES: usize = 10_000;

/// Absolute radii of the staging positions of an operation.
///
/// Each configured distance is an increment over the previous stage:
/// `feed = outer + feedDistance`, `retract = feed + retractDistance`,
/// `clearance = retract + clearanceDistance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialStages {
    pub clearance: f64,
    pub retract: f64,
    pub feed: f64,
    pub outer: f64,
    pub inner: f64,
}

impl RadialStages {
    pub fn compose(op: &OperationConfiguration) -> Self {
        let outer = op.outer_distance;
        let feed = outer + op.feed_distance;
        let retract = outer + op.feed_distance + op.retract_distance;
        let clearance = outer + op.feed_distance + op.retract_distance + op.clearance_distance;
        Self {
            clearance,
            retract,
            feed,
            outer,
            inner: op.inner_distance,
        }
    }
}

/// Number of passes needed to cover `span` in increments of `step`.
///
/// Always at least one: the last pass lands on the exact end position and
/// is emitted even when there is nothing to step over. A non-positive step
/// or a non-finite input collapses to that single pass.
pub fn pass_count(span: f64, step: f64) -> usize {
    if !span.is_finite() || !step.is_finite() {
        warn!("Non-finite pass span {} or step {}; using a single pass", span, step);
        return 1;
    }
    if step <= 0.0 {
        warn!("Step {} is not positive; using a single pass", step);
        return 1;
    }

    let passes = (span.abs() / step).ceil();
    if passes > MAX_PASSES as f64 {
        warn!("{} passes requested, clamping to {}", passes, MAX_PASSES);
        return MAX_PASSES;
    }
    (passes as usize).max(1)
}

/// Appends moves for one operation with its tool, spindle speed and rates.
pub(crate) struct MoveWriter<'a> {
    sequence: ToolpathSequence,
    machine: &'a MachineConfig,
    tool_number: u32,
    rpm: f64,
    feedrate: f64,
}

impl<'a> MoveWriter<'a> {
    pub(crate) fn new(op: &OperationConfiguration, machine: &'a MachineConfig) -> Self {
        Self {
            sequence: ToolpathSequence::new(),
            machine,
            tool_number: op.tool_number,
            rpm: op.rpm,
            feedrate: op.feedrate,
        }
    }

    /// Positioning move at the machine's rapid rate.
    pub(crate) fn rapid(&mut self, from: TPoint, to: TPoint) {
        self.push(from, to, self.machine.rapid_feed_rate);
    }

    /// Cutting move at the operation's feed rate.
    pub(crate) fn cut(&mut self, from: TPoint, to: TPoint) {
        self.push(from, to, self.feedrate);
    }

    /// Move out of the material at the machine's retract rate.
    pub(crate) fn retract(&mut self, from: TPoint, to: TPoint) {
        self.push(from, to, self.machine.retract_feed_rate);
    }

    pub(crate) fn finish(self) -> ToolpathSequence {
        self.sequence
    }

    fn push(&mut self, from: TPoint, to: TPoint, feed_rate: f64) {
        self.sequence
            .push_line(from, to, self.tool_number, feed_rate, self.rpm);
    }
}
