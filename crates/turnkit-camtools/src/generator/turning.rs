//! Turning: axial cuts stepped in radius.

use super::staging::{pass_count, MoveWriter, RadialStages};
use tracing::debug;
use turnkit_core::{MachineConfig, OperationConfiguration, TPoint, ToolpathSequence};

/// Generator for turning passes between the outer and inner radius.
pub struct TurningGenerator<'a> {
    op: &'a OperationConfiguration,
    machine: &'a MachineConfig,
}

impl<'a> TurningGenerator<'a> {
    pub fn new(op: &'a OperationConfiguration, machine: &'a MachineConfig) -> Self {
        Self { op, machine }
    }

    pub fn generate(&self) -> ToolpathSequence {
        let op = self.op;
        let x_sign = self.machine.x_sign();

        let z_start = op.z_start();
        let z_end = op.z_end();
        let stages = RadialStages::compose(op);

        let clearance_start = TPoint::new(stages.clearance, z_start);
        let retract_start = TPoint::new(stages.retract, z_start);
        let feed_start = TPoint::new(stages.feed, z_start);
        let retract_end = TPoint::new(stages.retract, z_end);
        let clearance_end = TPoint::new(stages.clearance, z_end);

        let passes = pass_count(stages.outer - stages.inner, op.stepover);
        debug!(
            "Generating toolpath for operation: {} ({} passes)",
            op.operation_type, passes
        );

        let mut moves = MoveWriter::new(op, self.machine);
        moves.rapid(clearance_start, retract_start);

        let mut current = stages.outer;
        for _ in 1..passes {
            moves.rapid(retract_start, feed_start);
            current += op.stepover * x_sign;
            let cut_start = TPoint::new(current, z_start);
            let cut_end = TPoint::new(current, z_end);
            moves.cut(feed_start, cut_start);
            moves.cut(cut_start, cut_end);
            moves.retract(cut_end, retract_end);
            moves.rapid(retract_end, retract_start);
        }

        // Last pass finishes on the inner radius.
        let cut_start = TPoint::new(stages.inner, z_start);
        let cut_end = TPoint::new(stages.inner, z_end);
        moves.rapid(retract_start, feed_start);
        moves.cut(feed_start, cut_start);
        moves.cut(cut_start, cut_end);
        moves.retract(cut_end, retract_end);
        moves.rapid(retract_end, clearance_end);

        moves.finish()
    }
}

/// Turning passes for `op` on `machine`.
pub fn generate_turning_toolpath(op: &OperationConfiguration, machine: &MachineConfig) -> ToolpathSequence {
    TurningGenerator::new(op, machine).generate()
}
