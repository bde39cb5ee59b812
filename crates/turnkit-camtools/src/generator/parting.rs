//! Parting: stepped radial plunges at a single Z.

use super::staging::{pass_count, MoveWriter, RadialStages};
use tracing::debug;
use turnkit_core::{MachineConfig, OperationConfiguration, TPoint, ToolpathSequence};

/// Generator for parting plunges.
///
/// Each plunge goes `cut_depth_per_pass` deeper than the previous one and
/// retracts fully between plunges to clear chips.
pub struct PartingGenerator<'a> {
    op: &'a OperationConfiguration,
    machine: &'a MachineConfig,
}

impl<'a> PartingGenerator<'a> {
    pub fn new(op: &'a OperationConfiguration, machine: &'a MachineConfig) -> Self {
        Self { op, machine }
    }

    pub fn generate(&self) -> ToolpathSequence {
        let op = self.op;
        let x_sign = self.machine.x_sign();

        let z = op.z_start();
        let stages = RadialStages::compose(op);
        let clearance = TPoint::new(stages.clearance, z);
        let retract = TPoint::new(stages.retract, z);
        let feed = TPoint::new(stages.feed, z);
        let inner = TPoint::new(stages.inner, z);

        let passes = pass_count(stages.outer - stages.inner, op.cut_depth_per_pass);
        debug!(
            "Generating toolpath for operation: {} ({} passes)",
            op.operation_type, passes
        );

        let mut moves = MoveWriter::new(op, self.machine);
        moves.rapid(clearance, retract);

        let mut current_x = stages.outer;
        for _ in 1..passes {
            moves.rapid(retract, feed);
            current_x += op.cut_depth_per_pass * x_sign;
            let depth = TPoint::new(current_x, z);
            moves.cut(feed, depth);
            moves.retract(depth, retract);
        }

        moves.rapid(retract, feed);
        moves.cut(feed, inner);
        moves.retract(inner, retract);
        moves.rapid(retract, clearance);

        moves.finish()
    }
}

/// Parting plunges for `op` on `machine`.
pub fn generate_parting_toolpath(op: &OperationConfiguration, machine: &MachineConfig) -> ToolpathSequence {
    PartingGenerator::new(op, machine).generate()
}
