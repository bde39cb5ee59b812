//! Facing: radial cuts stepped along Z.

use super::staging::{pass_count, MoveWriter, RadialStages};
use tracing::debug;
use turnkit_core::{MachineConfig, OperationConfiguration, TPoint, ToolpathSequence};

/// Generator for facing passes.
///
/// Every pass feeds from the feed radius down to the inner radius at a
/// fixed Z, backs off axially to the backoff Z and returns to the retract
/// radius. Z advances by `stepover` per pass against the machine's Z
/// direction (toward smaller Z on a positive axis); the last pass is cut at
/// the exact end position. An end position on the other side of the start
/// is not rejected here, see `check_axial_direction`.
pub struct FacingGenerator<'a> {
    op: &'a OperationConfiguration,
    machine: &'a MachineConfig,
}

impl<'a> FacingGenerator<'a> {
    pub fn new(op: &'a OperationConfiguration, machine: &'a MachineConfig) -> Self {
        Self { op, machine }
    }

    pub fn generate(&self) -> ToolpathSequence {
        let op = self.op;
        let z_sign = self.machine.z_sign();

        let z_start = op.z_start();
        let z_end = op.z_end();
        let stages = RadialStages::compose(op);
        let backoff_z = z_start - op.backoff_distance * z_sign;
        let backoff_point = TPoint::new(stages.inner, backoff_z);
        let retract_at_backoff = TPoint::new(stages.retract, backoff_z);

        let passes = pass_count(z_end - z_start, op.stepover);
        debug!(
            "Generating toolpath for operation: {} ({} passes)",
            op.operation_type, passes
        );

        let mut moves = MoveWriter::new(op, self.machine);
        moves.rapid(TPoint::new(stages.clearance, backoff_z), retract_at_backoff);

        let mut current_z = z_start;
        for _ in 1..passes {
            current_z += op.stepover * z_sign;
            self.face_at(&mut moves, &stages, current_z, retract_at_backoff, backoff_point);
        }

        self.face_at(&mut moves, &stages, z_end, retract_at_backoff, backoff_point);
        moves.rapid(retract_at_backoff, TPoint::new(stages.clearance, backoff_z));

        moves.finish()
    }

    fn face_at(
        &self,
        moves: &mut MoveWriter<'_>,
        stages: &RadialStages,
        z: f64,
        retract_at_backoff: TPoint,
        backoff_point: TPoint,
    ) {
        let retract = TPoint::new(stages.retract, z);
        let feed = TPoint::new(stages.feed, z);
        let inner = TPoint::new(stages.inner, z);

        moves.rapid(retract_at_backoff, retract);
        moves.rapid(retract, feed);
        moves.cut(feed, inner);
        moves.retract(inner, backoff_point);
        moves.retract(backoff_point, retract_at_backoff);
    }
}

/// Facing passes for `op` on `machine`.
pub fn generate_facing_toolpath(op: &OperationConfiguration, machine: &MachineConfig) -> ToolpathSequence {
    FacingGenerator::new(op, machine).generate()
}
