//! Toolpath generation for lathe operations.
//!
//! [`generate_toolpath`] dispatches on the operation type. Generation is a
//! pure function of the operation and machine configuration: no I/O, no
//! shared state, safe to run for several operations in parallel.

mod facing;
mod parting;
pub mod staging;
mod turning;

pub use facing::{generate_facing_toolpath, FacingGenerator};
pub use parting::{generate_parting_toolpath, PartingGenerator};
pub use staging::{pass_count, RadialStages, MAX_PASSES};
pub use turning::{generate_turning_toolpath, TurningGenerator};

use crate::error::{CamToolError, CamToolResult};
use crate::operation_setup::{check_machine_limits, validate_operation};
use tracing::{debug, error};
use turnkit_core::{MachineConfig, OperationConfiguration, OperationType, Project, ToolpathSequence};

/// Whether a toolpath strategy exists for this kind of operation.
pub fn is_supported(kind: OperationType) -> bool {
    matches!(
        kind,
        OperationType::Facing | OperationType::Turning | OperationType::Parting
    )
}

/// Generate the toolpath for one operation.
///
/// Unsupported operation types are logged and produce an empty sequence.
pub fn generate_toolpath(op: &OperationConfiguration, machine: &MachineConfig) -> ToolpathSequence {
    match op.operation_type {
        OperationType::Facing => generate_facing_toolpath(op, machine),
        OperationType::Turning => generate_turning_toolpath(op, machine),
        OperationType::Parting => generate_parting_toolpath(op, machine),
        other => {
            error!("Unsupported operation type for toolpath generation: {}", other);
            ToolpathSequence::new()
        }
    }
}

/// Like [`generate_toolpath`], but unsupported operation types are an error.
pub fn try_generate_toolpath(
    op: &OperationConfiguration,
    machine: &MachineConfig,
) -> CamToolResult<ToolpathSequence> {
    if !is_supported(op.operation_type) {
        return Err(CamToolError::UnsupportedOperation(op.operation_type));
    }
    Ok(generate_toolpath(op, machine))
}

/// One sequence per project operation, in operation order.
pub fn generate_project_toolpaths(project: &Project, machine: &MachineConfig) -> Vec<ToolpathSequence> {
    project
        .operations
        .iter()
        .map(|op| generate_toolpath(op, machine))
        .collect()
}

/// Validate and generate every project operation, in order.
///
/// Unlike [`generate_project_toolpaths`], an invalid, out-of-limits or
/// unsupported operation fails the whole project.
pub fn try_generate_project_toolpaths(
    project: &Project,
    machine: &MachineConfig,
) -> CamToolResult<Vec<ToolpathSequence>> {
    project
        .operations
        .iter()
        .enumerate()
        .map(|(index, op)| {
            debug!("Operation {}: {}", index, op.operation_type);
            validate_operation(op)?;
            check_machine_limits(op, machine)?;
            try_generate_toolpath(op, machine)
        })
        .collect()
}
