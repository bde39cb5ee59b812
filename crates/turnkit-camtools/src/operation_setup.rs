//! Fill operation parameters from a selected profile segment.
//!
//! Picking a segment on the profile sets the axial positions and radii an
//! operation works between. The generator only consumes the resulting
//! numbers and never looks at the geometry itself.

use crate::error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
use crate::geometry_utils::{get_chuck_and_tailstock_point, get_inner_and_outer_point};
use tracing::{debug, warn};
use turnkit_core::{
    AxisDirection, Geometry, GeometryError, Line, MachineConfig, OperationConfiguration,
    OperationType, Project, StockMaterial,
};

fn select_line(geometry: &Geometry, index: usize, kind: OperationType) -> CamToolResult<&Line> {
    let segment = geometry.segment(index)?;
    segment.as_line().ok_or_else(|| {
        warn!("{} operation requires a line segment. Selected segment is not a line.", kind);
        CamToolError::GeometryError(GeometryError::UnsuitableSegment {
            index,
            reason: format!("{} requires a line segment", kind),
        })
    })
}

fn require_vertical(line: &Line, index: usize, kind: OperationType) -> CamToolResult<()> {
    if line.is_vertical() {
        return Ok(());
    }
    warn!("{} operation requires a vertical line segment. Selected segment is not vertical.", kind);
    Err(GeometryError::UnsuitableSegment {
        index,
        reason: format!("{} requires a vertical line", kind),
    }
    .into())
}

/// Face down the vertical line at `index`.
pub fn configure_facing(
    op: &mut OperationConfiguration,
    geometry: &Geometry,
    index: usize,
    machine: &MachineConfig,
) -> CamToolResult<()> {
    let line = select_line(geometry, index, OperationType::Facing)?;
    require_vertical(line, index, OperationType::Facing)?;

    let (inner, outer) = get_inner_and_outer_point(line, machine);
    op.geometry_selection = vec![index];
    op.axial_start_position = line.p1.x;
    op.axial_end_position = line.p1.x;
    op.inner_distance = inner.y;
    op.outer_distance = outer.y;

    debug!("Facing configured from segment {}: {} -> {}", index, outer.y, inner.y);
    Ok(())
}

/// Turn the stock down to the horizontal line at `index`.
pub fn configure_turning(
    op: &mut OperationConfiguration,
    geometry: &Geometry,
    index: usize,
    machine: &MachineConfig,
    stock: &StockMaterial,
) -> CamToolResult<()> {
    let line = select_line(geometry, index, OperationType::Turning)?;
    if !line.is_horizontal() {
        warn!("Turning operation requires a horizontal line segment. Selected segment is not horizontal.");
        return Err(GeometryError::UnsuitableSegment {
            index,
            reason: "Turning requires a horizontal line".to_string(),
        }
        .into());
    }

    let (chuck, tailstock) = get_chuck_and_tailstock_point(line, machine);
    op.geometry_selection = vec![index];
    op.axial_start_position = tailstock.x;
    op.axial_end_position = chuck.x;
    op.inner_distance = chuck.y;
    op.outer_distance = match machine.x_axis_direction {
        AxisDirection::Positive => stock.radius,
        AxisDirection::Negative => -stock.radius,
    };

    debug!(
        "Turning configured from segment {}: Z {} -> {}",
        index, op.axial_start_position, op.axial_end_position
    );
    Ok(())
}

/// Part off at the vertical line at `index`.
pub fn configure_parting(
    op: &mut OperationConfiguration,
    geometry: &Geometry,
    index: usize,
    machine: &MachineConfig,
) -> CamToolResult<()> {
    let line = select_line(geometry, index, OperationType::Parting)?;
    require_vertical(line, index, OperationType::Parting)?;

    let (inner, outer) = get_inner_and_outer_point(line, machine);
    op.geometry_selection = vec![index];
    op.axial_start_position = line.p1.x;
    op.axial_end_position = line.p1.x;
    op.inner_distance = inner.y;
    op.outer_distance = outer.y;

    debug!("Parting configured from segment {} at Z {}", index, line.p1.x);
    Ok(())
}

/// Configure `op` from a project segment according to its operation type.
pub fn configure_from_segment(
    op: &mut OperationConfiguration,
    project: &Project,
    index: usize,
    machine: &MachineConfig,
) -> CamToolResult<()> {
    match op.operation_type {
        OperationType::Facing => configure_facing(op, &project.geometry, index, machine),
        OperationType::Turning => {
            configure_turning(op, &project.geometry, index, machine, &project.stock_material)
        }
        OperationType::Parting => configure_parting(op, &project.geometry, index, machine),
        other => Err(CamToolError::UnsupportedOperation(other)),
    }
}

fn require_finite(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("{} is not a finite number", value),
        })
    }
}

fn require_positive(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("must be greater than 0, got {}", value),
        })
    }
}

fn require_non_negative(name: &str, value: f64) -> ParameterResult<()> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidValue {
            name: name.to_string(),
            reason: format!("must not be negative, got {}", value),
        })
    }
}

/// Reject parameter sets the generator would turn into nonsense.
pub fn validate_operation(op: &OperationConfiguration) -> ParameterResult<()> {
    // Tool numbers start at 1; 0 is the unassigned default.
    if op.tool_number == 0 {
        return Err(ParameterError::Missing("toolNumber".to_string()));
    }
    require_positive("rpm", op.rpm)?;
    require_positive("feedrate", op.feedrate)?;

    for (name, value) in [
        ("axialStartPosition", op.axial_start_position),
        ("axialEndPosition", op.axial_end_position),
        ("axialStartOffset", op.axial_start_offset),
        ("axialEndOffset", op.axial_end_offset),
        ("outerDistance", op.outer_distance),
        ("innerDistance", op.inner_distance),
    ] {
        require_finite(name, value)?;
    }

    for (name, value) in [
        ("retractDistance", op.retract_distance),
        ("clearanceDistance", op.clearance_distance),
        ("feedDistance", op.feed_distance),
    ] {
        require_non_negative(name, value)?;
    }

    match op.operation_type {
        OperationType::Facing => {
            require_positive("stepover", op.stepover)?;
            require_non_negative("backoffDistance", op.backoff_distance)?;
        }
        OperationType::Turning => require_positive("stepover", op.stepover)?,
        OperationType::Parting => require_positive("cutDepthPerPass", op.cut_depth_per_pass)?,
        _ => {}
    }

    Ok(())
}

/// Facing advances Z by `stepover` against the machine's Z direction, so
/// the end position has to lie on that side of the start.
pub fn check_axial_direction(op: &OperationConfiguration, machine: &MachineConfig) -> ParameterResult<()> {
    if op.operation_type != OperationType::Facing {
        return Ok(());
    }
    if (op.z_end() - op.z_start()) * machine.z_sign() < 0.0 {
        return Err(ParameterError::Incompatible(format!(
            "axialEndPosition {} lies behind axialStartPosition {} for a {} Z axis",
            op.z_end(),
            op.z_start(),
            machine.z_axis_direction
        )));
    }
    Ok(())
}

/// Check spindle speed, feed rate and axial direction against the machine.
pub fn check_machine_limits(op: &OperationConfiguration, machine: &MachineConfig) -> ParameterResult<()> {
    if op.rpm > machine.max_spindle_speed {
        return Err(ParameterError::OutOfRange {
            name: "rpm".to_string(),
            value: op.rpm,
            min: 0.0,
            max: machine.max_spindle_speed,
        });
    }
    if op.feedrate > machine.max_feed_rate_mm_min {
        return Err(ParameterError::OutOfRange {
            name: "feedrate".to_string(),
            value: op.feedrate,
            min: 0.0,
            max: machine.max_feed_rate_mm_min,
        });
    }
    check_axial_direction(op, machine)
}
