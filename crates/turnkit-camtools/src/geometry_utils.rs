//! Orientation helpers for profile segments.
//!
//! A line may be drawn in either direction. These helpers return its
//! endpoints in machining order for the configured axis conventions.

use turnkit_core::{AxisDirection, Line, MachineConfig, Point2D};

/// Order two points by radius into `(inner, outer)`.
///
/// With a positive X axis the inner point has the smaller radius; with a
/// negative X axis the larger one. Equal radii return `(p1, p2)`.
pub fn inner_and_outer(p1: Point2D, p2: Point2D, x_direction: AxisDirection) -> (Point2D, Point2D) {
    if p1.y == p2.y {
        return (p1, p2);
    }
    let (smaller, larger) = if p1.y < p2.y { (p1, p2) } else { (p2, p1) };
    match x_direction {
        AxisDirection::Positive => (smaller, larger),
        AxisDirection::Negative => (larger, smaller),
    }
}

/// Order two points by axial position into `(chuck side, tailstock side)`.
///
/// With a positive Z axis (moving towards the tailstock) the chuck-side
/// point has the smaller axial coordinate. Equal positions return
/// `(p1, p2)`.
pub fn chuck_and_tailstock(p1: Point2D, p2: Point2D, z_direction: AxisDirection) -> (Point2D, Point2D) {
    if p1.x == p2.x {
        return (p1, p2);
    }
    let (smaller, larger) = if p1.x < p2.x { (p1, p2) } else { (p2, p1) };
    match z_direction {
        AxisDirection::Positive => (smaller, larger),
        AxisDirection::Negative => (larger, smaller),
    }
}

/// `(inner, outer)` endpoints of `line` for `machine`.
pub fn get_inner_and_outer_point(line: &Line, machine: &MachineConfig) -> (Point2D, Point2D) {
    inner_and_outer(line.p1, line.p2, machine.x_axis_direction)
}

/// `(chuck, tailstock)` endpoints of `line` for `machine`.
pub fn get_chuck_and_tailstock_point(line: &Line, machine: &MachineConfig) -> (Point2D, Point2D) {
    chuck_and_tailstock(line.p1, line.p2, machine.z_axis_direction)
}
