//! Machining operation parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of lathe operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperationType {
    #[default]
    Facing,
    Turning,
    Contouring,
    Threading,
    Parting,
    Drilling,
}

impl OperationType {
    pub const ALL: [OperationType; 6] = [
        OperationType::Facing,
        OperationType::Turning,
        OperationType::Contouring,
        OperationType::Threading,
        OperationType::Parting,
        OperationType::Drilling,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OperationType::Facing => "Facing",
            OperationType::Turning => "Turning",
            OperationType::Contouring => "Contouring",
            OperationType::Threading => "Threading",
            OperationType::Parting => "Parting",
            OperationType::Drilling => "Drilling",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full parameter set of one machining operation.
///
/// The radial staging distances are increments layered outward from
/// `outer_distance`; they are not absolute radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationConfiguration {
    pub operation_type: OperationType,

    // Tool
    pub tool_number: u32,
    pub rpm: f64,
    /// mm/min
    pub feedrate: f64,

    // Geometry
    /// Indices into the project's profile segments.
    pub geometry_selection: Vec<usize>,
    pub axial_start_position: f64,
    pub axial_end_position: f64,
    pub axial_start_offset: f64,
    pub axial_end_offset: f64,

    // Radii
    pub retract_distance: f64,
    pub clearance_distance: f64,
    pub feed_distance: f64,
    pub outer_distance: f64,
    pub inner_distance: f64,

    // Passes
    pub stepover: f64,
    pub cut_depth_per_pass: f64,
    pub spring_passes: u32,
    pub peck_depth: f64,
    /// Milliseconds.
    pub dwell_time: u32,
    /// Axial lead-out after each facing pass.
    pub backoff_distance: f64,
}

impl Default for OperationConfiguration {
    fn default() -> Self {
        Self {
            operation_type: OperationType::Facing,
            tool_number: 0,
            rpm: 1000.0,
            feedrate: 100.0,
            geometry_selection: Vec::new(),
            axial_start_position: 10.0,
            axial_end_position: 0.0,
            axial_start_offset: 0.0,
            axial_end_offset: 0.0,
            retract_distance: 5.0,
            clearance_distance: 2.0,
            feed_distance: 1.0,
            outer_distance: 10.0,
            inner_distance: 5.0,
            stepover: 5.0,
            cut_depth_per_pass: 2.0,
            spring_passes: 1,
            peck_depth: 3.0,
            dwell_time: 500,
            backoff_distance: 1.0,
        }
    }
}

impl OperationConfiguration {
    /// Defaults for the given kind of operation.
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            operation_type,
            ..Self::default()
        }
    }

    /// Axial start with its offset applied.
    pub fn z_start(&self) -> f64 {
        self.axial_start_position + self.axial_start_offset
    }

    /// Axial end with its offset applied.
    pub fn z_end(&self) -> f64 {
        self.axial_end_position + self.axial_end_offset
    }
}
