//! Machine-wide configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign convention for one machine axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDirection {
    #[default]
    Positive,
    Negative,
}

impl AxisDirection {
    pub fn flipped(self) -> Self {
        match self {
            AxisDirection::Positive => AxisDirection::Negative,
            AxisDirection::Negative => AxisDirection::Positive,
        }
    }
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisDirection::Positive => write!(f, "positive"),
            AxisDirection::Negative => write!(f, "negative"),
        }
    }
}

/// Multiplier applied to every per-pass increment along an axis.
///
/// Passes advance toward the centreline/chuck, which is the negative sense
/// of a positive axis, so `Positive` yields `-1.0` and `Negative` `+1.0`.
pub fn axis_sign(direction: AxisDirection) -> f64 {
    match direction {
        AxisDirection::Positive => -1.0,
        AxisDirection::Negative => 1.0,
    }
}

/// Machine limits, conventions and ambient rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineConfig {
    /// Moving towards the tailstock is positive by default.
    pub z_axis_direction: AxisDirection,
    /// Moving away from the centreline is positive by default.
    pub x_axis_direction: AxisDirection,

    pub max_spindle_speed: f64,
    #[serde(rename = "maxFeedRateMMMin")]
    pub max_feed_rate_mm_min: f64,
    #[serde(rename = "maxFeedRateMMRev")]
    pub max_feed_rate_mm_rev: f64,
    pub max_z_travel: f64,
    pub max_x_radius: f64,
    pub min_clearance_distance: f64,

    /// Decimal places for coordinates in previews and G-code.
    pub display_precision: u32,

    /// Feed rate used for positioning moves (mm/min).
    pub rapid_feed_rate: f64,
    /// Feed rate used for leaving the material (mm/min).
    pub retract_feed_rate: f64,

    pub postprocessor_script_path: String,
    pub postprocessor_class_name: String,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            z_axis_direction: AxisDirection::Positive,
            x_axis_direction: AxisDirection::Positive,
            max_spindle_speed: 3000.0,
            max_feed_rate_mm_min: 2000.0,
            max_feed_rate_mm_rev: 0.5,
            max_z_travel: 300.0,
            max_x_radius: 150.0,
            min_clearance_distance: 5.0,
            display_precision: 3,
            rapid_feed_rate: 2000.0,
            retract_feed_rate: 500.0,
            postprocessor_script_path: String::new(),
            postprocessor_class_name: "fanuc_0t".to_string(),
        }
    }
}

impl MachineConfig {
    pub fn x_sign(&self) -> f64 {
        axis_sign(self.x_axis_direction)
    }

    pub fn z_sign(&self) -> f64 {
        axis_sign(self.z_axis_direction)
    }
}
