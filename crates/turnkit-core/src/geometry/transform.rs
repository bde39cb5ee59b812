//! Affine transforms for profile geometry.

use serde::{Deserialize, Serialize};

/// 2D affine transform: `p' = linear * p + translation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Row-major 2x2 matrix.
    pub linear: [[f64; 2]; 2],
    pub translation: [f64; 2],
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            linear: [[1.0, 0.0], [0.0, 1.0]],
            translation: [0.0, 0.0],
        }
    }

    pub fn translate(dx: f64, dy: f64) -> Self {
        Self {
            translation: [dx, dy],
            ..Self::identity()
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            linear: [[sx, 0.0], [0.0, sy]],
            ..Self::identity()
        }
    }

    /// Counter-clockwise rotation by `angle` radians about the origin.
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            linear: [[cos, -sin], [sin, cos]],
            ..Self::identity()
        }
    }

    /// Mirror across the Y axis (negates x).
    pub fn mirror_x() -> Self {
        Self::scale(-1.0, 1.0)
    }

    /// Mirror across the X axis (negates y).
    pub fn mirror_y() -> Self {
        Self::scale(1.0, -1.0)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
