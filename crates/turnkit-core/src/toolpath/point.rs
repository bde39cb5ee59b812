use serde::{Deserialize, Serialize};

/// A point in tool-motion space.
///
/// `x` is the radius and `z` the axial position, as on the lathe itself.
/// Not interchangeable with [`crate::Point2D`], whose axes follow the
/// drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TPoint {
    pub x: f64,
    pub z: f64,
}

impl TPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn distance_to(&self, other: &TPoint) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Same radius, different axial position.
    pub fn with_z(&self, z: f64) -> TPoint {
        TPoint::new(self.x, z)
    }

    /// Same axial position, different radius.
    pub fn with_x(&self, x: f64) -> TPoint {
        TPoint::new(x, self.z)
    }
}

impl From<(f64, f64)> for TPoint {
    fn from((x, z): (f64, f64)) -> Self {
        Self::new(x, z)
    }
}
