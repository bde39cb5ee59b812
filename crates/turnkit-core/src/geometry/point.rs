//! 2D points in profile (DXF) space.

use super::Transform;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point of the imported profile.
///
/// `x` runs along the spindle axis and `y` is the radius, as drawn in the
/// DXF file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Apply a single affine transform.
    pub fn apply(&self, transform: &Transform) -> Point2D {
        let [[a, b], [c, d]] = transform.linear;
        let [tx, ty] = transform.translation;
        Point2D {
            x: a * self.x + b * self.y + tx,
            y: c * self.x + d * self.y + ty,
        }
    }

    /// Apply each transform in turn to the running point.
    ///
    /// The list is folded left to right; it is never pre-multiplied into a
    /// single matrix, so the order the list was built in is the order the
    /// transforms take effect.
    pub fn transform(&self, transforms: &[Transform]) -> Point2D {
        transforms
            .iter()
            .fold(*self, |point, transform| point.apply(transform))
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, other: Point2D) -> Point2D {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
