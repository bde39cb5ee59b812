use super::Point2D;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// 2D vector used for projection and distance math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector pointing from `from` to `to`.
    pub fn between(from: &Point2D, to: &Point2D) -> Self {
        Self::new(to.x - from.x, to.y - from.y)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn scaled(&self, factor: f64) -> Vector2D {
        Vector2D::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}
