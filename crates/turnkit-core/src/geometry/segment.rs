//! Profile segments.

use super::{Point2D, Transform, Vector2D};
use serde::{Deserialize, Serialize};

/// A straight profile segment between two points.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point2D,
    pub p2: Point2D,
}

impl Line {
    pub fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(&self.p2)
    }

    /// Constant axial position (exact comparison).
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    /// Constant radius (exact comparison).
    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }

    /// Shortest distance from `point` to this segment.
    ///
    /// Outside the projection range the distance to the nearer endpoint is
    /// returned. A zero-length line measures straight to `p1`.
    pub fn distance(&self, point: &Point2D) -> f64 {
        let direction = Vector2D::between(&self.p1, &self.p2);
        if direction.norm() == 0.0 {
            return self.p1.distance_to(point);
        }

        let to_point = Vector2D::between(&self.p1, point);
        let t = to_point.dot(&direction) / direction.dot(&direction);
        if t < 0.0 {
            self.p1.distance_to(point)
        } else if t > 1.0 {
            self.p2.distance_to(point)
        } else {
            let projection = direction.scaled(t);
            (to_point - projection).norm()
        }
    }

    pub fn transform(&self, transforms: &[Transform]) -> Line {
        Line::new(self.p1.transform(transforms), self.p2.transform(transforms))
    }
}

/// Endpoints compare as an unordered pair.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2)
            || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

/// A segment of an imported profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Segment {
    Line(Line),
}

impl Segment {
    pub fn distance(&self, point: &Point2D) -> f64 {
        match self {
            Segment::Line(line) => line.distance(point),
        }
    }

    pub fn transform(&self, transforms: &[Transform]) -> Segment {
        match self {
            Segment::Line(line) => Segment::Line(line.transform(transforms)),
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Segment::Line(line) => Some(line),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Line(_) => "Line",
        }
    }

    pub fn start(&self) -> Point2D {
        match self {
            Segment::Line(line) => line.p1,
        }
    }

    pub fn end(&self) -> Point2D {
        match self {
            Segment::Line(line) => line.p2,
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Segment::Line(line)
    }
}
