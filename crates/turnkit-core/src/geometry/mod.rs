//! Profile geometry: points, vectors, transforms and segments.
//!
//! Geometry lives in profile space (as imported from DXF): `x` is the axial
//! coordinate and `y` the radius. Toolpaths use their own [`crate::TPoint`]
//! with lathe naming.

mod point;
mod segment;
mod transform;
mod vector;

pub use point::Point2D;
pub use segment::{Line, Segment};
pub use transform::Transform;
pub use vector::Vector2D;

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// An ordered profile made of owned segments.
///
/// Cloning a `Geometry` deep-copies every segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub segments: Vec<Segment>,
}

impl Geometry {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Look up a segment by index.
    pub fn segment(&self, index: usize) -> Result<&Segment, GeometryError> {
        self.segments
            .get(index)
            .ok_or(GeometryError::SegmentOutOfRange {
                index,
                len: self.segments.len(),
            })
    }

    /// A new geometry with every segment transformed.
    pub fn transform(&self, transforms: &[Transform]) -> Geometry {
        Geometry::new(self.segments.iter().map(|s| s.transform(transforms)).collect())
    }

    /// Index of the segment closest to `point`, if any.
    pub fn nearest_segment(&self, point: &Point2D) -> Option<usize> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.distance(point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Axis-aligned bounds `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.segments.iter().flat_map(|s| [s.start(), s.end()]);
        let first = points.next()?;
        Some(points.fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        ))
    }
}

impl<'a> IntoIterator for &'a Geometry {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
