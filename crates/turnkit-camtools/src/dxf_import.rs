//! DXF profile import.
//!
//! Reads the straight-line entities of a DXF drawing into a [`Geometry`]
//! and places it in lathe coordinates according to [`DxfImportOptions`].

use crate::error::{CamToolResult, FileFormatError};
use dxf::entities::EntityType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, trace};
use turnkit_core::{Geometry, Line, Point2D, Segment, Transform};

const MM_PER_INCH: f64 = 25.4;

/// Which end of the drawing faces the chuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChuckSide {
    #[default]
    Left,
    Right,
}

/// Drawing units of the DXF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawingUnits {
    #[default]
    Millimeters,
    Inches,
}

/// Placement of an imported drawing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DxfImportOptions {
    pub axial_offset: f64,
    pub radial_offset: f64,
    pub chuck_side: ChuckSide,
    pub units: DrawingUnits,
}

impl DxfImportOptions {
    /// Transforms taking drawing coordinates to lathe profile coordinates,
    /// in application order.
    pub fn transforms(&self) -> Vec<Transform> {
        let mut transforms = Vec::new();
        if self.units == DrawingUnits::Inches {
            transforms.push(Transform::scale(MM_PER_INCH, MM_PER_INCH));
        }
        if self.chuck_side == ChuckSide::Right {
            transforms.push(Transform::mirror_x());
        }
        if self.axial_offset != 0.0 || self.radial_offset != 0.0 {
            transforms.push(Transform::translate(self.axial_offset, self.radial_offset));
        }
        transforms
    }
}

/// Lines joining consecutive vertices, plus a closing line when `closed`.
fn polyline_segments(points: &[Point2D], closed: bool, segments: &mut Vec<Segment>) {
    for pair in points.windows(2) {
        segments.push(Segment::Line(Line::new(pair[0], pair[1])));
    }
    if closed && points.len() > 2 {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            segments.push(Segment::Line(Line::new(*last, *first)));
        }
    }
}

fn entity_segments(entity: &EntityType, segments: &mut Vec<Segment>) {
    match entity {
        EntityType::Line(line) => {
            segments.push(Segment::Line(Line::from_coords(
                line.p1.x, line.p1.y, line.p2.x, line.p2.y,
            )));
        }
        EntityType::LwPolyline(polyline) => {
            let points: Vec<Point2D> = polyline
                .vertices
                .iter()
                .map(|v| Point2D::new(v.x, v.y))
                .collect();
            // Bit 0 (value 1) indicates closed
            polyline_segments(&points, polyline.flags & 1 != 0, segments);
        }
        EntityType::Polyline(polyline) => {
            let points: Vec<Point2D> = polyline
                .vertices()
                .map(|v| Point2D::new(v.location.x, v.location.y))
                .collect();
            polyline_segments(&points, polyline.flags & 1 != 0, segments);
        }
        other => trace!("Skipping unsupported DXF entity: {:?}", std::mem::discriminant(other)),
    }
}

/// Read the profile lines of an already loaded drawing.
pub fn geometry_from_drawing(drawing: &dxf::Drawing) -> Geometry {
    let mut segments = Vec::new();
    for entity in drawing.entities() {
        entity_segments(&entity.specific, &mut segments);
    }
    Geometry::new(segments)
}

/// Load a DXF file and place its profile with `options`.
pub fn load_dxf(path: &Path, options: &DxfImportOptions) -> CamToolResult<Geometry> {
    info!("Loading DXF file: {}", path.display());

    if !path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dxf"))
    {
        return Err(FileFormatError::UnknownExtension(path.display().to_string()).into());
    }

    let mut file = std::fs::File::open(path).map_err(FileFormatError::IoError)?;
    let drawing = dxf::Drawing::load(&mut file)
        .map_err(|e| FileFormatError::DxfParseError(e.to_string()))?;

    let geometry = geometry_from_drawing(&drawing);
    if geometry.is_empty() {
        return Err(FileFormatError::EmptyFile(path.display().to_string()).into());
    }
    debug!("DXF file traversed: {} segments", geometry.len());

    Ok(geometry.transform(&options.transforms()))
}
