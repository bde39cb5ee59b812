//! Error handling for TurnKit core
//!
//! Provides the error types shared by the data model:
//! - Geometry errors (invalid segment references, malformed profiles)
//! - Project errors (loading/saving project files)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents problems with profile geometry or references into it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A segment index does not exist in the geometry
    #[error("Segment index {index} out of range (geometry has {len} segments)")]
    SegmentOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of segments in the geometry.
        len: usize,
    },

    /// A segment has the wrong kind or orientation for the requested use
    #[error("Unsuitable segment {index}: {reason}")]
    UnsuitableSegment {
        /// The offending segment index.
        index: usize,
        /// Why the segment cannot be used.
        reason: String,
    },
}

/// Project error type
#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    /// The project file does not exist
    #[error("Project file does not exist: {path}")]
    NotFound {
        /// The path that was looked up.
        path: String,
    },

    /// The project file could not be interpreted
    #[error("Invalid project file {path}: {reason}")]
    Invalid {
        /// The path of the project file.
        path: String,
        /// The parse failure.
        reason: String,
    },
}

/// Main error type
///
/// Aggregates all error types from the core crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Project error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check whether this is a geometry error.
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
