//! Error types for the CAM tools crate.
//!
//! Covers operation setup, parameter validation, DXF import and
//! post-processing. Toolpath generation itself is infallible and only
//! surfaces [`CamToolError::UnsupportedOperation`] through the checked entry
//! point.

use std::io;
use thiserror::Error;
use turnkit_core::{GeometryError, OperationType};

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// Invalid parameters were provided to a CAM tool.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// No toolpath strategy exists for this operation type.
    #[error("Unsupported operation type: {0}")]
    UnsupportedOperation(OperationType),

    /// The referenced geometry cannot be used.
    #[error("Geometry error: {0}")]
    GeometryError(#[from] GeometryError),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A file format error occurred.
    #[error("File format error: {0}")]
    FileFormat(#[from] FileFormatError),
}

/// Errors related to operation parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A required parameter is missing or unset.
    #[error("Missing required parameter: {0}")]
    Missing(String),

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),
}

/// Errors related to file format parsing and conversion.
#[derive(Error, Debug)]
pub enum FileFormatError {
    /// The DXF file could not be parsed.
    #[error("DXF parse error: {0}")]
    DxfParseError(String),

    /// The file is empty or contains no usable data.
    #[error("Empty file: {0}")]
    EmptyFile(String),

    /// The file extension is not recognized.
    #[error("Unknown file extension: {0}")]
    UnknownExtension(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for file format operations.
pub type FileFormatResult<T> = Result<T, FileFormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::InvalidParameters("stepover must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameters: stepover must be positive");

        let err = CamToolError::UnsupportedOperation(OperationType::Threading);
        assert_eq!(err.to_string(), "Unsupported operation type: Threading");

        let err: CamToolError = GeometryError::SegmentOutOfRange { index: 4, len: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Geometry error: Segment index 4 out of range (geometry has 2 segments)"
        );
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "rpm".to_string(),
            value: 4000.0,
            min: 0.0,
            max: 3000.0,
        };
        assert_eq!(err.to_string(), "Parameter 'rpm' out of range: 4000 (valid: 0..3000)");

        let err = ParameterError::Missing("toolNumber".to_string());
        assert_eq!(err.to_string(), "Missing required parameter: toolNumber");

        let err = ParameterError::Incompatible(
            "axialEndPosition lies behind axialStartPosition".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Incompatible parameters: axialEndPosition lies behind axialStartPosition"
        );
    }

    #[test]
    fn test_file_format_error_display() {
        let err = FileFormatError::DxfParseError("unexpected EOF".to_string());
        assert_eq!(err.to_string(), "DXF parse error: unexpected EOF");

        let err = FileFormatError::UnknownExtension("part.step".to_string());
        assert_eq!(err.to_string(), "Unknown file extension: part.step");
    }

    #[test]
    fn test_error_conversion() {
        let cam_err: CamToolError = ParameterError::Missing("toolNumber".to_string()).into();
        assert!(matches!(cam_err, CamToolError::Parameter(_)));

        let cam_err: CamToolError = FileFormatError::EmptyFile("part.dxf".to_string()).into();
        assert!(matches!(cam_err, CamToolError::FileFormat(_)));

        let cam_err: CamToolError = GeometryError::SegmentOutOfRange { index: 4, len: 2 }.into();
        assert!(matches!(cam_err, CamToolError::GeometryError(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let fmt_err: FileFormatError = io_err.into();
        assert!(matches!(fmt_err, FileFormatError::IoError(_)));
    }
}
