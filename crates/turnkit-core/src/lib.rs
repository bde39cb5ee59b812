//! # TurnKit Core
//!
//! Data model shared by the TurnKit crates:
//!
//! - **geometry**: profile points, affine transforms and segments (DXF space)
//! - **toolpath**: tool-motion points, moves and per-operation sequences
//! - **machine**: machine limits, axis sign conventions and ambient rates
//! - **operation**: machining operation kinds and parameters
//! - **data**: stock material and tool table
//! - **project**: the project record and its JSON file format
//!
//! Nothing here performs toolpath generation; see `turnkit-camtools`.

pub mod data;
pub mod error;
pub mod geometry;
pub mod machine;
pub mod operation;
pub mod project;
pub mod toolpath;

pub use data::{StockMaterial, Tool, ToolTable};
pub use error::{Error, GeometryError, ProjectError, Result};
pub use geometry::{Geometry, Line, Point2D, Segment, Transform, Vector2D};
pub use machine::{axis_sign, AxisDirection, MachineConfig};
pub use operation::{OperationConfiguration, OperationType};
pub use project::Project;
pub use toolpath::{TPoint, Toolpath, ToolpathLine, ToolpathSequence};
