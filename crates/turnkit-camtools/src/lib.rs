//! # TurnKit CAM Tools
//!
//! Lathe toolpath generation and the processing around it.
//!
//! ## Toolpath Generation
//!
//! - **Facing**: radial cuts stepped along Z, with an axial backoff after each pass
//! - **Turning**: axial cuts stepped in radius from the stock down to the profile
//! - **Parting**: stepped radial plunges at a single axial position
//!
//! ## Supporting Infrastructure
//!
//! - **Geometry Utilities**: endpoint ordering by machine axis conventions
//! - **Operation Setup**: operation parameters from a selected profile segment, and validation
//! - **DXF Import**: profile lines from DXF drawings
//! - **Post-Processors**: Fanuc 0-T, Haas ST, Mazak Quick Turn and generic G-code output

pub mod dxf_import;
pub mod error;
pub mod generator;
pub mod geometry_utils;
pub mod operation_setup;
pub mod post;

pub use dxf_import::{load_dxf, ChuckSide, DrawingUnits, DxfImportOptions};
pub use error::{
    CamToolError, CamToolResult, FileFormatError, FileFormatResult, ParameterError,
    ParameterResult,
};
pub use generator::{
    generate_facing_toolpath, generate_parting_toolpath, generate_project_toolpaths,
    generate_toolpath, generate_turning_toolpath, pass_count, try_generate_project_toolpaths,
    try_generate_toolpath, FacingGenerator, PartingGenerator, RadialStages, TurningGenerator,
    MAX_PASSES,
};
pub use geometry_utils::{get_chuck_and_tailstock_point, get_inner_and_outer_point};
pub use operation_setup::{
    check_axial_direction, check_machine_limits, configure_facing, configure_from_segment,
    configure_parting, configure_turning, validate_operation,
};
pub use post::{
    emit_program, post_for_name, FanucPost, GenericPost, HaasPost, MazakPost, PostProcessor,
    PostState,
};
