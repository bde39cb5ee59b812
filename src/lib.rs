//! # TurnKit
//!
//! A CAM toolchain for two-axis CNC lathes: part profiles in (DXF),
//! facing, turning and parting toolpaths out, and G-code through a
//! built-in post-processor.
//!
//! ## Architecture
//!
//! TurnKit is organized as a workspace with multiple crates:
//!
//! 1. **turnkit-core** - Geometry, toolpath, machine and project data model
//! 2. **turnkit-camtools** - Toolpath generators, operation setup, DXF import, posts
//! 3. **turnkit-settings** - Per-user machine configuration and tool table
//! 4. **turnkit** - Command line binary that integrates all crates

pub use turnkit_core::{
    axis_sign, AxisDirection, Error, Geometry, Line, MachineConfig, OperationConfiguration,
    OperationType, Point2D, Project, Result, Segment, StockMaterial, TPoint, Tool, ToolTable,
    Toolpath, ToolpathLine, ToolpathSequence, Transform,
};

pub use turnkit_camtools::{
    configure_from_segment, emit_program, generate_project_toolpaths, generate_toolpath,
    load_dxf, post_for_name, try_generate_project_toolpaths, try_generate_toolpath,
    validate_operation, CamToolError, CamToolResult, ChuckSide, DrawingUnits, DxfImportOptions,
    PostProcessor,
};

pub use turnkit_settings::{SettingsError, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output to stderr, leaving stdout for G-code and JSON
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
