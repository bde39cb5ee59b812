//! turnkit CLI - lathe toolpaths and G-code from project files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use turnkit::{
    emit_program, init_logging, load_dxf, post_for_name, try_generate_project_toolpaths,
    ChuckSide, DrawingUnits, DxfImportOptions, MachineConfig, Project, SettingsManager,
    StockMaterial, ToolTable,
};

#[derive(Parser)]
#[command(name = "turnkit", version = turnkit::VERSION)]
#[command(about = "CAM toolpaths and G-code for CNC lathes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the toolpaths of every operation as JSON
    Generate {
        /// Project file (.json)
        project: PathBuf,
        /// Machine configuration (.json or .toml), default: user settings
        #[arg(short, long)]
        machine: Option<PathBuf>,
        /// Output file, default: stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a G-code program for a project
    Post {
        /// Project file (.json)
        project: PathBuf,
        /// Machine configuration (.json or .toml), default: user settings
        #[arg(short, long)]
        machine: Option<PathBuf>,
        /// Tool table (.json or .toml), default: user settings
        #[arg(short, long)]
        tools: Option<PathBuf>,
        /// Output file, default: stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create a project from the profile in a DXF drawing
    ImportDxf {
        /// Input DXF file
        dxf: PathBuf,
        /// Project file to write
        #[arg(short, long)]
        output: PathBuf,
        /// Stock radius, default: largest profile radius
        #[arg(long)]
        stock_radius: Option<f64>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        axial_offset: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        radial_offset: f64,
        /// Side of the drawing facing the chuck
        #[arg(long, value_enum, default_value_t = Side::Left)]
        chuck_side: Side,
        /// Drawing units are inches
        #[arg(long)]
        inches: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Left,
    Right,
}

impl From<Side> for ChuckSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => ChuckSide::Left,
            Side::Right => ChuckSide::Right,
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            project,
            machine,
            output,
        } => generate(&project, machine.as_deref(), output.as_deref()),
        Commands::Post {
            project,
            machine,
            tools,
            output,
        } => post(&project, machine.as_deref(), tools.as_deref(), output.as_deref()),
        Commands::ImportDxf {
            dxf,
            output,
            stock_radius,
            axial_offset,
            radial_offset,
            chuck_side,
            inches,
        } => {
            let options = DxfImportOptions {
                axial_offset,
                radial_offset,
                chuck_side: chuck_side.into(),
                units: if inches {
                    DrawingUnits::Inches
                } else {
                    DrawingUnits::Millimeters
                },
            };
            import_dxf(&dxf, &output, stock_radius, &options)
        }
    }
}

fn load_machine(path: Option<&Path>) -> Result<MachineConfig> {
    match path {
        Some(path) => turnkit_settings::load_machine_config_from(path)
            .with_context(|| format!("Failed to load machine config {}", path.display())),
        None => Ok(SettingsManager::new()?.load_machine_config_or_default()),
    }
}

fn load_tools(path: Option<&Path>) -> Result<ToolTable> {
    match path {
        Some(path) => turnkit_settings::load_tool_table_from(path)
            .with_context(|| format!("Failed to load tool table {}", path.display())),
        None => Ok(SettingsManager::new()?.load_tool_table_or_default()),
    }
}

fn load_project(path: &Path) -> Result<Project> {
    Project::load_from_file(path)
        .with_context(|| format!("Failed to load project {}", path.display()))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn generate(project: &Path, machine: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let machine = load_machine(machine)?;
    let project = load_project(project)?;

    let sequences = try_generate_project_toolpaths(&project, &machine)?;
    let mut json = serde_json::to_string_pretty(&sequences)?;
    json.push('\n');
    write_output(output, &json)
}

fn post(
    project: &Path,
    machine: Option<&Path>,
    tools: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let machine = load_machine(machine)?;
    let tools = load_tools(tools)?;
    let project = load_project(project)?;

    let sequences = try_generate_project_toolpaths(&project, &machine)?;
    let post = post_for_name(&machine.postprocessor_class_name, &machine)?;
    let program = emit_program(post.as_ref(), &sequences, &machine, &tools);
    write_output(output, &program)
}

fn import_dxf(
    dxf: &Path,
    output: &Path,
    stock_radius: Option<f64>,
    options: &DxfImportOptions,
) -> Result<()> {
    let geometry =
        load_dxf(dxf, options).with_context(|| format!("Failed to import {}", dxf.display()))?;

    let (min_x, min_y, max_x, max_y) = geometry.bounds().unwrap_or_default();
    let radius = stock_radius.unwrap_or_else(|| max_y.abs().max(min_y.abs()));
    let stock = StockMaterial::new(min_x, max_x, radius);

    let segments = geometry.len();
    let project = Project::new(geometry, stock);
    project
        .save_to_file(output)
        .with_context(|| format!("Failed to write project {}", output.display()))?;

    info!(
        "Imported {} segments from {} into {}",
        segments,
        dxf.display(),
        output.display()
    );
    Ok(())
}
