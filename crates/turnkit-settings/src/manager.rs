//! Per-user settings storage.
//!
//! The machine configuration and the tool table live as separate files in
//! the settings directory (`<config_dir>/turnkit` by default). Only the
//! manager treats a missing file as "use the defaults"; an explicit path
//! must exist. Explicit paths may use either JSON or TOML, the format
//! follows the extension.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::validation::{validate_machine_config, validate_tool_table};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use turnkit_core::{MachineConfig, ToolTable};

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "turnkit";
pub const MACHINE_CONFIG_FILE: &str = "machine_config.json";
pub const TOOL_TABLE_FILE: &str = "tool_table.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(FileFormat::Json)
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            Ok(FileFormat::Toml)
        } else {
            Err(ConfigError::UnsupportedFormat(format!(
                "{} (settings file must be .json or .toml)",
                path.display()
            ))
            .into())
        }
    }
}

/// Read a settings record, choosing JSON or TOML by extension.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        SettingsError::LoadError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let value = match format {
        FileFormat::Json => serde_json::from_str(&content)?,
        FileFormat::Toml => toml::from_str(&content)?,
    };
    Ok(value)
}

/// Write a settings record, choosing JSON or TOML by extension.
pub fn save_file<T: Serialize>(value: &T, path: &Path) -> SettingsResult<()> {
    let content = match FileFormat::from_path(path)? {
        FileFormat::Json => serde_json::to_string_pretty(value)?,
        FileFormat::Toml => toml::to_string_pretty(value)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| {
        SettingsError::SaveError(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(())
}

/// Loads and saves the machine configuration and tool table.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    dir: PathBuf,
}

impl SettingsManager {
    /// Manager rooted at the per-user config directory.
    pub fn new() -> SettingsResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no per-user config directory".to_string())
            })?
            .join(APP_DIR_NAME);
        Ok(Self::with_dir(dir))
    }

    /// Manager rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the settings directory if it does not exist yet.
    pub fn ensure_dir(&self) -> SettingsResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            SettingsError::ConfigDirectory(format!("{}: {}", self.dir.display(), e))
        })
    }

    pub fn machine_config_path(&self) -> PathBuf {
        self.dir.join(MACHINE_CONFIG_FILE)
    }

    pub fn tool_table_path(&self) -> PathBuf {
        self.dir.join(TOOL_TABLE_FILE)
    }

    /// Load the machine configuration; a missing file yields the defaults.
    pub fn load_machine_config(&self) -> SettingsResult<MachineConfig> {
        let path = self.machine_config_path();
        if !path.exists() {
            info!("No machine config at {}, using defaults", path.display());
            return Ok(MachineConfig::default());
        }
        load_machine_config_from(&path)
    }

    /// Like [`load_machine_config`](Self::load_machine_config), falling back
    /// to the defaults on any error.
    pub fn load_machine_config_or_default(&self) -> MachineConfig {
        self.load_machine_config().unwrap_or_else(|e| {
            error!("Failed to load machine config, using defaults: {}", e);
            MachineConfig::default()
        })
    }

    pub fn save_machine_config(&self, config: &MachineConfig) -> SettingsResult<()> {
        self.ensure_dir()?;
        save_machine_config_to(config, &self.machine_config_path())
    }

    /// Load the tool table; a missing file yields the standard tools.
    pub fn load_tool_table(&self) -> SettingsResult<ToolTable> {
        let path = self.tool_table_path();
        if !path.exists() {
            info!("No tool table at {}, using standard tools", path.display());
            return Ok(ToolTable::standard());
        }
        load_tool_table_from(&path)
    }

    pub fn load_tool_table_or_default(&self) -> ToolTable {
        self.load_tool_table().unwrap_or_else(|e| {
            error!("Failed to load tool table, using standard tools: {}", e);
            ToolTable::standard()
        })
    }

    pub fn save_tool_table(&self, table: &ToolTable) -> SettingsResult<()> {
        self.ensure_dir()?;
        save_tool_table_to(table, &self.tool_table_path())
    }
}

/// Load and validate a machine configuration from `path`, which must exist.
pub fn load_machine_config_from(path: &Path) -> SettingsResult<MachineConfig> {
    let config: MachineConfig = load_file(path)?;
    validate_machine_config(&config)?;
    info!("Machine config loaded from {}", path.display());
    Ok(config)
}

pub fn save_machine_config_to(config: &MachineConfig, path: &Path) -> SettingsResult<()> {
    validate_machine_config(config)?;
    save_file(config, path)?;
    info!("Machine config saved to {}", path.display());
    Ok(())
}

/// Load and validate a tool table from `path`, which must exist.
pub fn load_tool_table_from(path: &Path) -> SettingsResult<ToolTable> {
    let table: ToolTable = load_file(path)?;
    validate_tool_table(&table)?;
    info!(
        "Tool table loaded from {} ({} tools)",
        path.display(),
        table.len()
    );
    Ok(table)
}

pub fn save_tool_table_to(table: &ToolTable, path: &Path) -> SettingsResult<()> {
    validate_tool_table(table)?;
    save_file(table, path)?;
    info!("Tool table saved to {}", path.display());
    Ok(())
}
