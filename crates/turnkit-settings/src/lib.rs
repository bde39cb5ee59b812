//! # TurnKit Settings
//!
//! Persistence of the per-user machine configuration and tool table.
//!
//! Files are stored under `<config_dir>/turnkit` as `machine_config.json`
//! and `tool_table.json`. Missing files fall back to the built-in defaults.

pub mod error;
pub mod manager;
pub mod validation;

pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::{
    load_file, load_machine_config_from, load_tool_table_from, save_file,
    save_machine_config_to, save_tool_table_to, SettingsManager, APP_DIR_NAME,
    MACHINE_CONFIG_FILE, TOOL_TABLE_FILE,
};
pub use validation::{validate_machine_config, validate_tool_table, MAX_DISPLAY_PRECISION};
