//! Sanity checks applied to settings before they are saved or used.

use crate::error::{ConfigError, ConfigResult};
use turnkit_core::{MachineConfig, ToolTable};

/// Largest number of decimals a post will print.
pub const MAX_DISPLAY_PRECISION: u32 = 6;

fn require_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Reject machine limits and rates that are not strictly positive.
pub fn validate_machine_config(config: &MachineConfig) -> ConfigResult<()> {
    require_positive("maxSpindleSpeed", config.max_spindle_speed)?;
    require_positive("maxFeedRateMMMin", config.max_feed_rate_mm_min)?;
    require_positive("maxFeedRateMMRev", config.max_feed_rate_mm_rev)?;
    require_positive("maxZTravel", config.max_z_travel)?;
    require_positive("maxXRadius", config.max_x_radius)?;
    require_positive("rapidFeedRate", config.rapid_feed_rate)?;
    require_positive("retractFeedRate", config.retract_feed_rate)?;

    if !config.min_clearance_distance.is_finite() || config.min_clearance_distance < 0.0 {
        return Err(ConfigError::ValueOutOfRange {
            key: "minClearanceDistance".to_string(),
            value: config.min_clearance_distance.to_string(),
        });
    }

    if config.display_precision > MAX_DISPLAY_PRECISION {
        return Err(ConfigError::ValueOutOfRange {
            key: "displayPrecision".to_string(),
            value: config.display_precision.to_string(),
        });
    }

    Ok(())
}

/// Tool numbers must be unique and non-zero.
pub fn validate_tool_table(table: &ToolTable) -> ConfigResult<()> {
    let mut seen = std::collections::HashSet::new();
    for tool in &table.tools {
        if tool.number == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "number".to_string(),
                value: "0".to_string(),
            });
        }
        if !seen.insert(tool.number) {
            return Err(ConfigError::Corrupted(format!(
                "duplicate tool number {}",
                tool.number
            )));
        }
    }
    Ok(())
}
