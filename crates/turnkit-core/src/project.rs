//! Project model and project file persistence.

use crate::data::StockMaterial;
use crate::error::{ProjectError, Result};
use crate::geometry::Geometry;
use crate::operation::OperationConfiguration;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{error, info};

/// Everything needed to regenerate a part program.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub save_path: String,
    pub geometry: Geometry,
    pub stock_material: StockMaterial,
    pub operations: Vec<OperationConfiguration>,
}

impl Project {
    pub fn new(geometry: Geometry, stock_material: StockMaterial) -> Self {
        Self {
            geometry,
            stock_material,
            ..Self::default()
        }
    }

    /// Append an accepted operation. Returns its index in the operation list.
    pub fn add_operation(&mut self, operation: OperationConfiguration) -> usize {
        self.operations.push(operation);
        self.operations.len() - 1
    }

    pub fn remove_operation(&mut self, index: usize) -> Option<OperationConfiguration> {
        (index < self.operations.len()).then(|| self.operations.remove(index))
    }

    /// Load a project from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            error!("Project file does not exist: {}", path.display());
            return Err(ProjectError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        let mut project: Project = serde_json::from_str(&content).map_err(|e| {
            error!("Error loading project: {}", e);
            ProjectError::Invalid {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        project.save_path = path.display().to_string();

        info!("Project loaded successfully from: {}", path.display());
        Ok(project)
    }

    /// Save the project as pretty-printed JSON (two-space indent).
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Project saved successfully to: {}", path.display());
        Ok(())
    }
}
