use serde::{Deserialize, Serialize};

/// Raw bar stock the part is turned from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StockMaterial {
    /// Axial position of the stock face nearest the tailstock.
    pub start_position: f64,
    /// Axial position of the stock end at the chuck.
    pub end_position: f64,
    pub radius: f64,
}

impl StockMaterial {
    pub fn new(start_position: f64, end_position: f64, radius: f64) -> Self {
        Self {
            start_position,
            end_position,
            radius,
        }
    }

    pub fn length(&self) -> f64 {
        (self.end_position - self.start_position).abs()
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}
