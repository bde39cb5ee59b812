//! Stock and tooling records.

mod stock;
mod tools;

pub use stock::StockMaterial;
pub use tools::{Tool, ToolTable};
