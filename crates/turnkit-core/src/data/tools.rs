use serde::{Deserialize, Serialize};

/// A turret tool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tool {
    pub number: u32,
    pub description: String,
    /// ISO insert designation, e.g. `CNMG120408`.
    pub iso_code: String,
}

impl Tool {
    pub fn new(number: u32, description: impl Into<String>, iso_code: impl Into<String>) -> Self {
        Self {
            number,
            description: description.into(),
            iso_code: iso_code.into(),
        }
    }
}

/// The machine's tool table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolTable {
    pub tools: Vec<Tool>,
}

impl ToolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typical starter set for a two-axis lathe.
    pub fn standard() -> Self {
        Self {
            tools: vec![
                Tool::new(1, "General Purpose Turning Tool", "CNMG120408"),
                Tool::new(2, "Finishing Turning Tool", "VNMG160404"),
                Tool::new(3, "Grooving Tool", "MGMN200-G"),
                Tool::new(4, "Threading Tool", "16ER-AG60"),
                Tool::new(5, "Parting Tool", "GTN-2"),
            ],
        }
    }

    pub fn find(&self, number: u32) -> Option<&Tool> {
        self.tools.iter().find(|t| t.number == number)
    }

    /// Insert a tool, replacing any existing tool with the same number.
    pub fn add(&mut self, tool: Tool) {
        match self.tools.iter_mut().find(|t| t.number == tool.number) {
            Some(existing) => *existing = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn remove(&mut self, number: u32) -> Option<Tool> {
        let index = self.tools.iter().position(|t| t.number == number)?;
        Some(self.tools.remove(index))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
