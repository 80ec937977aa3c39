use crate::core::TutorialError;
use serde::{Deserialize, Serialize};

/// Quick-reference snippet sheet, e.g. "Data Types" or "Indexes".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatSheet {
    pub category: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// Column layout of one tutorial table, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<SchemaColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheatSheets {
    sheets: Vec<CheatSheet>,
}

impl CheatSheets {
    pub fn from_json(json: &str) -> Result<Self, TutorialError> {
        Ok(Self {
            sheets: serde_json::from_str(json)?,
        })
    }

    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.category.as_str()).collect()
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&CheatSheet> {
        self.sheets
            .iter()
            .find(|s| s.category.eq_ignore_ascii_case(category))
    }

    /// The sheet shown when none is asked for.
    #[must_use]
    pub fn first(&self) -> Option<&CheatSheet> {
        self.sheets.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schemas {
    tables: Vec<TableSchema>,
}

impl Schemas {
    pub fn from_json(json: &str) -> Result<Self, TutorialError> {
        Ok(Self {
            tables: serde_json::from_str(json)?,
        })
    }

    #[must_use]
    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}
