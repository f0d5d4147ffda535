//! Tool library document load/save.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::record::ToolRecord;
use crate::error::Result;

/// A tool library export: an ordered list of tool records under `data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolLibraryDocument {
    pub data: Vec<ToolRecord>,
}

impl ToolLibraryDocument {
    pub fn new(data: Vec<ToolRecord>) -> Self {
        Self { data }
    }

    /// Parse a document from JSON text
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let document = Self::from_json_str(&content)?;
        log::debug!(
            "Loaded {} tool records from {}",
            document.len(),
            path.as_ref().display()
        );
        Ok(document)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize fully, then overwrite `path` with the result
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_json_string()?;
        fs::write(path.as_ref(), content)?;
        log::debug!("Wrote {} tool records to {}", self.len(), path.as_ref().display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
