use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::*;

/// Drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOptions {
    /// Page orientation
    pub orientation: Orientation,

    /// Rendering theme
    pub template: Template,

    /// Output SVG file
    pub output_file: PathBuf,

    /// Run the optimizer on the saved file and delete the original on
    /// success
    pub optimize: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            template: Template::Default,
            output_file: PathBuf::from("output.svg"),
            optimize: false,
        }
    }
}

impl CreateOptions {
    /// Load options from JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| DrawscapeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DrawscapeError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.output_file.as_os_str().is_empty() {
            return Err(DrawscapeError::Config(
                "No output file specified".to_string(),
            ));
        }

        // The optimizer derives its output name from the file stem
        if self.optimize && self.output_file.file_stem().is_none() {
            return Err(DrawscapeError::Config(format!(
                "Output path {:?} has no file name to derive the optimized name from",
                self.output_file
            )));
        }

        Ok(())
    }
}
