use crate::reorder::default_output_path;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reorder run configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    // Input
    pub input_file: PathBuf,

    // Output; derived from the input name when absent
    pub output_file: Option<PathBuf>,

    // Dashed guides at the quarter boundaries
    pub cut_lines: bool,

    // Compress streams in the written document
    pub compress: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            output_file: None,
            cut_lines: false,
            compress: true,
        }
    }
}

impl ReorderOptions {
    /// Options for a given input, everything else default
    pub fn for_input(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ReorderError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReorderError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// The output path this run writes to
    pub fn output_path(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_file))
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(ReorderError::Config("No input file specified".to_string()));
        }

        if let Some(output) = &self.output_file {
            if output.as_os_str().is_empty() {
                return Err(ReorderError::Config("Output file path is empty".to_string()));
            }
        }

        Ok(())
    }
}
