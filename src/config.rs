//! Run configuration
//!
//! Paths come from an optional TOML config file with per-field defaults;
//! command-line flags override whatever the file provides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

fn default_input_path() -> PathBuf {
    PathBuf::from("sales_data.csv")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("sales_summary.txt")
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Echo the loaded table to stdout before writing the report.
    #[serde(default)]
    pub show_data: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            show_data: false,
        }
    }
}

impl SummaryConfig {
    /// Load from a TOML file, or fall back to defaults when no path is
    /// given. An explicitly named file that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                let content = std::fs::read_to_string(path)?;
                Ok(toml::from_str(&content)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        show_data: bool,
    ) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        if show_data {
            self.show_data = true;
        }
        self
    }
}
