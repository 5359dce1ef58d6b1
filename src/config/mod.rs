pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use self::toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pdf2xlsx")]
#[command(about = "Batch-convert tables embedded in PDF documents to xlsx spreadsheets")]
pub struct CliConfig {
    /// Directory scanned for *.pdf files
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving one .xlsx per input document
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Optional TOML configuration file; CLI flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the batch summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Report elapsed time and peak memory when the batch finishes
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// Merge the optional TOML file and CLI flags into one resolved config.
    /// Precedence: CLI flag, then TOML value, then built-in default.
    pub fn resolve(&self) -> Result<BatchConfig> {
        let mut resolved = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_batch_config(),
            None => BatchConfig::default(),
        };

        if let Some(dir) = &self.input_dir {
            resolved.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            resolved.output_dir = dir.clone();
        }
        if self.monitor {
            resolved.monitor = true;
        }

        Ok(resolved)
    }
}

/// Fully resolved batch configuration handed to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub monitor: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("pdf_input"),
            output_dir: PathBuf::from("xlsx_output"),
            monitor: false,
        }
    }
}

impl ConfigProvider for BatchConfig {
    fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_dir", &self.input_dir)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}
