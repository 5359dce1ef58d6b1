use crate::config::BatchConfig;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub batch: BatchSection,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Substitute `${VAR_NAME}` placeholders with environment values.
    /// Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn into_batch_config(self) -> BatchConfig {
        let monitor = self.monitoring_enabled();
        BatchConfig {
            input_dir: self.batch.input_dir,
            output_dir: self.batch.output_dir,
            monitor,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("batch.input_dir", &self.batch.input_dir)?;
        validate_path("batch.output_dir", &self.batch.output_dir)?;
        Ok(())
    }
}
