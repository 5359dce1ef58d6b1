use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(EtlError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.to_string_lossy().contains('\0') {
        return Err(EtlError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
