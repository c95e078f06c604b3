use crate::core::Storage;
use crate::utils::error::{ReportError, Result};
use std::path::{Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();

    if text.is_empty() {
        return Err(ReportError::InvalidArgumentsError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if text.contains('\0') {
        return Err(ReportError::InvalidArgumentsError {
            message: format!("{}: path contains null bytes: {}", field_name, text),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidArgumentsError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Paths from `paths` that do not exist, in the order given.
pub fn missing_files<S: Storage>(storage: &S, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| !storage.exists(path))
        .cloned()
        .collect()
}
