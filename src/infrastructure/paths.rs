//! Data directory handling.

use std::fs;
use std::path::PathBuf;

use crate::domain::{AppConfig, AppError, Result};

/// Resolves the data directory from configuration, creating it if needed.
///
/// # Errors
/// Returns error if the directory cannot be created.
pub fn ensure_data_dir(config: &AppConfig) -> Result<PathBuf> {
    let dir = config.data_dir();

    fs::create_dir_all(&dir)
        .map_err(|e| AppError::io(format!("Failed to create data directory: {}", dir.display()), e))?;

    tracing::debug!(path = %dir.display(), "Using data directory");

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PathConfig;

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("exports");
        let config = AppConfig {
            paths: PathConfig {
                data_dir: Some(target.clone()),
            },
            ..Default::default()
        };

        let resolved = ensure_data_dir(&config).unwrap();

        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }
}
