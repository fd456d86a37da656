//! Path management for the finance store
//!
//! Provides XDG-compliant path resolution for the data file and audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCAS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/financas` or `~/.config/financas`
//! 3. Windows: `%APPDATA%\financas`

use std::path::PathBuf;

use crate::error::FinancasError;

/// Manages all paths used by the finance store
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Base directory for all persisted data
    base_dir: PathBuf,
}

impl StorePaths {
    /// Create a new StorePaths instance
    ///
    /// Path resolution:
    /// 1. `FINANCAS_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/financas` or `~/.config/financas`
    /// 3. Windows: `%APPDATA%\financas`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinancasError> {
        let base_dir = if let Ok(custom) = std::env::var("FINANCAS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StorePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the persisted state document
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("dados.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinancasError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinancasError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinancasError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| FinancasError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("financas"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinancasError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinancasError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("financas"))
}
