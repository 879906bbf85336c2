//! CLI error types
//!
//! All CLI errors end the process with a non-zero exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or written
    #[error("PAGESTORE_CLI_CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    /// `init` found an existing configuration file
    #[error("PAGESTORE_CLI_ALREADY_INITIALIZED: {} already exists", .0.display())]
    AlreadyInitialized(PathBuf),

    /// `serve` could not build its store
    #[error("PAGESTORE_CLI_BOOT_FAILED: {0}")]
    BootFailed(#[from] StoreError),

    /// stdin/stdout failure
    #[error("PAGESTORE_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "PAGESTORE_CLI_CONFIG_ERROR",
            CliError::AlreadyInitialized(_) => "PAGESTORE_CLI_ALREADY_INITIALIZED",
            CliError::BootFailed(_) => "PAGESTORE_CLI_BOOT_FAILED",
            CliError::Io(_) => "PAGESTORE_CLI_IO_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_leads_with_code() {
        let err = CliError::AlreadyInitialized(PathBuf::from("/tmp/pagestore.json"));
        assert_eq!(err.code(), "PAGESTORE_CLI_ALREADY_INITIALIZED");
        assert!(err
            .to_string()
            .starts_with("PAGESTORE_CLI_ALREADY_INITIALIZED: /tmp/pagestore.json"));
    }

    #[test]
    fn test_store_error_is_boot_failure() {
        let err: CliError = StoreError::invalid_config("bad").into();
        assert_eq!(err.code(), "PAGESTORE_CLI_BOOT_FAILED");
    }
}
