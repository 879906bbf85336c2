//! Store configuration
//!
//! Loaded from a JSON file. Every field is optional and falls back to the
//! defaults below:
//!
//! ```json
//! { "page_bits": 16, "auto_expand": true, "index_start": 0, "initial_capacity": 0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::array::{DEFAULT_PAGE_BITS, MAX_PAGE_BITS};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("Config I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid configuration JSON
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds an unusable value
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration descriptor handed to store factories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Page exponent; page size is `2^page_bits`
    #[serde(default = "default_page_bits")]
    pub page_bits: u32,

    /// Grow on out-of-capacity writes instead of failing
    #[serde(default = "default_auto_expand")]
    pub auto_expand: bool,

    /// First index served by the store
    #[serde(default)]
    pub index_start: i32,

    /// Capacity to pre-allocate at creation (0 = one page)
    #[serde(default)]
    pub initial_capacity: i32,
}

fn default_page_bits() -> u32 {
    DEFAULT_PAGE_BITS
}

fn default_auto_expand() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            page_bits: default_page_bits(),
            auto_expand: default_auto_expand(),
            index_start: 0,
            initial_capacity: 0,
        }
    }
}

impl StoreConfig {
    /// Reads and validates a configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates configuration JSON.
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: StoreConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes this configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rejects values the array or store cannot honour.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_bits > MAX_PAGE_BITS {
            return Err(ConfigError::Invalid {
                field: "page_bits",
                reason: format!("{} exceeds maximum {}", self.page_bits, MAX_PAGE_BITS),
            });
        }

        if self.index_start < 0 {
            return Err(ConfigError::Invalid {
                field: "index_start",
                reason: format!("{} is negative", self.index_start),
            });
        }

        if self.initial_capacity < 0 {
            return Err(ConfigError::Invalid {
                field: "initial_capacity",
                reason: format!("{} is negative", self.initial_capacity),
            });
        }

        Ok(())
    }

    /// Slots per page
    pub fn page_size(&self) -> usize {
        1usize << self.page_bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.page_bits, 16);
        assert_eq!(config.page_size(), 65536);
        assert!(config.auto_expand);
        assert_eq!(config.index_start, 0);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = StoreConfig::from_json(r#"{"page_bits": 4}"#).unwrap();
        assert_eq!(config.page_bits, 4);
        assert!(config.auto_expand);
    }

    #[test]
    fn test_rejects_page_bits_over_max() {
        let err = StoreConfig::from_json(r#"{"page_bits": 31}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "page_bits", .. }));
    }

    #[test]
    fn test_rejects_negative_index_start() {
        let err = StoreConfig::from_json(r#"{"index_start": -5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "index_start", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = StoreConfig::from_json("{page_bits").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pagestore.json");
        let config = StoreConfig {
            page_bits: 10,
            auto_expand: false,
            index_start: 128,
            initial_capacity: 4096,
        };

        config.save(&path).unwrap();
        assert_eq!(StoreConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = StoreConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
