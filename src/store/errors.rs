//! Store error types
//!
//! Array errors pass through unchanged: the code a caller sees is the code
//! the array raised. Store-level codes cover configuration only.

use std::fmt;

use crate::array::ArrayError;
use crate::config::ConfigError;

/// Store-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Configuration rejected at store creation
    StoreInvalidConfig,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::StoreInvalidConfig => "STORE_INVALID_CONFIG",
        }
    }
}

/// Layer that raised a [`StoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Raised by the store itself; code is a [`StoreErrorCode`]
    Store,
    /// Raised by the backing array; code is the array's own
    Array,
}

/// Store error preserving the original subsystem code
#[derive(Debug, Clone)]
pub struct StoreError {
    kind: StoreErrorKind,
    code: String,
    message: String,
}

impl StoreError {
    /// Configuration cannot be used to build a store
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self {
            kind: StoreErrorKind::Store,
            code: StoreErrorCode::StoreInvalidConfig.code().to_string(),
            message: reason.into(),
        }
    }

    /// Wrap an array error, keeping its code
    pub fn from_array_error(err: ArrayError) -> Self {
        let message = match err.details() {
            Some(details) => format!("{} ({})", err.message(), details),
            None => err.message().to_string(),
        };
        Self {
            kind: StoreErrorKind::Array,
            code: err.code().code().to_string(),
            message,
        }
    }

    /// Returns the code string seen by callers
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns which layer raised the error
    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

impl From<ArrayError> for StoreError {
    fn from(err: ArrayError) -> Self {
        Self::from_array_error(err)
    }
}

impl From<ConfigError> for StoreError {
    fn from(err: ConfigError) -> Self {
        Self::invalid_config(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_code_passes_through() {
        let err: StoreError = ArrayError::capacity_exceeded(70000, 65536).into();
        assert_eq!(err.code(), "ARRAY_CAPACITY_EXCEEDED");
        assert_eq!(err.kind(), StoreErrorKind::Array);
        assert!(err.message().contains("length: 65536"));
    }

    #[test]
    fn test_invalid_config_code() {
        let err = StoreError::invalid_config("page_bits too large");
        assert_eq!(err.code(), StoreErrorCode::StoreInvalidConfig.code());
        assert_eq!(err.kind(), StoreErrorKind::Store);
        assert!(err.to_string().contains("page_bits too large"));
    }
}
