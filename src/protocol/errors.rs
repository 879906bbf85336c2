//! Protocol error types
//!
//! Store and array codes pass through unchanged so a remote caller sees
//! exactly the code the array raised.

use std::fmt;

use crate::store::StoreError;

/// Protocol-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolErrorCode {
    /// Malformed request envelope
    ProtocolInvalidRequest,
    /// `op` names no known operation
    ProtocolUnknownOperation,
    /// `meta` asked for an unknown key
    ProtocolUnknownMetaKey,
    /// Response could not be serialized
    ProtocolEncodeFailed,
}

impl ProtocolErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ProtocolErrorCode::ProtocolInvalidRequest => "PROTOCOL_INVALID_REQUEST",
            ProtocolErrorCode::ProtocolUnknownOperation => "PROTOCOL_UNKNOWN_OPERATION",
            ProtocolErrorCode::ProtocolUnknownMetaKey => "PROTOCOL_UNKNOWN_META_KEY",
            ProtocolErrorCode::ProtocolEncodeFailed => "PROTOCOL_ENCODE_FAILED",
        }
    }
}

impl fmt::Display for ProtocolErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Protocol error carrying the code sent back to the caller
#[derive(Debug, Clone)]
pub struct ProtocolError {
    code: String,
    message: String,
}

impl ProtocolError {
    fn new(code: ProtocolErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code().to_string(),
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::new(ProtocolErrorCode::ProtocolInvalidRequest, reason)
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self::new(
            ProtocolErrorCode::ProtocolUnknownOperation,
            format!("Unknown operation: {}", op.into()),
        )
    }

    /// Create an unknown meta key error
    pub fn unknown_meta_key(key: impl Into<String>) -> Self {
        Self::new(
            ProtocolErrorCode::ProtocolUnknownMetaKey,
            format!("Unknown meta key: {}", key.into()),
        )
    }

    /// Create from a store error (pass-through)
    pub fn from_store_error(err: StoreError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ProtocolError {}

impl From<StoreError> for ProtocolError {
    fn from(err: StoreError) -> Self {
        Self::from_store_error(err)
    }
}

/// Result type for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ArrayError;

    #[test]
    fn test_unknown_operation_error() {
        let err = ProtocolError::unknown_operation("scan");
        assert_eq!(err.code(), "PROTOCOL_UNKNOWN_OPERATION");
        assert!(err.message().contains("scan"));
    }

    #[test]
    fn test_store_error_passes_through() {
        let store_err = StoreError::from_array_error(ArrayError::index_out_of_bounds(-4, 16));
        let err = ProtocolError::from(store_err);
        assert_eq!(err.code(), "ARRAY_INDEX_OUT_OF_BOUNDS");
        assert!(err.message().contains("-4"));
    }
}
