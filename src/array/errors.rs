//! Array error types
//!
//! Error codes:
//! - ARRAY_INDEX_OUT_OF_BOUNDS (ERROR)
//! - ARRAY_CAPACITY_EXCEEDED (ERROR)
//! - ARRAY_INVALID_PAGE_BITS (ERROR)
//!
//! Every array error is a caller error. Nothing here is retried internally.

use std::fmt;

/// Severity levels for array errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, caller decides what happens next
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Array-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayErrorCode {
    /// Negative index, or a read past the current capacity
    ArrayIndexOutOfBounds,
    /// Write past the current capacity on an array that does not auto-expand
    ArrayCapacityExceeded,
    /// Page exponent outside the supported range
    ArrayInvalidPageBits,
}

impl ArrayErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ArrayErrorCode::ArrayIndexOutOfBounds => "ARRAY_INDEX_OUT_OF_BOUNDS",
            ArrayErrorCode::ArrayCapacityExceeded => "ARRAY_CAPACITY_EXCEEDED",
            ArrayErrorCode::ArrayInvalidPageBits => "ARRAY_INVALID_PAGE_BITS",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ArrayErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Array error with the offending index or setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayError {
    code: ArrayErrorCode,
    message: String,
    details: Option<String>,
}

impl ArrayError {
    /// Index is negative or not covered by the current capacity
    pub fn index_out_of_bounds(index: i32, length: i32) -> Self {
        Self {
            code: ArrayErrorCode::ArrayIndexOutOfBounds,
            message: format!("Array index out of range: {}", index),
            details: Some(format!("length: {}", length)),
        }
    }

    /// Write target lies beyond a fixed capacity
    pub fn capacity_exceeded(index: i32, length: i32) -> Self {
        Self {
            code: ArrayErrorCode::ArrayCapacityExceeded,
            message: format!("Index {} exceeds capacity and auto-expand is disabled", index),
            details: Some(format!("length: {}", length)),
        }
    }

    /// Page exponent cannot be used to build pages
    pub fn invalid_page_bits(page_bits: u32, max: u32) -> Self {
        Self {
            code: ArrayErrorCode::ArrayInvalidPageBits,
            message: format!("Invalid page bits: {}", page_bits),
            details: Some(format!("max: {}", max)),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ArrayErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Array errors never require termination
    pub fn is_fatal(&self) -> bool {
        false
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ArrayError {}

/// Result type for array operations
pub type ArrayResult<T> = Result<T, ArrayError>;
