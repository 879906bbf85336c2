//! Protocol response envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ProtocolError, ProtocolErrorCode};

/// Success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub data: Value,
}

/// Error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}

/// Response to one request
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Create a success response
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse {
            status: "ok".to_string(),
            data,
        })
    }

    /// Create an error response
    pub fn error(err: &ProtocolError) -> Self {
        Response::Error(ErrorResponse {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        })
    }

    /// Convert to a single-line JSON string
    pub fn to_json(&self) -> String {
        let rendered = match self {
            Response::Success(r) => serde_json::to_string(r),
            Response::Error(r) => serde_json::to_string(r),
        };
        // Both envelopes hold only strings and JSON values
        rendered.unwrap_or_else(|_| encode_failed_json())
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Error code, if this is an error response
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Error(r) => Some(&r.code),
        }
    }
}

fn encode_failed_json() -> String {
    format!(
        r#"{{"status":"error","code":"{}","message":""}}"#,
        ProtocolErrorCode::ProtocolEncodeFailed.code()
    )
}
