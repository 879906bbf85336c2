//! Protocol request types
//!
//! One JSON object per request. Values are base64 strings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::errors::{ProtocolError, ProtocolResult};

/// Keys accepted by `meta`
pub const META_KEYS: [&str; 5] = ["array_type", "capacity", "hw_mark", "index_start", "lw_mark"];

/// Parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Read one slot
    Get { index: i32 },
    /// Write one slot
    Put { index: i32, value: Vec<u8>, scn: i64 },
    /// Empty one slot
    Delete { index: i32, scn: i64 },
    /// Empty every slot
    Clear,
    /// Flush
    Sync,
    /// Persist
    Persist,
    /// Store metadata, one key or all of them
    Meta { key: Option<String> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    index: Option<i32>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    scn: Option<i64>,
    #[serde(default)]
    key: Option<String>,
}

impl RawRequest {
    fn index(&self) -> ProtocolResult<i32> {
        self.index
            .ok_or_else(|| ProtocolError::invalid_request("Missing index"))
    }

    fn scn(&self) -> i64 {
        self.scn.unwrap_or(0)
    }
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ProtocolResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ProtocolError::invalid_request(format!("Invalid JSON: {}", e)))?;

        match raw.op.as_str() {
            "get" => Ok(Request::Get { index: raw.index()? }),
            "put" => {
                let encoded = raw
                    .value
                    .as_deref()
                    .ok_or_else(|| ProtocolError::invalid_request("Missing value"))?;
                let value = STANDARD.decode(encoded).map_err(|e| {
                    ProtocolError::invalid_request(format!("Value is not base64: {}", e))
                })?;
                Ok(Request::Put {
                    index: raw.index()?,
                    value,
                    scn: raw.scn(),
                })
            }
            "delete" => Ok(Request::Delete {
                index: raw.index()?,
                scn: raw.scn(),
            }),
            "clear" => Ok(Request::Clear),
            "sync" => Ok(Request::Sync),
            "persist" => Ok(Request::Persist),
            "meta" => match raw.key {
                Some(key) if !META_KEYS.contains(&key.as_str()) => {
                    Err(ProtocolError::unknown_meta_key(key))
                }
                key => Ok(Request::Meta { key }),
            },
            other => Err(ProtocolError::unknown_operation(other)),
        }
    }

    /// Operation name as sent on the wire
    pub fn op(&self) -> &'static str {
        match self {
            Request::Get { .. } => "get",
            Request::Put { .. } => "put",
            Request::Delete { .. } => "delete",
            Request::Clear => "clear",
            Request::Sync => "sync",
            Request::Persist => "persist",
            Request::Meta { .. } => "meta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put_decodes_value() {
        let req = Request::parse(r#"{"op":"put","index":7,"value":"aGVsbG8=","scn":3}"#).unwrap();
        assert_eq!(
            req,
            Request::Put {
                index: 7,
                value: b"hello".to_vec(),
                scn: 3
            }
        );
    }

    #[test]
    fn test_scn_defaults_to_zero() {
        let req = Request::parse(r#"{"op":"delete","index":1}"#).unwrap();
        assert_eq!(req, Request::Delete { index: 1, scn: 0 });
    }

    #[test]
    fn test_missing_index() {
        let err = Request::parse(r#"{"op":"get"}"#).unwrap_err();
        assert_eq!(err.code(), "PROTOCOL_INVALID_REQUEST");
    }

    #[test]
    fn test_bad_base64() {
        let err = Request::parse(r#"{"op":"put","index":0,"value":"***"}"#).unwrap_err();
        assert_eq!(err.code(), "PROTOCOL_INVALID_REQUEST");
    }

    #[test]
    fn test_unknown_op() {
        let err = Request::parse(r#"{"op":"scan"}"#).unwrap_err();
        assert_eq!(err.code(), "PROTOCOL_UNKNOWN_OPERATION");
    }

    #[test]
    fn test_meta_key_checked() {
        assert_eq!(
            Request::parse(r#"{"op":"meta","key":"hw_mark"}"#).unwrap(),
            Request::Meta {
                key: Some("hw_mark".to_string())
            }
        );
        assert_eq!(
            Request::parse(r#"{"op":"meta"}"#).unwrap(),
            Request::Meta { key: None }
        );
        let err = Request::parse(r#"{"op":"meta","key":"partitions"}"#).unwrap_err();
        assert_eq!(err.code(), "PROTOCOL_UNKNOWN_META_KEY");
    }
}
