//! Array store responder
//!
//! Translates protocol requests into store calls. The store is not
//! thread-safe, so every request runs under one global lock.

use std::sync::{Mutex, PoisonError};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Map, Value};

use crate::observability::{log_event_with_fields, Event};
use crate::store::ArrayStore;

use super::errors::{ProtocolError, ProtocolResult};
use super::request::{Request, META_KEYS};
use super::response::Response;

/// Answers requests against one store
pub trait StoreResponder: Send + Sync {
    /// Handle a raw JSON request
    fn respond(&self, json_request: &str) -> Response;
}

/// Responder over a boxed [`ArrayStore`]
pub struct ArrayStoreResponder {
    store: Mutex<Box<dyn ArrayStore>>,
}

impl ArrayStoreResponder {
    /// Wrap `store`
    pub fn new(store: Box<dyn ArrayStore>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Handle a raw JSON request string
    pub fn handle(&self, json_request: &str) -> Response {
        match Request::parse(json_request).and_then(|request| self.dispatch(request)) {
            Ok(data) => Response::success(data),
            Err(e) => {
                log_event_with_fields(
                    Event::RequestFailed,
                    &[("code", e.code()), ("message", e.message())],
                );
                Response::error(&e)
            }
        }
    }

    /// Run a parsed request under the store lock
    pub fn dispatch(&self, request: Request) -> ProtocolResult<Value> {
        let mut guard = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        let store: &mut dyn ArrayStore = &mut **guard;

        match request {
            Request::Get { index } => {
                let value = store.get(index)?.map(|bytes| STANDARD.encode(bytes.as_slice()));
                Ok(json!({ "index": index, "value": value }))
            }
            Request::Put { index, value, scn } => {
                store.set(index, &value, scn)?;
                Ok(json!({ "index": index }))
            }
            Request::Delete { index, scn } => {
                store.delete(index, scn)?;
                Ok(json!({ "index": index }))
            }
            Request::Clear => {
                store.clear();
                Ok(marks(store))
            }
            Request::Sync => {
                store.sync()?;
                Ok(marks(store))
            }
            Request::Persist => {
                store.persist()?;
                Ok(marks(store))
            }
            Request::Meta { key: Some(key) } => {
                let value = meta_value(store, &key)
                    .ok_or_else(|| ProtocolError::unknown_meta_key(key.as_str()))?;
                let mut one = Map::new();
                one.insert(key, value);
                Ok(Value::Object(one))
            }
            Request::Meta { key: None } => {
                let mut all = Map::new();
                for key in META_KEYS {
                    if let Some(value) = meta_value(store, key) {
                        all.insert(key.to_string(), value);
                    }
                }
                Ok(Value::Object(all))
            }
        }
    }
}

impl StoreResponder for ArrayStoreResponder {
    fn respond(&self, json_request: &str) -> Response {
        self.handle(json_request)
    }
}

fn marks(store: &dyn ArrayStore) -> Value {
    json!({ "hw_mark": store.hw_mark(), "lw_mark": store.lw_mark() })
}

fn meta_value(store: &dyn ArrayStore, key: &str) -> Option<Value> {
    match key {
        "array_type" => Some(json!(store.array_type().as_str())),
        "capacity" => Some(json!(store.capacity())),
        "hw_mark" => Some(json!(store.hw_mark())),
        "index_start" => Some(json!(store.index_start())),
        "lw_mark" => Some(json!(store.lw_mark())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::store::MemoryArrayStore;

    fn responder() -> ArrayStoreResponder {
        let config = StoreConfig {
            page_bits: 4,
            ..StoreConfig::default()
        };
        ArrayStoreResponder::new(Box::new(MemoryArrayStore::new(&config).unwrap()))
    }

    fn data(resp: Response) -> Value {
        match resp {
            Response::Success(r) => r.data,
            Response::Error(e) => panic!("unexpected error {}: {}", e.code, e.message),
        }
    }

    #[test]
    fn test_put_then_get() {
        let r = responder();
        data(r.handle(r#"{"op":"put","index":20,"value":"AQID","scn":1}"#));

        let got = data(r.handle(r#"{"op":"get","index":20}"#));
        assert_eq!(got["value"], "AQID");

        let meta = data(r.handle(r#"{"op":"meta","key":"capacity"}"#));
        assert_eq!(meta["capacity"], 32);
    }

    #[test]
    fn test_get_empty_slot_is_null() {
        let r = responder();
        let got = data(r.handle(r#"{"op":"get","index":2}"#));
        assert!(got["value"].is_null());
    }

    #[test]
    fn test_negative_index_error_passes_through() {
        let r = responder();
        let resp = r.handle(r#"{"op":"put","index":-1,"value":"AA=="}"#);
        assert_eq!(resp.error_code(), Some("ARRAY_INDEX_OUT_OF_BOUNDS"));
    }

    #[test]
    fn test_read_past_capacity_errors() {
        let r = responder();
        let resp = r.handle(r#"{"op":"get","index":500}"#);
        assert_eq!(resp.error_code(), Some("ARRAY_INDEX_OUT_OF_BOUNDS"));
    }

    #[test]
    fn test_sync_reports_marks() {
        let r = responder();
        data(r.handle(r#"{"op":"put","index":0,"value":"AA==","scn":42}"#));
        let marks = data(r.handle(r#"{"op":"sync"}"#));
        assert_eq!(marks["hw_mark"], 42);
        assert_eq!(marks["lw_mark"], 42);
    }

    #[test]
    fn test_meta_all_keys() {
        let r = responder();
        let meta = data(r.handle(r#"{"op":"meta"}"#));
        assert_eq!(meta["array_type"], "DYNAMIC");
        assert_eq!(meta["capacity"], 16);
        assert_eq!(meta["index_start"], 0);
        assert_eq!(meta.as_object().unwrap().len(), META_KEYS.len());
    }

    #[test]
    fn test_malformed_request() {
        let r = responder();
        let resp = r.handle("not json");
        assert_eq!(resp.error_code(), Some("PROTOCOL_INVALID_REQUEST"));
    }
}
