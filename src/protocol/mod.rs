//! Request/response protocol over an array store
//!
//! Line-delimited JSON:
//!
//! ```text
//! {"op":"put","index":20,"value":"<base64>","scn":7}
//! {"status":"ok","data":{"index":20}}
//!
//! {"op":"get","index":-1}
//! {"status":"error","code":"ARRAY_INDEX_OUT_OF_BOUNDS","message":"..."}
//! ```
//!
//! Operations: get, put, delete, clear, sync, persist, meta.
//! Error codes from the store and array are passed through unchanged.

mod errors;
mod factory;
mod request;
mod responder;
mod response;

pub use errors::{ProtocolError, ProtocolErrorCode, ProtocolResult};
pub use factory::{BasicArrayStoreResponderFactory, StoreResponderFactory};
pub use request::{Request, META_KEYS};
pub use responder::{ArrayStoreResponder, StoreResponder};
pub use response::{ErrorResponse, Response, SuccessResponse};
