//! Observable events for the array store
//!
//! Events are explicit and typed. The array core never emits any of
//! these; only the store, the responder and the CLI do.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Ready to serve requests
    Serving,
    /// Input exhausted, process exiting
    ShutdownComplete,

    // Configuration
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// Default configuration written
    ConfigWritten,

    // Store
    /// Store created by a factory
    StoreCreated,
    /// Backing array grew
    ArrayExpanded,
    /// All slots reset
    StoreCleared,
    /// Low-water mark advanced by sync
    StoreSynced,
    /// Low-water mark advanced by persist
    StorePersisted,

    // Requests
    /// Request answered with an error envelope
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "PAGESTORE_STARTUP_BEGIN",
            Event::Serving => "PAGESTORE_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigWritten => "CONFIG_WRITTEN",

            Event::StoreCreated => "STORE_CREATED",
            Event::ArrayExpanded => "ARRAY_EXPANDED",
            Event::StoreCleared => "STORE_CLEARED",
            Event::StoreSynced => "STORE_SYNCED",
            Event::StorePersisted => "STORE_PERSISTED",

            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Events that report a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::RequestFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
