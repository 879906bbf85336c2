//! Observability for the array store
//!
//! Structured, synchronous JSON logging of lifecycle and store events.
//! The array core does not log; callers above it do.
//!
//! # Usage
//!
//! ```ignore
//! use pagestore::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ArrayExpanded, &[("capacity", "131072")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with no fields
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event, picking severity from the event kind
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event, fields);
}

/// Failures are WARN, everything else INFO
pub fn severity_for(event: Event) -> Severity {
    if event.is_failure() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("path", "/tmp/pagestore.json")]);
        log_event_with_fields(Event::RequestFailed, &[("code", "ARRAY_INDEX_OUT_OF_BOUNDS")]);
    }

    #[test]
    fn test_severity_follows_event_kind() {
        assert_eq!(severity_for(Event::RequestFailed), Severity::Warn);
        assert_eq!(severity_for(Event::ArrayExpanded), Severity::Info);
        assert_eq!(severity_for(Event::BootStart), Severity::Info);
    }
}
