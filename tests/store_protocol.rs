//! Store and Protocol Tests
//!
//! End-to-end checks through the responder:
//! - Array error codes reach the caller unchanged
//! - Water marks follow the scn values written
//! - Capacity growth is visible through meta

use pagestore::config::StoreConfig;
use pagestore::protocol::{
    BasicArrayStoreResponderFactory, Response, StoreResponder, StoreResponderFactory,
};
use pagestore::store::{ArrayStore, ArrayStoreFactory, MemoryArrayStoreFactory};
use serde_json::Value;

// =============================================================================
// Test Utilities
// =============================================================================

fn config(page_bits: u32, auto_expand: bool) -> StoreConfig {
    StoreConfig {
        page_bits,
        auto_expand,
        ..StoreConfig::default()
    }
}

fn responder(config: &StoreConfig) -> impl StoreResponder {
    BasicArrayStoreResponderFactory::new(MemoryArrayStoreFactory)
        .create_responder(config)
        .expect("Failed to create responder")
}

fn ok(resp: Response) -> Value {
    let json: Value = serde_json::from_str(&resp.to_json()).unwrap();
    assert_eq!(json["status"], "ok", "unexpected response: {}", json);
    json["data"].clone()
}

// =============================================================================
// Error Pass-Through
// =============================================================================

#[test]
fn test_fixed_capacity_error_reaches_caller() {
    let r = responder(&config(4, false));

    let resp = r.respond(r#"{"op":"put","index":16,"value":"AA==","scn":1}"#);
    assert_eq!(resp.error_code(), Some("ARRAY_CAPACITY_EXCEEDED"));

    let meta = ok(r.respond(r#"{"op":"meta"}"#));
    assert_eq!(meta["capacity"], 16);
    assert_eq!(meta["hw_mark"], 0);
}

#[test]
fn test_bounds_error_reaches_caller() {
    let r = responder(&config(4, true));
    for request in [
        r#"{"op":"get","index":-1}"#,
        r#"{"op":"put","index":-1,"value":"AA=="}"#,
        r#"{"op":"delete","index":-1}"#,
        r#"{"op":"get","index":16}"#,
    ] {
        let resp = r.respond(request);
        assert_eq!(resp.error_code(), Some("ARRAY_INDEX_OUT_OF_BOUNDS"), "{}", request);
    }
}

// =============================================================================
// Growth and Marks
// =============================================================================

#[test]
fn test_growth_visible_through_meta() {
    let r = responder(&config(4, true));

    ok(r.respond(r#"{"op":"put","index":20,"value":"Bw==","scn":1}"#));

    let meta = ok(r.respond(r#"{"op":"meta","key":"capacity"}"#));
    assert_eq!(meta["capacity"], 32);
    let got = ok(r.respond(r#"{"op":"get","index":20}"#));
    assert_eq!(got["value"], "Bw==");
}

#[test]
fn test_marks_follow_scn() {
    let r = responder(&config(4, true));

    ok(r.respond(r#"{"op":"put","index":1,"value":"AQ==","scn":10}"#));
    ok(r.respond(r#"{"op":"put","index":2,"value":"Ag==","scn":4}"#));
    ok(r.respond(r#"{"op":"delete","index":1,"scn":11}"#));

    let meta = ok(r.respond(r#"{"op":"meta"}"#));
    assert_eq!(meta["hw_mark"], 11);
    assert_eq!(meta["lw_mark"], 0);

    let marks = ok(r.respond(r#"{"op":"persist"}"#));
    assert_eq!(marks["lw_mark"], 11);

    let cleared = ok(r.respond(r#"{"op":"clear"}"#));
    assert_eq!(cleared["hw_mark"], 11);
    let got = ok(r.respond(r#"{"op":"get","index":2}"#));
    assert!(got["value"].is_null());
}

// =============================================================================
// Store Factory
// =============================================================================

#[test]
fn test_factory_store_through_trait_object() {
    let mut store: Box<dyn ArrayStore> = MemoryArrayStoreFactory
        .create(&StoreConfig {
            page_bits: 3,
            index_start: 64,
            initial_capacity: 20,
            ..StoreConfig::default()
        })
        .expect("Failed to create store");

    assert_eq!(store.capacity(), 24);
    assert!(store.has_index(64 + 23));
    assert!(!store.has_index(63));

    store.set(70, b"offset", 3).unwrap();
    store.save_hw_mark(8).unwrap();

    assert_eq!(store.get(70).unwrap().unwrap().as_slice(), b"offset");
    assert_eq!(store.hw_mark(), 8);
    assert_eq!(store.lw_mark(), 8);
}
