//! pagestore - paged dynamic arrays and the array store built on them
//!
//! The core is [`array::PagedArray`]: a densely addressed, page-grown
//! container of fixed-width values used as a key/value store's index.
//! The remaining modules wrap it in an in-memory store, a JSON request
//! protocol and a small CLI.

pub mod array;
pub mod cli;
pub mod config;
pub mod observability;
pub mod protocol;
pub mod store;
