//! Paged dynamic arrays
//!
//! The array is the indexing primitive underneath the store: integer
//! positions map to fixed-width values such as record offsets.
//!
//! # Design Principles
//!
//! - One generic implementation, instantiated per value width
//! - Capacity grows in whole pages and never shrinks
//! - Existing pages are never relocated or copied on growth
//! - No locking, no logging, no persistence at this layer
//!
//! # Invariants
//!
//! - `length()` is always a multiple of the page size (or saturated)
//! - Negative indices are rejected, never treated as growth
//! - Once written, an index stays covered for the life of the array
//! - The expansion listener fires once per actual capacity increase

mod errors;
mod listener;
mod page;
mod paged;
mod types;

pub use errors::{ArrayError, ArrayErrorCode, ArrayResult, Severity};
pub use listener::ExpansionListener;
pub use paged::{
    MemoryIntArray, MemoryLongArray, MemoryObjectArray, MemoryShortArray, PagedArray,
    DEFAULT_PAGE_BITS, MAX_PAGE_BITS,
};
pub use types::{Array, ArrayType, DynamicArray, ValueArray};
