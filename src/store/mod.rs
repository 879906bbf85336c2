//! Array store boundary
//!
//! Associates a paged array with durability bookkeeping and exposes it to
//! the protocol layer. This crate ships an in-memory store only: water
//! marks are tracked but nothing reaches disk.
//!
//! # Invariants
//!
//! - Array error codes pass through unchanged
//! - Water marks never move backwards
//! - scn values are not checked for ordering

mod errors;
mod factory;
mod memory;
mod tracker;

use std::sync::Arc;

use crate::array::ArrayType;

pub use errors::{StoreError, StoreErrorCode, StoreErrorKind, StoreResult};
pub use factory::{ArrayStoreFactory, MemoryArrayStoreFactory};
pub use memory::MemoryArrayStore;
pub use tracker::CapacityTracker;

/// Byte-valued store addressed by integer index
///
/// Not thread-safe; callers serialize access.
pub trait ArrayStore: Send {
    /// Slots currently covered
    fn capacity(&self) -> i32;

    /// First index served
    fn index_start(&self) -> i32;

    /// Whether `index` is covered
    fn has_index(&self, index: i32) -> bool;

    /// Value at `index`, `None` if empty
    fn get(&self, index: i32) -> StoreResult<Option<Arc<Vec<u8>>>>;

    /// Write `value` at `index` under update sequence number `scn`
    fn set(&mut self, index: i32, value: &[u8], scn: i64) -> StoreResult<()>;

    /// Empty the slot at `index` under `scn`
    fn delete(&mut self, index: i32, scn: i64) -> StoreResult<()>;

    /// Empty every slot
    fn clear(&mut self);

    /// Flush pending writes
    fn sync(&mut self) -> StoreResult<()>;

    /// Persist pending writes
    fn persist(&mut self) -> StoreResult<()>;

    /// Highest scn accepted
    fn hw_mark(&self) -> i64;

    /// Highest scn flushed
    fn lw_mark(&self) -> i64;

    /// Record an end-of-period scn
    fn save_hw_mark(&mut self, end_of_period: i64) -> StoreResult<()>;

    /// Storage category of the backing array
    fn array_type(&self) -> ArrayType;
}
