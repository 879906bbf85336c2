//! In-memory array store
//!
//! Values are byte strings held in a [`MemoryObjectArray`]. The store keeps
//! high/low water marks over the scn values it is handed, but writes
//! nothing to disk: `sync` and `persist` only advance the low-water mark.

use std::sync::Arc;

use crate::array::{ArrayError, ArrayType, MemoryObjectArray, PagedArray};
use crate::config::StoreConfig;
use crate::observability::{log_event_with_fields, Event};

use super::errors::StoreResult;
use super::tracker::CapacityTracker;
use super::ArrayStore;

/// Byte-valued store over a paged object array.
///
/// Indices are absolute; slot `index` lives at array position
/// `index - index_start`.
#[derive(Debug)]
pub struct MemoryArrayStore {
    array: MemoryObjectArray<Vec<u8>>,
    tracker: Arc<CapacityTracker>,
    index_start: i32,
    hw_mark: i64,
    lw_mark: i64,
}

impl MemoryArrayStore {
    /// Builds a store from a validated configuration.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let mut array: MemoryObjectArray<Vec<u8>> =
            PagedArray::new(config.page_bits, config.auto_expand)?;
        let tracker = Arc::new(CapacityTracker::new(array.length()));
        array.set_expansion_listener(&tracker);

        if config.initial_capacity > 0 {
            array.expand_capacity(config.initial_capacity - 1);
        }

        Ok(Self {
            array,
            tracker,
            index_start: config.index_start,
            hw_mark: 0,
            lw_mark: 0,
        })
    }

    /// Listener attached to the backing array
    pub fn tracker(&self) -> &CapacityTracker {
        &self.tracker
    }

    /// Backing array, read-only
    pub fn array(&self) -> &MemoryObjectArray<Vec<u8>> {
        &self.array
    }

    fn to_array_index(&self, index: i32) -> StoreResult<i32> {
        if index < self.index_start {
            return Err(ArrayError::index_out_of_bounds(index, self.array.length()).into());
        }
        Ok(index - self.index_start)
    }

    fn advance_hw_mark(&mut self, scn: i64) {
        self.hw_mark = self.hw_mark.max(scn);
    }

    fn marks_fields(&self) -> (String, String) {
        (self.hw_mark.to_string(), self.lw_mark.to_string())
    }
}

impl ArrayStore for MemoryArrayStore {
    fn capacity(&self) -> i32 {
        self.array.length()
    }

    fn index_start(&self) -> i32 {
        self.index_start
    }

    fn has_index(&self, index: i32) -> bool {
        index >= self.index_start && self.array.has_index(index - self.index_start)
    }

    fn get(&self, index: i32) -> StoreResult<Option<Arc<Vec<u8>>>> {
        let position = self.to_array_index(index)?;
        Ok(self.array.get_ref(position)?.clone())
    }

    fn set(&mut self, index: i32, value: &[u8], scn: i64) -> StoreResult<()> {
        let position = self.to_array_index(index)?;
        self.array
            .set_with_scn(position, Some(Arc::new(value.to_vec())), scn)?;
        self.advance_hw_mark(scn);
        Ok(())
    }

    fn delete(&mut self, index: i32, scn: i64) -> StoreResult<()> {
        let position = self.to_array_index(index)?;
        self.array.set_with_scn(position, None, scn)?;
        self.advance_hw_mark(scn);
        Ok(())
    }

    fn clear(&mut self) {
        self.array.clear();
        let capacity = self.array.length().to_string();
        log_event_with_fields(Event::StoreCleared, &[("capacity", capacity.as_str())]);
    }

    fn sync(&mut self) -> StoreResult<()> {
        self.lw_mark = self.hw_mark;
        let (hw, lw) = self.marks_fields();
        log_event_with_fields(
            Event::StoreSynced,
            &[("hw_mark", hw.as_str()), ("lw_mark", lw.as_str())],
        );
        Ok(())
    }

    fn persist(&mut self) -> StoreResult<()> {
        self.lw_mark = self.hw_mark;
        let (hw, lw) = self.marks_fields();
        log_event_with_fields(
            Event::StorePersisted,
            &[("hw_mark", hw.as_str()), ("lw_mark", lw.as_str())],
        );
        Ok(())
    }

    fn hw_mark(&self) -> i64 {
        self.hw_mark
    }

    fn lw_mark(&self) -> i64 {
        self.lw_mark
    }

    fn save_hw_mark(&mut self, end_of_period: i64) -> StoreResult<()> {
        if end_of_period > self.hw_mark {
            self.hw_mark = end_of_period;
            self.lw_mark = end_of_period;
        }
        Ok(())
    }

    fn array_type(&self) -> ArrayType {
        self.array.array_type()
    }
}
