//! Capacity tracking expansion listener

use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

use crate::array::{ExpansionListener, PagedArray};
use crate::observability::{log_event_with_fields, Event};

/// Records the latest capacity of the array it listens to and logs each
/// growth as `ARRAY_EXPANDED`.
#[derive(Debug, Default)]
pub struct CapacityTracker {
    capacity: AtomicI32,
    expansions: AtomicU64,
}

impl CapacityTracker {
    /// Tracker seeded with the array's capacity before any growth
    pub fn new(initial_capacity: i32) -> Self {
        Self {
            capacity: AtomicI32::new(initial_capacity),
            expansions: AtomicU64::new(0),
        }
    }

    /// Capacity reported by the most recent notification
    pub fn capacity(&self) -> i32 {
        self.capacity.load(Ordering::Acquire)
    }

    /// Number of notifications received
    pub fn expansions(&self) -> u64 {
        self.expansions.load(Ordering::Acquire)
    }
}

impl<T> ExpansionListener<T> for CapacityTracker
where
    T: Clone + Default,
{
    fn array_expanded(&self, array: &PagedArray<T>) {
        let capacity = array.length();
        let previous = self.capacity.swap(capacity, Ordering::AcqRel);
        self.expansions.fetch_add(1, Ordering::AcqRel);

        let capacity = capacity.to_string();
        let pages = array.page_count().to_string();
        let previous = previous.to_string();
        log_event_with_fields(
            Event::ArrayExpanded,
            &[
                ("capacity", capacity.as_str()),
                ("pages", pages.as_str()),
                ("previous_capacity", previous.as_str()),
            ],
        );
    }
}
