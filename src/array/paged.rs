//! Paged dynamic array
//!
//! Values live in a sequence of equally sized pages. A logical index is
//! split into a page number and an in-page offset:
//!
//! ```text
//! page   = index >> page_bits
//! offset = index &  page_mask      (page_mask = 2^page_bits - 1)
//! ```
//!
//! Capacity grows by appending pages and never shrinks. Existing pages are
//! moved into the new page table, so their slots are never copied and their
//! addresses stay stable across growth.
//!
//! # Thread safety
//!
//! `PagedArray` does no locking. Callers that share an instance must
//! serialize every call, growth included, behind their own lock.

use std::fmt;
use std::sync::{Arc, Weak};

use super::errors::{ArrayError, ArrayResult};
use super::listener::ExpansionListener;
use super::page::Page;
use super::types::{Array, ArrayType, DynamicArray, ValueArray};

/// Default page exponent (65536 slots per page)
pub const DEFAULT_PAGE_BITS: u32 = 16;

/// Largest page exponent whose page size still fits a positive `i32`
pub const MAX_PAGE_BITS: u32 = 30;

/// Growable array of `T` addressed by non-negative `i32` index.
pub struct PagedArray<T> {
    pages: Vec<Page<T>>,
    page_bits: u32,
    page_size: usize,
    page_mask: usize,
    auto_expand: bool,
    listener: Option<Weak<dyn ExpansionListener<T>>>,
}

/// 16-bit values
pub type MemoryShortArray = PagedArray<i16>;

/// 32-bit values
pub type MemoryIntArray = PagedArray<i32>;

/// 64-bit values
pub type MemoryLongArray = PagedArray<i64>;

/// Shared references; empty slots are `None`
pub type MemoryObjectArray<V> = PagedArray<Option<Arc<V>>>;

impl<T: Clone + Default> PagedArray<T> {
    /// Creates an array with one page of `2^page_bits` slots.
    ///
    /// # Errors
    ///
    /// `ARRAY_INVALID_PAGE_BITS` if `page_bits > MAX_PAGE_BITS`.
    pub fn new(page_bits: u32, auto_expand: bool) -> ArrayResult<Self> {
        if page_bits > MAX_PAGE_BITS {
            return Err(ArrayError::invalid_page_bits(page_bits, MAX_PAGE_BITS));
        }
        Ok(Self::build(page_bits, auto_expand))
    }

    /// Creates an auto-expanding array.
    pub fn with_page_bits(page_bits: u32) -> ArrayResult<Self> {
        Self::new(page_bits, true)
    }

    fn build(page_bits: u32, auto_expand: bool) -> Self {
        let page_size = 1usize << page_bits;
        Self {
            pages: vec![Page::zeroed(page_size)],
            page_bits,
            page_size,
            page_mask: page_size - 1,
            auto_expand,
            listener: None,
        }
    }

    /// Page exponent
    pub fn page_bits(&self) -> u32 {
        self.page_bits
    }

    /// Slots per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of allocated pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether out-of-capacity writes grow the array
    pub fn is_auto_expand(&self) -> bool {
        self.auto_expand
    }

    /// Page holding `index`. `index` must be non-negative.
    #[inline]
    pub fn page_index(&self, index: i32) -> usize {
        debug_assert!(index >= 0);
        (index as usize) >> self.page_bits
    }

    /// Offset of `index` within its page. `index` must be non-negative.
    #[inline]
    pub fn page_offset(&self, index: i32) -> usize {
        debug_assert!(index >= 0);
        (index as usize) & self.page_mask
    }

    /// Total capacity, saturated to `i32::MAX`.
    pub fn length(&self) -> i32 {
        saturated_length(self.pages.len(), self.page_size)
    }

    /// False for negative indices, otherwise whether the owning page exists.
    pub fn has_index(&self, index: i32) -> bool {
        index >= 0 && self.page_index(index) < self.pages.len()
    }

    /// Borrows the value at `index`.
    ///
    /// # Errors
    ///
    /// `ARRAY_INDEX_OUT_OF_BOUNDS` if `index` is negative or beyond capacity.
    pub fn get_ref(&self, index: i32) -> ArrayResult<&T> {
        if index < 0 {
            return Err(ArrayError::index_out_of_bounds(index, self.length()));
        }
        self.pages
            .get(self.page_index(index))
            .map(|page| page.get(self.page_offset(index)))
            .ok_or_else(|| ArrayError::index_out_of_bounds(index, self.length()))
    }

    /// Returns a copy of the value at `index`.
    ///
    /// # Errors
    ///
    /// `ARRAY_INDEX_OUT_OF_BOUNDS` if `index` is negative or beyond capacity.
    pub fn get(&self, index: i32) -> ArrayResult<T> {
        self.get_ref(index).cloned()
    }

    /// Writes `value` at `index`, growing first if allowed.
    ///
    /// # Errors
    ///
    /// - `ARRAY_INDEX_OUT_OF_BOUNDS` if `index` is negative
    /// - `ARRAY_CAPACITY_EXCEEDED` if the page is missing and auto-expand is off
    pub fn set(&mut self, index: i32, value: T) -> ArrayResult<()> {
        if index < 0 {
            return Err(ArrayError::index_out_of_bounds(index, self.length()));
        }

        let page_index = self.page_index(index);
        if page_index >= self.pages.len() {
            if !self.auto_expand {
                return Err(ArrayError::capacity_exceeded(index, self.length()));
            }
            self.expand_capacity(index);
        }

        let offset = self.page_offset(index);
        self.pages[page_index].set(offset, value);
        Ok(())
    }

    /// Same as [`PagedArray::set`]. `scn` is not stored or checked here.
    pub fn set_with_scn(&mut self, index: i32, value: T, _scn: i64) -> ArrayResult<()> {
        self.set(index, value)
    }

    /// Zeroes every slot. Capacity is unchanged.
    pub fn clear(&mut self) {
        for page in &mut self.pages {
            page.fill_zero();
        }
    }

    /// Grows so that `index` is covered.
    ///
    /// Appends the minimum number of zero pages. Existing pages are moved,
    /// not copied. The listener fires only when pages were actually added.
    pub fn expand_capacity(&mut self, index: i32) {
        if index < 0 {
            return;
        }

        let required = self.page_index(index) + 1;
        if required <= self.pages.len() {
            return;
        }

        let page_size = self.page_size;
        let mut pages = Vec::with_capacity(required);
        pages.append(&mut self.pages);
        pages.resize_with(required, || Page::zeroed(page_size));
        self.pages = pages;

        self.notify_expanded();
    }

    /// Flattened copy of all slots, `length()` entries long.
    pub fn internal_array(&self) -> Vec<T> {
        let len = self.length() as usize;
        let mut out = Vec::with_capacity(len);
        for page in &self.pages {
            let remaining = len - out.len();
            if remaining == 0 {
                break;
            }
            let slots = page.as_slice();
            out.extend_from_slice(&slots[..slots.len().min(remaining)]);
        }
        out
    }

    /// Always [`ArrayType::Dynamic`]
    pub fn array_type(&self) -> ArrayType {
        ArrayType::Dynamic
    }

    fn notify_expanded(&self) {
        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            listener.array_expanded(self);
        }
    }

    #[cfg(test)]
    fn page_ptr(&self, page: usize) -> *const T {
        self.pages[page].base_ptr()
    }
}

impl<T> PagedArray<T> {
    /// Attaches `listener`, replacing any previous one.
    ///
    /// Only a weak reference is kept; a dropped listener is skipped silently.
    pub fn set_expansion_listener<L>(&mut self, listener: &Arc<L>)
    where
        L: ExpansionListener<T> + 'static,
        T: 'static,
    {
        let weak = Arc::downgrade(listener) as Weak<dyn ExpansionListener<T>>;
        self.listener = Some(weak);
    }

    /// Detaches the current listener, if any.
    pub fn clear_expansion_listener(&mut self) {
        self.listener = None;
    }

    /// Whether a listener is attached and still alive
    pub fn has_expansion_listener(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| listener.strong_count() > 0)
    }
}

fn saturated_length(page_count: usize, page_size: usize) -> i32 {
    let len = page_count as u64 * page_size as u64;
    i32::try_from(len).unwrap_or(i32::MAX)
}

impl<T: Clone + Default> Default for PagedArray<T> {
    fn default() -> Self {
        Self::build(DEFAULT_PAGE_BITS, true)
    }
}

impl<T> fmt::Debug for PagedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedArray")
            .field("page_bits", &self.page_bits)
            .field("page_count", &self.pages.len())
            .field("auto_expand", &self.auto_expand)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl<T: Clone + Default> Array for PagedArray<T> {
    fn length(&self) -> i32 {
        PagedArray::length(self)
    }

    fn has_index(&self, index: i32) -> bool {
        PagedArray::has_index(self, index)
    }

    fn clear(&mut self) {
        PagedArray::clear(self)
    }

    fn array_type(&self) -> ArrayType {
        ArrayType::Dynamic
    }
}

impl<T: Clone + Default> DynamicArray for PagedArray<T> {
    fn expand_capacity(&mut self, index: i32) {
        PagedArray::expand_capacity(self, index)
    }
}

impl<T: Clone + Default> ValueArray<T> for PagedArray<T> {
    fn get(&self, index: i32) -> ArrayResult<T> {
        PagedArray::get(self, index)
    }

    fn set(&mut self, index: i32, value: T) -> ArrayResult<()> {
        PagedArray::set(self, index, value)
    }

    fn set_with_scn(&mut self, index: i32, value: T, scn: i64) -> ArrayResult<()> {
        PagedArray::set_with_scn(self, index, value, scn)
    }

    fn internal_array(&self) -> Vec<T> {
        PagedArray::internal_array(self)
    }
}
