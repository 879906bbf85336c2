//! Fixed-length block of value slots

/// A page of `T` slots.
///
/// Length is fixed at allocation. Slots start at `T::default()`.
#[derive(Debug)]
pub(crate) struct Page<T> {
    slots: Box<[T]>,
}

impl<T: Clone + Default> Page<T> {
    /// Allocates a page of `size` zero slots.
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            slots: vec![T::default(); size].into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, offset: usize) -> &T {
        &self.slots[offset]
    }

    #[inline]
    pub(crate) fn set(&mut self, offset: usize, value: T) {
        self.slots[offset] = value;
    }

    /// Resets every slot to `T::default()`.
    pub(crate) fn fill_zero(&mut self) {
        self.slots.fill(T::default());
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Address of the first slot. Stable for the lifetime of the page.
    #[cfg(test)]
    pub(crate) fn base_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }
}
