//! Expansion notification hook

use super::paged::PagedArray;

/// Receives a callback after a [`PagedArray`] grows.
///
/// The callback runs synchronously inside `set`/`expand_capacity`, after the
/// new pages are installed, so `array.length()` already reports the new
/// capacity. The array only holds a weak reference to its listener.
pub trait ExpansionListener<T>: Send + Sync {
    /// Called once per actual capacity increase
    fn array_expanded(&self, array: &PagedArray<T>);
}
