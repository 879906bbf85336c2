//! Capability traits shared by array implementations
//!
//! Store code is written against these traits so it does not depend on
//! the concrete element width of the array underneath.

use std::fmt;

use super::errors::ArrayResult;

/// Storage category of an array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayType {
    /// Capacity fixed at construction
    Static,
    /// Capacity grows in page increments
    Dynamic,
}

impl ArrayType {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayType::Static => "STATIC",
            ArrayType::Dynamic => "DYNAMIC",
        }
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shape of an array, independent of what it stores
pub trait Array {
    /// Current capacity, saturated to `i32::MAX`
    fn length(&self) -> i32;

    /// Whether `index` is covered by the current capacity
    fn has_index(&self, index: i32) -> bool;

    /// Reset every slot to the zero value without touching capacity
    fn clear(&mut self);

    /// Storage category tag
    fn array_type(&self) -> ArrayType;
}

/// An array whose capacity can be grown on request
pub trait DynamicArray: Array {
    /// Grow so that `index` is covered. No-op for negative or covered indices.
    fn expand_capacity(&mut self, index: i32);
}

/// Indexed read/write access to values of type `T`
pub trait ValueArray<T>: Array {
    /// Read the value at `index`
    fn get(&self, index: i32) -> ArrayResult<T>;

    /// Write `value` at `index`
    fn set(&mut self, index: i32, value: T) -> ArrayResult<()>;

    /// Write `value` at `index`, carrying an update sequence number
    ///
    /// The sequence number is for persistence layers further down; the
    /// in-memory semantics are exactly those of [`ValueArray::set`].
    fn set_with_scn(&mut self, index: i32, value: T, scn: i64) -> ArrayResult<()>;

    /// Flattened copy of every slot
    fn internal_array(&self) -> Vec<T>;
}
