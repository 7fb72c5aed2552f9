// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Owned growable buffer with fallible growth
//!
//! `Vec`-backed, so appends are amortized O(1) with capacity doubling.
//! All growth goes through `try_reserve` and surfaces exhaustion as an
//! error instead of aborting the process.

use std::collections::TryReserveError;

/// Errors raised by storage growth
#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    #[error("failed to reserve {additional} additional slot(s): {source}")]
    Reserve {
        additional: usize,
        source: TryReserveError,
    },
}

/// Result type for storage operations
pub type StructureResult<T> = Result<T, StructureError>;

/// Growable array of per-synapse (or per-edge) state.
///
/// Appends never reorder or drop existing entries; a resize preserves the
/// prefix and default-fills any new slots.
#[derive(Debug, Clone, Default)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Create an empty array
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty array with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> StructureResult<Self> {
        let mut data = Vec::new();
        data.try_reserve(capacity).map_err(|source| StructureError::Reserve {
            additional: capacity,
            source,
        })?;
        Ok(Self { data })
    }

    /// Append one entry
    pub fn push(&mut self, value: T) -> StructureResult<()> {
        if self.data.len() == self.data.capacity() {
            self.data.try_reserve(1).map_err(|source| StructureError::Reserve {
                additional: 1,
                source,
            })?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Resize to exactly `new_len` entries.
    ///
    /// Shrinking truncates; growing default-fills the new tail. The first
    /// `min(old_len, new_len)` entries are untouched either way.
    pub fn resize(&mut self, new_len: usize) -> StructureResult<()> {
        if new_len > self.data.len() {
            let additional = new_len - self.data.len();
            self.data.try_reserve(additional).map_err(|source| StructureError::Reserve {
                additional,
                source,
            })?;
        }
        self.data.resize(new_len, T::default());
        Ok(())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity in entries
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Entry at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// All entries as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All entries as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over entries
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut array = DynamicArray::new();
        array.push(3u32).unwrap();
        array.push(7u32).unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array.as_slice(), &[3, 7]);
    }

    #[test]
    fn test_resize_grows_with_default_fill() {
        let mut array = DynamicArray::new();
        array.push(5i64).unwrap();
        array.resize(4).unwrap();
        assert_eq!(array.as_slice(), &[5, 0, 0, 0]);
    }

    #[test]
    fn test_resize_preserves_prefix_on_shrink() {
        let mut array = DynamicArray::new();
        for v in 0..6u32 {
            array.push(v).unwrap();
        }
        array.resize(2).unwrap();
        assert_eq!(array.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_resize_to_same_len_is_noop() {
        let mut array = DynamicArray::new();
        array.push(1.5f64).unwrap();
        array.push(2.5f64).unwrap();
        let capacity = array.capacity();
        array.resize(2).unwrap();
        assert_eq!(array.as_slice(), &[1.5, 2.5]);
        assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let array: DynamicArray<u32> = DynamicArray::with_capacity(128).unwrap();
        assert!(array.is_empty());
        assert!(array.capacity() >= 128);
    }
}
