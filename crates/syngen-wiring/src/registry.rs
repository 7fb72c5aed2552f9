// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Registry of per-synapse state arrays.

Any array declared to hold one entry per synapse registers here by name.
After a sweep the generator resizes every registered array to the final
edge count in one bulk pass, iterating names in sorted order so that any
resize side effects happen in a reproducible sequence.
*/

use crate::types::{WiringError, WiringResult};
use ahash::AHashMap;
use std::any::Any;
use syngen_structures::{DynamicArray, StructureResult};

/// An array that tracks the synapse count.
pub trait SynapseDependent {
    /// Current length in entries
    fn len(&self) -> usize;

    /// Whether the array holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set the length to exactly `new_len`, preserving existing entries
    /// and default-filling new slots
    fn resize(&mut self, new_len: usize) -> StructureResult<()>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Clone + Default + 'static> SynapseDependent for DynamicArray<T> {
    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn resize(&mut self, new_len: usize) -> StructureResult<()> {
        DynamicArray::resize(self, new_len)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Named collection of synapse-count-dependent arrays.
#[derive(Default)]
pub struct DependentArrays {
    arrays: AHashMap<String, Box<dyn SynapseDependent>>,
}

impl DependentArrays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `array` under `name`. Registering an already-used name is
    /// an error: replacing the handle would leave the old array's length
    /// permanently stale.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        array: Box<dyn SynapseDependent>,
    ) -> WiringResult<()> {
        let name = name.into();
        if self.arrays.contains_key(&name) {
            return Err(WiringError::DuplicateDependent(name));
        }
        self.arrays.insert(name, array);
        Ok(())
    }

    /// Resize every registered array to `new_len`, in name-sorted order.
    pub fn resize_all(&mut self, new_len: usize) -> WiringResult<()> {
        let mut names: Vec<String> = self.arrays.keys().cloned().collect();
        names.sort_unstable();
        for name in names {
            if let Some(array) = self.arrays.get_mut(&name) {
                array
                    .resize(new_len)
                    .map_err(|source| WiringError::Allocation { array: name.clone(), source })?;
            }
        }
        Ok(())
    }

    /// Number of registered arrays
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Whether no arrays are registered
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.arrays.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Borrow a registered array downcast to its concrete type
    pub fn get<T: SynapseDependent + 'static>(&self, name: &str) -> Option<&T> {
        self.arrays.get(name)?.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow a registered array downcast to its concrete type
    pub fn get_mut<T: SynapseDependent + 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.arrays.get_mut(name)?.as_any_mut().downcast_mut::<T>()
    }
}

impl std::fmt::Debug for DependentArrays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependentArrays")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resize_all() {
        let mut registry = DependentArrays::new();
        registry
            .register("weight", Box::new(DynamicArray::<f32>::new()))
            .unwrap();
        registry
            .register("delay", Box::new(DynamicArray::<u16>::new()))
            .unwrap();

        registry.resize_all(5).unwrap();
        let weights: &DynamicArray<f32> = registry.get("weight").unwrap();
        let delays: &DynamicArray<u16> = registry.get("delay").unwrap();
        assert_eq!(weights.len(), 5);
        assert_eq!(delays.len(), 5);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = DependentArrays::new();
        registry
            .register("weight", Box::new(DynamicArray::<f32>::new()))
            .unwrap();
        let err = registry
            .register("weight", Box::new(DynamicArray::<f32>::new()))
            .unwrap_err();
        assert!(matches!(err, WiringError::DuplicateDependent(name) if name == "weight"));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = DependentArrays::new();
        for name in ["w", "delay", "plastic"] {
            registry
                .register(name, Box::new(DynamicArray::<f64>::new()))
                .unwrap();
        }
        assert_eq!(registry.names(), vec!["delay", "plastic", "w"]);
    }

    #[test]
    fn test_resize_preserves_written_values() {
        let mut registry = DependentArrays::new();
        registry
            .register("weight", Box::new(DynamicArray::<f32>::new()))
            .unwrap();
        registry.resize_all(2).unwrap();
        registry
            .get_mut::<DynamicArray<f32>>("weight")
            .unwrap()
            .as_mut_slice()
            .copy_from_slice(&[0.5, 0.25]);

        registry.resize_all(4).unwrap();
        let weights: &DynamicArray<f32> = registry.get("weight").unwrap();
        assert_eq!(weights.as_slice(), &[0.5, 0.25, 0.0, 0.0]);
    }
}
