// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Append-only edge storage.

Edges live in two parallel growable index arrays: entry `k` of the pre
array and entry `k` of the post array together define edge `k`. Identical
entries may repeat (multigraph). The arrays are required to stay the same
length at all times; a mismatch means prior corruption and is reported,
never repaired.
*/

use crate::types::{NeuronIndex, WiringError, WiringResult};
use syngen_structures::DynamicArray;

/// Parallel pre/post index arrays
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    pre: DynamicArray<NeuronIndex>,
    post: DynamicArray<NeuronIndex>,
}

impl EdgeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` edges
    pub fn with_capacity(capacity: usize) -> WiringResult<Self> {
        Ok(Self {
            pre: DynamicArray::with_capacity(capacity).map_err(|source| {
                WiringError::Allocation { array: "synaptic_pre".into(), source }
            })?,
            post: DynamicArray::with_capacity(capacity).map_err(|source| {
                WiringError::Allocation { array: "synaptic_post".into(), source }
            })?,
        })
    }

    /// Append one edge
    pub fn push(&mut self, pre: NeuronIndex, post: NeuronIndex) -> WiringResult<()> {
        self.pre
            .push(pre)
            .map_err(|source| WiringError::Allocation { array: "synaptic_pre".into(), source })?;
        self.post
            .push(post)
            .map_err(|source| WiringError::Allocation { array: "synaptic_post".into(), source })?;
        Ok(())
    }

    /// Current number of edges
    pub fn len(&self) -> usize {
        self.pre.len()
    }

    /// Whether the store holds no edges
    pub fn is_empty(&self) -> bool {
        self.pre.is_empty()
    }

    /// Verify the parallel arrays agree on length; returns that length.
    pub fn check_consistent(&self) -> WiringResult<usize> {
        if self.pre.len() != self.post.len() {
            return Err(WiringError::InvariantViolation {
                pre_len: self.pre.len(),
                post_len: self.post.len(),
            });
        }
        Ok(self.pre.len())
    }

    /// Source index of every edge, in append order
    pub fn pre_indices(&self) -> &[NeuronIndex] {
        self.pre.as_slice()
    }

    /// Target index of every edge, in append order
    pub fn post_indices(&self) -> &[NeuronIndex] {
        self.post.as_slice()
    }

    /// Edge at position `k`, if present
    pub fn edge(&self, k: usize) -> Option<(NeuronIndex, NeuronIndex)> {
        Some((*self.pre.get(k)?, *self.post.get(k)?))
    }

    /// Iterate edges in append order
    pub fn iter(&self) -> impl Iterator<Item = (NeuronIndex, NeuronIndex)> + '_ {
        self.pre
            .iter()
            .copied()
            .zip(self.post.iter().copied())
    }
}
