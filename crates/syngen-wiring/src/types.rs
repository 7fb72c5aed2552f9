// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Core types for wiring operations.
*/

use syngen_structures::StructureError;

/// Absolute node index within a population's index space
pub type NeuronIndex = u32;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors that can occur during connectivity generation
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    /// The rule failed outright or produced a malformed result for a pair.
    #[error("evaluation failed for pair ({pre_loop}, {post_loop}): {reason}")]
    Evaluation {
        pre_loop: u32,
        post_loop: u32,
        reason: String,
    },

    /// An absolute index fell outside the population a counter covers.
    #[error("{counter} index {index} outside population of {population_len}")]
    IndexOutOfRange {
        counter: &'static str,
        index: NeuronIndex,
        population_len: usize,
    },

    /// The edge store or a dependent array could not grow.
    #[error("allocation failure while growing {array}: {source}")]
    Allocation {
        array: String,
        #[source]
        source: StructureError,
    },

    /// Parallel edge arrays disagree on length. Signals prior corruption;
    /// never repaired silently.
    #[error("edge store corrupt: {pre_len} pre indices vs {post_len} post indices")]
    InvariantViolation { pre_len: usize, post_len: usize },

    #[error("dependent array {0:?} is already registered")]
    DuplicateDependent(String),

    #[error("invalid wiring config: {0}")]
    Config(String),
}

/// Contiguous subgroup view of a neuron group.
///
/// Absolute indices need not start at zero: a population covering
/// `[offset, offset + len)` of a larger group maps loop index `i` to
/// absolute index `offset + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population {
    offset: NeuronIndex,
    len: u32,
}

impl Population {
    /// Population spanning `[0, len)`
    pub fn new(len: u32) -> Self {
        Self { offset: 0, len }
    }

    /// Subgroup spanning `[offset, offset + len)`
    pub fn subgroup(offset: NeuronIndex, len: u32) -> Self {
        Self { offset, len }
    }

    /// Number of nodes in this population
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether the population holds no nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First absolute index
    pub fn offset(&self) -> NeuronIndex {
        self.offset
    }

    /// Map a loop index to its absolute node index
    pub fn absolute(&self, loop_index: u32) -> NeuronIndex {
        debug_assert!(loop_index < self.len);
        self.offset + loop_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subgroup_offsets() {
        let inhibitory = Population::subgroup(3200, 800);
        assert_eq!(inhibitory.absolute(0), 3200);
        assert_eq!(inhibitory.absolute(799), 3999);
        assert_eq!(inhibitory.len(), 800);
    }

    #[test]
    fn test_full_population_is_identity() {
        let group = Population::new(4000);
        assert_eq!(group.absolute(0), 0);
        assert_eq!(group.absolute(3999), 3999);
    }
}
