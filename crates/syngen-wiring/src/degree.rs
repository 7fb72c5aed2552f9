// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-node degree counters
//!
//! One counter array per direction, sized to the full node count of its
//! population before any sweep runs. The generator only ever increments;
//! counters never shrink and are never resized here.

use crate::types::{NeuronIndex, WiringError, WiringResult};

/// Monotonic per-node edge counter.
#[derive(Debug, Clone)]
pub struct DegreeCounter {
    label: &'static str,
    counts: Vec<u32>,
}

impl DegreeCounter {
    /// Counter over a population of `population_len` nodes, all zeros.
    /// `label` names the direction in error messages ("outgoing" /
    /// "incoming").
    pub fn new(label: &'static str, population_len: usize) -> Self {
        Self {
            label,
            counts: vec![0; population_len],
        }
    }

    /// Record one more edge at `index`
    pub fn increment(&mut self, index: NeuronIndex) -> WiringResult<()> {
        let population_len = self.counts.len();
        let slot = self.counts.get_mut(index as usize).ok_or(WiringError::IndexOutOfRange {
            counter: self.label,
            index,
            population_len,
        })?;
        *slot += 1;
        Ok(())
    }

    /// Whether `index` falls inside the population this counter covers
    pub fn covers(&self, index: NeuronIndex) -> bool {
        (index as usize) < self.counts.len()
    }

    /// Error unless `index` falls inside the covered population
    pub fn ensure_covers(&self, index: NeuronIndex) -> WiringResult<()> {
        if self.covers(index) {
            Ok(())
        } else {
            Err(WiringError::IndexOutOfRange {
                counter: self.label,
                index,
                population_len: self.counts.len(),
            })
        }
    }

    /// Count for one node
    pub fn count(&self, index: NeuronIndex) -> u32 {
        self.counts.get(index as usize).copied().unwrap_or(0)
    }

    /// All counts, indexed by node
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Size of the covered population
    pub fn population_len(&self) -> usize {
        self.counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_accumulates() {
        let mut counter = DegreeCounter::new("outgoing", 3);
        counter.increment(1).unwrap();
        counter.increment(1).unwrap();
        counter.increment(2).unwrap();
        assert_eq!(counter.counts(), &[0, 2, 1]);
    }

    #[test]
    fn test_out_of_range_is_reported_with_label() {
        let mut counter = DegreeCounter::new("incoming", 2);
        let err = counter.increment(5).unwrap_err();
        match err {
            WiringError::IndexOutOfRange { counter, index, population_len } => {
                assert_eq!(counter, "incoming");
                assert_eq!(index, 5);
                assert_eq!(population_len, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
