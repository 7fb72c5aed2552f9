// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Random source for probability gating.

The sweep draws at most once per candidate pair, indexed by the
vectorization index. A [`RandomSource`] must be a pure function of that
index for a given seed so that two runs over the same populations see the
same draws at the same pairs.
*/

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-index uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Draw the value associated with `vec_index`. Must return the same
    /// value for the same index for the lifetime of the source.
    fn draw(&self, vec_index: u32) -> f64;
}

/// Deterministic [`RandomSource`] derived from a single seed.
///
/// Each index gets its own generator state, so draws are independent of
/// sweep order and of how many draws other pairs consumed.
#[derive(Debug, Clone, Copy)]
pub struct SeededDraws {
    seed: u64,
}

impl SeededDraws {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RandomSource for SeededDraws {
    fn draw(&self, vec_index: u32) -> f64 {
        // Weyl-sequence mix keeps distinct (seed, index) pairs from
        // colliding before the per-index state is expanded.
        let mixed = self
            .seed
            .wrapping_add((u64::from(vec_index) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        StdRng::seed_from_u64(mixed).gen::<f64>()
    }
}
