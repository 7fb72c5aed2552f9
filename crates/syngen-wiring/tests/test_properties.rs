// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Property-based checks for the sweep invariants.

Arbitrary per-pair decision tables (condition, multiplicity, probability)
must never break the bookkeeping: parallel arrays stay equal length,
degree counters match edge occurrences exactly, dependent arrays track
the edge count, and a re-run under the same seed reproduces the same
edges.
*/

use proptest::prelude::*;
use syngen_structures::DynamicArray;
use syngen_wiring::{rule_fn, PairDecision, SeededDraws, SynapticConnections};

const PROBABILITIES: [f64; 3] = [0.0, 0.5, 1.0];

fn run_table_sweep(
    num_pre: u32,
    num_post: u32,
    seed: u64,
    table: &[(bool, u32, usize)],
) -> SynapticConnections {
    let mut connections = SynapticConnections::new(num_pre as usize, num_post as usize);
    connections
        .register_dependent("weight", Box::new(DynamicArray::<f32>::new()))
        .unwrap();

    let table = table.to_vec();
    let mut rule = rule_fn(move |pre_loop, post_loop, _vec_index| {
        let k = (pre_loop * num_post + post_loop) as usize % table.len();
        let (connect, multiplicity, p_select) = table[k];
        Ok(if connect {
            PairDecision::accept(pre_loop, post_loop)
                .with_probability(PROBABILITIES[p_select])
                .with_multiplicity(multiplicity)
        } else {
            PairDecision::skip()
        })
    });

    connections
        .connect(&mut rule, &SeededDraws::new(seed), num_pre, num_post)
        .unwrap();
    connections
}

proptest! {
    #[test]
    fn degree_counters_match_edge_occurrences(
        num_pre in 1u32..8,
        num_post in 1u32..8,
        seed in any::<u64>(),
        table in prop::collection::vec((any::<bool>(), 0u32..4, 0usize..3), 1..64),
    ) {
        let connections = run_table_sweep(num_pre, num_post, seed, &table);

        let newsize = connections.edges().check_consistent().unwrap();
        prop_assert_eq!(connections.synapse_count(), newsize);

        let weights: &DynamicArray<f32> = connections.dependent("weight").unwrap();
        prop_assert_eq!(weights.len(), newsize);

        for node in 0..num_pre {
            let occurrences = connections
                .edges()
                .pre_indices()
                .iter()
                .filter(|&&i| i == node)
                .count();
            prop_assert_eq!(connections.outgoing().count(node) as usize, occurrences);
        }
        for node in 0..num_post {
            let occurrences = connections
                .edges()
                .post_indices()
                .iter()
                .filter(|&&i| i == node)
                .count();
            prop_assert_eq!(connections.incoming().count(node) as usize, occurrences);
        }
    }

    #[test]
    fn sweeps_are_reproducible_under_a_seed(
        num_pre in 1u32..8,
        num_post in 1u32..8,
        seed in any::<u64>(),
        table in prop::collection::vec((any::<bool>(), 0u32..4, 0usize..3), 1..64),
    ) {
        let a = run_table_sweep(num_pre, num_post, seed, &table);
        let b = run_table_sweep(num_pre, num_post, seed, &table);
        prop_assert_eq!(a.edges().pre_indices(), b.edges().pre_indices());
        prop_assert_eq!(a.edges().post_indices(), b.edges().post_indices());
    }
}
