// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# syngen-wiring

Connectivity generator core: given a pre and a post population, sweep the
full Cartesian product of candidate pairs, ask a user-supplied rule whether
(and how many times) each pair connects, and materialize the accepted edges
into parallel index arrays with per-node degree counters.

## Architecture

```text
SynapticConnections::connect(rule, random, num_pre, num_post)
    ↓
generator::generate_synapses
    1. rule.prepare()                     (scalar context, once)
    2. for pre_loop { for post_loop {     (pre outer, post inner)
           rule.evaluate(...)             (per-pair decision)
           probability gate               (one draw max per pair)
           append multiplicity edges      (counters + parallel arrays)
       }}
    3. resize dependent arrays to the new edge count
```

The sweep order and the draw-index scheme (`vec_index = post_loop`) are
part of the observable contract: with a seeded [`RandomSource`] two runs
produce identical edge arrays in identical order.

## Persistence across calls

The edge store and degree counters accumulate across `connect` calls; a
sweep appends from the current edge count rather than resetting.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod connections;
pub mod degree;
pub mod edge_store;
pub mod evaluator;
pub mod generator;
pub mod random;
pub mod registry;
pub mod types;

pub use config::WiringConfig;
pub use connections::{SynapticConnections, WiringStats};
pub use degree::DegreeCounter;
pub use edge_store::EdgeStore;
pub use evaluator::{rule_fn, AllPairs, OneToOne, PairDecision, PairRule, RuleFn};
pub use generator::generate_synapses;
pub use random::{RandomSource, SeededDraws};
pub use registry::{DependentArrays, SynapseDependent};
pub use types::{NeuronIndex, Population, WiringError, WiringResult};
