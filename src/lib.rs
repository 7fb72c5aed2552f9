// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # syngen - Synapse Connectivity Generation
//!
//! Materialize sparse directed connectivity between two node populations:
//! a full Cartesian sweep evaluates a per-pair rule (condition,
//! probability, multiplicity), appends accepted edges to parallel index
//! arrays, keeps per-node degree counters consistent, and resizes all
//! registered per-synapse state arrays to the final edge count.
//!
//! ## Quick Start
//!
//! ```rust
//! use syngen::prelude::*;
//!
//! // 400-node group; excitatory head, inhibitory tail.
//! let group = Population::new(400);
//! let excitatory = Population::subgroup(0, 320);
//!
//! let mut connections = SynapticConnections::new(400, 400);
//! connections.register_dependent("weight", Box::new(DynamicArray::<f32>::new()))?;
//!
//! // Excitatory -> whole group at 2% probability, reproducibly.
//! let mut rule = AllPairs::new(excitatory, group).with_probability(0.02);
//! let random = SeededDraws::new(1234);
//! let added = connections.connect(&mut rule, &random, excitatory.len(), group.len())?;
//!
//! assert_eq!(connections.synapse_count() as u32, added);
//! # Ok::<(), syngen::WiringError>(())
//! ```
//!
//! ## Crates
//!
//! - [`syngen_wiring`] - generator core (sweep, edge store, counters,
//!   dependent registry, rule/random seams)
//! - [`syngen_structures`] - growable dynamic-array primitive
//! - `syngen-observability` (feature `observability`) - logging init

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use syngen_structures::{self as structures, DynamicArray};
pub use syngen_wiring::{
    self as wiring, generate_synapses, rule_fn, AllPairs, DegreeCounter, DependentArrays,
    EdgeStore, OneToOne, PairDecision, PairRule, Population, RandomSource, RuleFn, SeededDraws,
    SynapseDependent, SynapticConnections, WiringConfig, WiringError, WiringResult, WiringStats,
};

#[cfg(feature = "observability")]
pub use syngen_observability::{self as observability, init_logging, DebugFlags};

/// Common imports for building connectivity
pub mod prelude {
    pub use syngen_structures::DynamicArray;
    pub use syngen_wiring::{
        rule_fn, AllPairs, OneToOne, PairDecision, PairRule, Population, RandomSource,
        SeededDraws, SynapticConnections, WiringConfig, WiringError, WiringResult,
    };
}
