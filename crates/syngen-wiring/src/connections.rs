// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Owning structure for one synapse population.

[`SynapticConnections`] holds everything a generation call mutates: the
parallel edge arrays, the two degree counters, the registry of
per-synapse state arrays, and the total synapse count. A `&mut` borrow of
it is exactly the exclusive ownership the sweep requires; callers wanting
concurrent `connect` calls on the same structure must serialize them.
*/

use crate::config::WiringConfig;
use crate::degree::DegreeCounter;
use crate::edge_store::EdgeStore;
use crate::evaluator::PairRule;
use crate::generator::generate_synapses;
use crate::random::RandomSource;
use crate::registry::{DependentArrays, SynapseDependent};
use crate::types::{NeuronIndex, WiringResult};
use serde::Serialize;
use tracing::info;

/// Edge storage, degree counters and per-synapse state for one
/// pre-population → post-population projection.
///
/// State accumulates across [`connect`](Self::connect) calls: each sweep
/// appends to the existing edges and keeps counting on top of the
/// existing degrees.
#[derive(Debug)]
pub struct SynapticConnections {
    pub(crate) edges: EdgeStore,
    pub(crate) outgoing: DegreeCounter,
    pub(crate) incoming: DegreeCounter,
    pub(crate) dependents: DependentArrays,
    pub(crate) synapse_count: usize,
}

/// Serializable diagnostic snapshot of a connection structure
#[derive(Debug, Clone, Serialize)]
pub struct WiringStats {
    pub synapse_count: usize,
    pub pre_population_len: usize,
    pub post_population_len: usize,
    pub max_out_degree: u32,
    pub max_in_degree: u32,
    pub dependent_arrays: usize,
}

impl SynapticConnections {
    /// Empty structure between a pre population of `num_pre_total` nodes
    /// and a post population of `num_post_total` nodes. The counters are
    /// sized to these totals up front and never grow afterwards.
    pub fn new(num_pre_total: usize, num_post_total: usize) -> Self {
        Self {
            edges: EdgeStore::new(),
            outgoing: DegreeCounter::new("outgoing", num_pre_total),
            incoming: DegreeCounter::new("incoming", num_post_total),
            dependents: DependentArrays::new(),
            synapse_count: 0,
        }
    }

    /// Like [`new`](Self::new), with the edge store pre-sized from config
    pub fn with_config(
        num_pre_total: usize,
        num_post_total: usize,
        config: &WiringConfig,
    ) -> WiringResult<Self> {
        Ok(Self {
            edges: EdgeStore::with_capacity(config.edge_capacity)?,
            outgoing: DegreeCounter::new("outgoing", num_pre_total),
            incoming: DegreeCounter::new("incoming", num_post_total),
            dependents: DependentArrays::new(),
            synapse_count: 0,
        })
    }

    /// Run one connectivity sweep over `[0, num_pre) × [0, num_post)`.
    ///
    /// Returns the number of edges this sweep added. See
    /// [`generate_synapses`] for the enumeration and draw contract.
    pub fn connect<R: PairRule>(
        &mut self,
        rule: &mut R,
        random: &impl RandomSource,
        num_pre: u32,
        num_post: u32,
    ) -> WiringResult<u32> {
        generate_synapses(self, rule, random, num_pre, num_post)
    }

    /// Append an explicit edge list, bypassing rule evaluation and
    /// probability draws but applying the same bookkeeping: per edge both
    /// counters are incremented, and afterwards the dependent arrays are
    /// resized to the new edge count.
    pub fn connect_pairs(&mut self, pairs: &[(NeuronIndex, NeuronIndex)]) -> WiringResult<u32> {
        let start = self.edges.check_consistent()?;

        for &(pre, post) in pairs {
            self.outgoing.ensure_covers(pre)?;
            self.incoming.ensure_covers(post)?;
            self.outgoing.increment(pre)?;
            self.incoming.increment(post)?;
            self.edges.push(pre, post)?;
        }

        let newsize = self.edges.check_consistent()?;
        self.dependents.resize_all(newsize)?;
        self.synapse_count = newsize;

        let added = (newsize - start) as u32;
        info!(
            target: "syngen-wiring",
            added,
            total = newsize,
            "explicit edge list applied"
        );
        Ok(added)
    }

    /// Register a per-synapse state array under `name`.
    ///
    /// The array may start shorter than the current edge count; the next
    /// generation call brings it to the exact count.
    pub fn register_dependent(
        &mut self,
        name: impl Into<String>,
        array: Box<dyn SynapseDependent>,
    ) -> WiringResult<()> {
        self.dependents.register(name, array)
    }

    /// Borrow a registered per-synapse array downcast to its type
    pub fn dependent<T: SynapseDependent + 'static>(&self, name: &str) -> Option<&T> {
        self.dependents.get(name)
    }

    /// Mutably borrow a registered per-synapse array downcast to its type
    pub fn dependent_mut<T: SynapseDependent + 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.dependents.get_mut(name)
    }

    /// The edge arrays
    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    /// Out-degree counter over the pre population
    pub fn outgoing(&self) -> &DegreeCounter {
        &self.outgoing
    }

    /// In-degree counter over the post population
    pub fn incoming(&self) -> &DegreeCounter {
        &self.incoming
    }

    /// Total synapse count as of the last completed generation call
    pub fn synapse_count(&self) -> usize {
        self.synapse_count
    }

    /// Diagnostic snapshot for logging/serialization
    pub fn stats(&self) -> WiringStats {
        WiringStats {
            synapse_count: self.synapse_count,
            pre_population_len: self.outgoing.population_len(),
            post_population_len: self.incoming.population_len(),
            max_out_degree: self.outgoing.counts().iter().copied().max().unwrap_or(0),
            max_in_degree: self.incoming.counts().iter().copied().max().unwrap_or(0),
            dependent_arrays: self.dependents.len(),
        }
    }
}
