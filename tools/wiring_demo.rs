// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Random-network wiring demo
//!
//! Reproduces the classic benchmark topology: a 4000-neuron group split
//! into an excitatory 80% and an inhibitory 20%, each projecting to the
//! whole group with 2% connection probability. Run with `RUST_LOG=debug`
//! for the per-sweep resize logs.

use anyhow::Result;
use syngen::prelude::*;
use syngen::{init_logging, DebugFlags};
use tracing::info;

const GROUP_SIZE: u32 = 4000;
const EXCITATORY: u32 = 3200;

fn build_projection(
    name: &str,
    pre: Population,
    post: Population,
    weight: f32,
    config: &WiringConfig,
) -> Result<SynapticConnections> {
    let mut connections = SynapticConnections::with_config(
        GROUP_SIZE as usize,
        GROUP_SIZE as usize,
        config,
    )?;
    connections.register_dependent("weight", Box::new(DynamicArray::<f32>::new()))?;

    let mut rule = AllPairs::new(pre, post).with_probability(0.02);
    let random = SeededDraws::new(config.draw_seed);
    let added = connections.connect(&mut rule, &random, pre.len(), post.len())?;

    // Uniform initial weight for every synapse the sweep created.
    let weights = connections
        .dependent_mut::<DynamicArray<f32>>("weight")
        .ok_or_else(|| anyhow::anyhow!("weight array missing after registration"))?;
    weights.as_mut_slice().iter_mut().for_each(|w| *w = weight);

    let stats = serde_json::to_string(&connections.stats())?;
    info!(
        target: "wiring_demo",
        projection = name,
        added,
        stats = %stats,
        "projection wired"
    );
    Ok(connections)
}

fn main() -> Result<()> {
    init_logging(&DebugFlags::default())?;

    let config = WiringConfig {
        edge_capacity: 300_000,
        draw_seed: 20_240_101,
    };

    let group = Population::new(GROUP_SIZE);
    let excitatory = Population::subgroup(0, EXCITATORY);
    let inhibitory = Population::subgroup(EXCITATORY, GROUP_SIZE - EXCITATORY);

    let ce = build_projection("excitatory", excitatory, group, 0.6, &config)?;
    let ci = build_projection("inhibitory", inhibitory, group, 6.7, &config)?;

    info!(
        target: "wiring_demo",
        excitatory_synapses = ce.synapse_count(),
        inhibitory_synapses = ci.synapse_count(),
        "network construction complete"
    );
    Ok(())
}
