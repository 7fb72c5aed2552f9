// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The connectivity sweep.

One call visits the full Cartesian product of the two iteration domains,
asks the rule about every candidate pair, and appends the accepted edges.
The enumeration order (pre outer, post inner) and the draw-index scheme
(`vec_index = post_loop`) are observable contract: they decide which draw
gates which pair, and therefore what a seeded run reproduces.

Failures propagate unrecovered. Edges appended before a failing pair
remain appended; there is no rollback and no retry.
*/

use crate::connections::SynapticConnections;
use crate::evaluator::PairRule;
use crate::random::RandomSource;
use crate::types::{WiringError, WiringResult};
use tracing::{debug, info};

/// Sweep `[0, num_pre) × [0, num_post)` once, appending accepted edges to
/// `connections`. Returns the number of edges added by this sweep.
///
/// The degree counters must already be sized to the full populations the
/// rule's absolute indices address; they are incremented, never grown.
pub fn generate_synapses<R: PairRule>(
    connections: &mut SynapticConnections,
    rule: &mut R,
    random: &impl RandomSource,
    num_pre: u32,
    num_post: u32,
) -> WiringResult<u32> {
    // A prior corrupt state must fail loudly before anything is appended.
    let start = connections.edges.check_consistent()?;

    // Scalar context: once per sweep, before any pair.
    let scalar = rule.prepare()?;

    for pre_loop in 0..num_pre {
        for post_loop in 0..num_post {
            let vec_index = post_loop;
            let decision = rule.evaluate(&scalar, pre_loop, post_loop, vec_index)?;

            if !decision.connect {
                continue;
            }

            let p = decision.probability;
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(WiringError::Evaluation {
                    pre_loop,
                    post_loop,
                    reason: format!("probability {p} outside [0, 1]"),
                });
            }

            // Both indices are validated before any counter or array is
            // touched for this pair, so a malformed rule result cannot
            // leave counters and edge arrays disagreeing.
            connections.outgoing.ensure_covers(decision.pre_index)?;
            connections.incoming.ensure_covers(decision.post_index)?;

            // p == 1.0 consumes no draw; at most one draw per pair, and
            // it gates all repetitions together.
            if p < 1.0 && random.draw(vec_index) >= p {
                continue;
            }

            for _repetition in 0..decision.multiplicity {
                connections.outgoing.increment(decision.pre_index)?;
                connections.incoming.increment(decision.post_index)?;
                connections.edges.push(decision.pre_index, decision.post_index)?;
            }
        }
    }

    let newsize = connections.edges.check_consistent()?;
    connections.dependents.resize_all(newsize)?;
    connections.synapse_count = newsize;
    debug!(
        target: "syngen-wiring",
        newsize,
        dependents = connections.dependents.len(),
        "resized dependent arrays"
    );

    let added = (newsize - start) as u32;
    info!(
        target: "syngen-wiring",
        added,
        total = newsize,
        num_pre,
        num_post,
        "connectivity sweep complete"
    );
    Ok(added)
}
