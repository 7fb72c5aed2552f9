// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Rule seam between user connectivity expressions and the sweep.

User conditions, probabilities and multiplicities arrive here already
compiled into callables: a [`PairRule`] is evaluated once per candidate
pair and returns a [`PairDecision`]. The scalar half of a rule
([`PairRule::prepare`]) runs once per sweep for index-independent
precomputation.

Custom rules implement the trait directly or go through the [`rule_fn`]
closure adapter; [`AllPairs`] and [`OneToOne`] cover the common cases.
*/

use crate::types::{NeuronIndex, Population, WiringResult};

/// Outcome of evaluating a rule for one candidate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDecision {
    /// Absolute index of the source node
    pub pre_index: NeuronIndex,
    /// Absolute index of the target node
    pub post_index: NeuronIndex,
    /// Whether the pair is a connection candidate at all
    pub connect: bool,
    /// Number of parallel edges to create if the pair is accepted
    pub multiplicity: u32,
    /// Inclusion probability in `[0, 1]`; `1.0` bypasses the draw
    pub probability: f64,
}

impl PairDecision {
    /// Accept the pair: one edge, certain inclusion
    pub fn accept(pre_index: NeuronIndex, post_index: NeuronIndex) -> Self {
        Self {
            pre_index,
            post_index,
            connect: true,
            multiplicity: 1,
            probability: 1.0,
        }
    }

    /// Reject the pair; no draw is performed and no state is touched
    pub fn skip() -> Self {
        Self {
            pre_index: 0,
            post_index: 0,
            connect: false,
            multiplicity: 0,
            probability: 1.0,
        }
    }

    /// Gate this pair behind an inclusion probability
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Create `multiplicity` parallel edges instead of one
    pub fn with_multiplicity(mut self, multiplicity: u32) -> Self {
        self.multiplicity = multiplicity;
        self
    }
}

/// A compiled connectivity rule.
///
/// `prepare` is the scalar context: evaluated exactly once per sweep,
/// before any pair, and free of edge side effects. `evaluate` is the
/// vector context: called once per candidate pair with the loop indices
/// and the vectorization index (`vec_index = post_loop`, the index the
/// random source will be drawn with if the decision carries a
/// probability below one).
pub trait PairRule {
    /// Index-independent values precomputed once per sweep
    type Scalar;

    fn prepare(&mut self) -> WiringResult<Self::Scalar>;

    fn evaluate(
        &mut self,
        scalar: &Self::Scalar,
        pre_loop: u32,
        post_loop: u32,
        vec_index: u32,
    ) -> WiringResult<PairDecision>;
}

/// Closure adapter for rules without scalar state; see [`rule_fn`]
pub struct RuleFn<F> {
    f: F,
}

/// Wrap a closure `(pre_loop, post_loop, vec_index) -> PairDecision` as a
/// [`PairRule`].
pub fn rule_fn<F>(f: F) -> RuleFn<F>
where
    F: FnMut(u32, u32, u32) -> WiringResult<PairDecision>,
{
    RuleFn { f }
}

impl<F> PairRule for RuleFn<F>
where
    F: FnMut(u32, u32, u32) -> WiringResult<PairDecision>,
{
    type Scalar = ();

    fn prepare(&mut self) -> WiringResult<()> {
        Ok(())
    }

    fn evaluate(
        &mut self,
        _scalar: &(),
        pre_loop: u32,
        post_loop: u32,
        vec_index: u32,
    ) -> WiringResult<PairDecision> {
        (self.f)(pre_loop, post_loop, vec_index)
    }
}

/// Connect every pre node to every post node, optionally gated by a
/// probability and expanded to multiple parallel edges.
///
/// Loop indices are mapped through the populations, so subgroups yield
/// offset absolute indices.
#[derive(Debug, Clone, Copy)]
pub struct AllPairs {
    pre: Population,
    post: Population,
    probability: f64,
    multiplicity: u32,
}

impl AllPairs {
    pub fn new(pre: Population, post: Population) -> Self {
        Self {
            pre,
            post,
            probability: 1.0,
            multiplicity: 1,
        }
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_multiplicity(mut self, multiplicity: u32) -> Self {
        self.multiplicity = multiplicity;
        self
    }
}

impl PairRule for AllPairs {
    type Scalar = ();

    fn prepare(&mut self) -> WiringResult<()> {
        Ok(())
    }

    fn evaluate(
        &mut self,
        _scalar: &(),
        pre_loop: u32,
        post_loop: u32,
        _vec_index: u32,
    ) -> WiringResult<PairDecision> {
        Ok(
            PairDecision::accept(self.pre.absolute(pre_loop), self.post.absolute(post_loop))
                .with_probability(self.probability)
                .with_multiplicity(self.multiplicity),
        )
    }
}

/// Connect each pre node to the post node at the same loop index.
///
/// Requires equally sized populations to cover every node; extra nodes on
/// either side simply stay unconnected.
#[derive(Debug, Clone, Copy)]
pub struct OneToOne {
    pre: Population,
    post: Population,
}

impl OneToOne {
    pub fn new(pre: Population, post: Population) -> Self {
        Self { pre, post }
    }
}

impl PairRule for OneToOne {
    type Scalar = ();

    fn prepare(&mut self) -> WiringResult<()> {
        Ok(())
    }

    fn evaluate(
        &mut self,
        _scalar: &(),
        pre_loop: u32,
        post_loop: u32,
        _vec_index: u32,
    ) -> WiringResult<PairDecision> {
        if pre_loop == post_loop {
            Ok(PairDecision::accept(
                self.pre.absolute(pre_loop),
                self.post.absolute(post_loop),
            ))
        } else {
            Ok(PairDecision::skip())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_maps_through_subgroups() {
        let mut rule = AllPairs::new(Population::subgroup(100, 4), Population::new(4));
        let scalar = rule.prepare().unwrap();
        let decision = rule.evaluate(&scalar, 2, 3, 3).unwrap();
        assert_eq!(decision.pre_index, 102);
        assert_eq!(decision.post_index, 3);
        assert!(decision.connect);
    }

    #[test]
    fn test_one_to_one_skips_off_diagonal() {
        let mut rule = OneToOne::new(Population::new(3), Population::new(3));
        let scalar = rule.prepare().unwrap();
        assert!(rule.evaluate(&scalar, 1, 1, 1).unwrap().connect);
        assert!(!rule.evaluate(&scalar, 1, 2, 2).unwrap().connect);
    }

    #[test]
    fn test_rule_fn_adapter_passes_indices() {
        let mut rule = rule_fn(|pre_loop, post_loop, _vec| {
            Ok(PairDecision::accept(pre_loop * 10, post_loop * 10))
        });
        let scalar = rule.prepare().unwrap();
        let decision = rule.evaluate(&scalar, 2, 3, 3).unwrap();
        assert_eq!((decision.pre_index, decision.post_index), (20, 30));
    }
}
