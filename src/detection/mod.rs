/*!
# GLOD Community Detection

This module implements the GLOD (Global-Local Overlapping community
Detection) pipeline for undirected graphs: a seeding phase that grows rough
seeds around high-degree centers, an expansion phase that turns each seed
into a community under three coupled scoring functions, and a merge phase
that collapses heavily overlapping communities with an improved Jaccard
coefficient. The pipeline is fully deterministic: every tie is resolved by
ascending node label, and the output is identical for identical inputs.

# Examples

```rust
use glod::core::types::Graph;
use glod::detection::{GlodConfig, detect_communities};

let mut g = Graph::<&str>::new();
let a = g.add_node("a");
let b = g.add_node("b");
let c = g.add_node("c");
g.add_link(a, b);
g.add_link(b, c);
g.add_link(c, a);

let cover = detect_communities(&g, &GlodConfig::default()).unwrap();
assert_eq!(cover.communities.len(), 1);
```
*/

pub mod merge;
pub mod similarity;

mod expansion;
mod seeding;

use ordered_float::OrderedFloat;
use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use tracing::debug;

use crate::core::error::{GlodError, Result};
use crate::core::types::{Graph, NodeId, NodeOrder};
use crate::core::validation::validate_for_detection;
use crate::quality::cuts::{conductance, normalized_node_cut};
use crate::quality::modularity::{lazar_modularity, nicosia_modularity, shen_modularity};

/// A community: a set of node IDs. Communities in a cover may overlap.
pub type Community = BTreeSet<NodeId>;

/// Communities smaller than this are dropped after expansion.
const MIN_COMMUNITY_SIZE: usize = 3;

/// Tuning parameters for a detection run.
///
/// `seed` feeds the random shuffles of the relative-NMI comparison
/// ([`crate::quality::nmi::onmi`]); detection itself draws no random numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlodConfig {
    /// Community fitness exponent, in (0, 1].
    pub alpha: f64,
    /// Merge threshold for the improved Jaccard coefficient, in (0, 1].
    pub tau: f64,
    /// Seed for the rNMI shuffle covers.
    pub seed: u64,
}

impl Default for GlodConfig {
    fn default() -> Self {
        Self {
            alpha: 0.8,
            tau: 0.33,
            seed: 42,
        }
    }
}

impl GlodConfig {
    /// Validates the parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns `GlodError::InvalidArgument` when `alpha` or `tau` falls
    /// outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(GlodError::invalid_argument(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if !(self.tau > 0.0 && self.tau <= 1.0) {
            return Err(GlodError::invalid_argument(format!(
                "tau must be in (0, 1], got {}",
                self.tau
            )));
        }
        Ok(())
    }
}

/// Result of a detection run: the cover plus its quality metrics.
///
/// `psi` and `conductance` are per-community and aligned with `communities`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    pub communities: Vec<Community>,
    pub shen_eq: f64,
    pub lazar_mov: f64,
    pub nicosia_qov: f64,
    pub psi: Vec<f64>,
    pub conductance: Vec<f64>,
}

impl Cover {
    fn empty() -> Self {
        Self {
            communities: Vec::new(),
            shen_eq: 0.0,
            lazar_mov: 0.0,
            nicosia_qov: 0.0,
            psi: Vec::new(),
            conductance: Vec::new(),
        }
    }
}

/// Runs the full GLOD pipeline: seeding, expansion, merge, quality metrics.
///
/// A graph without nodes or without edges yields an empty cover with all
/// metrics at 0. Every returned community has at least 3 members and is a
/// subset of the graph's node set.
///
/// # Errors
///
/// Returns `GlodError::InvalidArgument` for out-of-range parameters and
/// `GlodError::InvalidGraph` for malformed graphs (self loop, non-positive
/// weight, parallel edge, duplicate label).
pub fn detect_communities<A: Ord + Debug>(graph: &Graph<A>, config: &GlodConfig) -> Result<Cover> {
    config.validate()?;
    validate_for_detection(graph)?;

    if graph.node_count() == 0 || graph.edge_count() == 0 {
        return Ok(Cover::empty());
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        alpha = config.alpha,
        tau = config.tau,
        "starting detection"
    );

    let order = NodeOrder::of(graph);
    let seeds = seeding::seeding_phase(graph, &order);

    let mut communities: Vec<Community> = Vec::new();
    let mut expanded: HashSet<Community> = HashSet::new();
    for seed in &seeds {
        if !expanded.insert(seed.members.clone()) {
            continue;
        }
        let community = expansion::expand_seed(graph, &order, &seed.members, config.alpha);
        if community.len() >= MIN_COMMUNITY_SIZE {
            debug!(
                center = seed.center.index(),
                size = community.len(),
                "community saved"
            );
            communities.push(community);
        } else {
            debug!(
                center = seed.center.index(),
                size = community.len(),
                "community rejected: too small"
            );
        }
    }

    let communities = merge::merge_communities(communities, config.tau);
    debug!(count = communities.len(), "merge phase complete");

    let psi: Vec<f64> = communities
        .iter()
        .map(|c| normalized_node_cut(graph, c))
        .collect();
    let cond: Vec<f64> = communities.iter().map(|c| conductance(graph, c)).collect();

    Ok(Cover {
        shen_eq: shen_modularity(graph, &communities),
        lazar_mov: lazar_modularity(graph, &communities),
        nicosia_qov: nicosia_modularity(graph, &communities),
        psi,
        conductance: cond,
        communities,
    })
}

/// Picks the highest-scoring candidate; ties go to the earliest entry.
///
/// Callers pass candidates in ascending label order, which turns "earliest"
/// into the "smallest label wins" rule used throughout the pipeline.
pub(crate) fn argmax_by(
    candidates: &[NodeId],
    mut score: impl FnMut(NodeId) -> f64,
) -> Option<(NodeId, f64)> {
    let mut best: Option<(NodeId, f64)> = None;
    for &candidate in candidates {
        let value = score(candidate);
        match best {
            Some((_, incumbent)) if OrderedFloat(value) <= OrderedFloat(incumbent) => {}
            _ => best = Some((candidate, value)),
        }
    }
    best
}
