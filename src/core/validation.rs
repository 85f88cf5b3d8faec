/*!
# Graph Validation Utilities

This module provides the precondition checks applied at the detection
boundary. The algorithm's contract assumes an undirected, loop-free simple
graph with positive edge weights and unique node labels; these utilities
centralize the checks so callers get a single descriptive `InvalidGraph`
error instead of undefined behavior downstream.
*/

use std::collections::HashSet;
use std::fmt::Debug;

use crate::core::error::{GlodError, Result};
use crate::core::types::Graph;

/// Returns true if the graph contains no nodes.
pub fn is_empty<A>(graph: &Graph<A>) -> bool {
    graph.is_empty()
}

/// Returns true if the graph has an edge from a node to itself.
pub fn has_self_loops<A>(graph: &Graph<A>) -> bool {
    graph.edges().any(|(u, v, _)| u == v)
}

/// Returns true if the graph has any edge with weight <= 0.
pub fn has_nonpositive_weights<A>(graph: &Graph<A>) -> bool {
    graph.edges().any(|(_, _, w)| *w <= 0.0)
}

/// Returns true if two edges connect the same pair of nodes.
pub fn has_parallel_edges<A>(graph: &Graph<A>) -> bool {
    let mut seen = HashSet::new();
    graph.edges().any(|(u, v, _)| {
        let key = if u <= v { (u, v) } else { (v, u) };
        !seen.insert(key)
    })
}

/// Returns true if two nodes carry the same label.
pub fn has_duplicate_labels<A: Ord>(graph: &Graph<A>) -> bool {
    let mut labels: Vec<&A> = graph.nodes().map(|(_, attr)| attr).collect();
    labels.sort();
    labels.windows(2).any(|w| w[0] == w[1])
}

/// Validates the preconditions for running community detection.
///
/// Checks that the graph is loop-free, has no non-positive weights, no
/// parallel edges and no duplicate labels. The returned error names the
/// offending vertex.
///
/// # Errors
///
/// Returns `GlodError::InvalidGraph` when any precondition fails.
pub fn validate_for_detection<A: Ord + Debug>(graph: &Graph<A>) -> Result<()> {
    for (u, v, w) in graph.edges() {
        if u == v {
            return Err(GlodError::invalid_graph(format!(
                "self loop at node {:?}",
                graph.node_attr(u)
            )));
        }
        if *w <= 0.0 {
            return Err(GlodError::invalid_graph(format!(
                "non-positive weight {} on edge {:?} -- {:?}",
                w,
                graph.node_attr(u),
                graph.node_attr(v)
            )));
        }
    }

    let mut seen = HashSet::new();
    for (u, v, _) in graph.edges() {
        let key = if u <= v { (u, v) } else { (v, u) };
        if !seen.insert(key) {
            return Err(GlodError::invalid_graph(format!(
                "parallel edge {:?} -- {:?}",
                graph.node_attr(u),
                graph.node_attr(v)
            )));
        }
    }

    let mut labels: Vec<&A> = graph.nodes().map(|(_, attr)| attr).collect();
    labels.sort();
    if let Some(w) = labels.windows(2).find(|w| w[0] == w[1]) {
        return Err(GlodError::invalid_graph(format!(
            "duplicate node label {:?}",
            w[0]
        )));
    }

    Ok(())
}
