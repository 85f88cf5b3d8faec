//! Similarity kernels used by the seeding and expansion phases.
//!
//! All four scores are ratios of integer counts, so none of them depends on
//! iteration order.

use crate::core::types::{Graph, NodeId};
use crate::detection::Community;
use std::collections::HashSet;

/// Common-neighbor count: NC(u, v) = |N(u) ∩ N(v)|.
pub fn common_neighbor_count<A>(graph: &Graph<A>, u: NodeId, v: NodeId) -> usize {
    let set_u: HashSet<NodeId> = graph.neighbors(u).collect();
    graph.neighbors(v).filter(|w| set_u.contains(w)).count()
}

/// Hybrid node fitness ω(v, C).
///
/// For every community member w adjacent to the candidate, combines a 1-hop
/// and a down-weighted 2-hop neighborhood similarity and keeps the maximum,
/// normalized by the candidate's degree:
///
/// ω(v, C) = max_w [ (|N(v)∩N(w)|+1)/(|N(w)|+1) + 0.1·(|N₂(v)∩N₂(w)|+1)/max(|N₂(w)|, 1) ] / deg(v)
///
/// Returns 0 when the candidate has no neighbor inside the community or no
/// edges at all.
pub fn node_fitness<A>(graph: &Graph<A>, candidate: NodeId, community: &Community) -> f64 {
    let neighbors: HashSet<NodeId> = graph.neighbors(candidate).collect();
    let adjacent_members: Vec<NodeId> = neighbors
        .iter()
        .filter(|v| community.contains(v))
        .copied()
        .collect();
    if adjacent_members.is_empty() {
        return 0.0;
    }
    let degree = graph.degree(candidate);
    if degree == 0 {
        return 0.0;
    }

    let hood2 = graph.two_hop(candidate);
    let mut best = 0.0_f64;
    for w in adjacent_members {
        let w_neighbors: HashSet<NodeId> = graph.neighbors(w).collect();
        let w_hood2 = graph.two_hop(w);

        let shared = neighbors.intersection(&w_neighbors).count();
        let first_order = (shared + 1) as f64 / (w_neighbors.len() + 1) as f64;

        let shared2 = hood2.intersection(&w_hood2).count();
        let second_order = (shared2 + 1) as f64 / w_hood2.len().max(1) as f64;

        best = best.max(first_order + 0.1 * second_order);
    }

    best / degree as f64
}

/// Influence F(v, S) = |N(v) ∩ S| / |S|, 0 when S is empty.
pub fn influence<A>(graph: &Graph<A>, candidate: NodeId, seed: &Community) -> f64 {
    if seed.is_empty() {
        return 0.0;
    }
    let inside = graph.neighbors(candidate).filter(|v| seed.contains(v)).count();
    inside as f64 / seed.len() as f64
}

/// Community fitness f(C) = k_in / (k_in + k_out)^alpha.
///
/// k_in and k_out are accumulated per endpoint over every member's
/// neighborhood, so each internal edge is counted twice and each cut edge
/// once. Returns 0 when the community has no internal edge.
pub fn community_fitness<A>(graph: &Graph<A>, community: &Community, alpha: f64) -> f64 {
    let mut k_in = 0usize;
    let mut k_out = 0usize;
    for &node in community {
        for neighbor in graph.neighbors(node) {
            if community.contains(&neighbor) {
                k_in += 1;
            } else {
                k_out += 1;
            }
        }
    }
    if k_in == 0 {
        return 0.0;
    }
    k_in as f64 / ((k_in + k_out) as f64).powf(alpha)
}
