//! Seeding phase: rough seed construction around high-degree centers.
//!
//! Every node starts in the unlabeled pool. The highest-degree pool member
//! becomes a center, a rough seed is grown around it by descending
//! common-neighbor count, and only the center leaves the pool, so later seeds
//! may reuse its members and overlap can emerge during expansion.

use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use tracing::debug;

use crate::core::types::{Graph, NodeId, NodeOrder};
use crate::detection::similarity::common_neighbor_count;
use crate::detection::{Community, argmax_by};

/// Hard cap on recorded candidate seeds.
const MAX_CANDIDATE_SEEDS: usize = 100;

/// Hard cap on pool iterations (each iteration records exactly one seed).
const MAX_SEEDING_ITERATIONS: usize = 1000;

/// A rough seed together with its expansion-priority score.
#[derive(Debug, Clone)]
pub(crate) struct RoughSeed {
    pub members: Community,
    pub score: f64,
    pub center: NodeId,
}

/// Runs the seeding phase and returns the rough seeds in descending score
/// order (insertion order on ties).
pub(crate) fn seeding_phase<A: Ord>(graph: &Graph<A>, order: &NodeOrder) -> Vec<RoughSeed> {
    let mut pool: BTreeSet<NodeId> = order.nodes().iter().copied().collect();
    let mut seeds: Vec<RoughSeed> = Vec::new();
    let mut iterations = 0;

    while !pool.is_empty() && iterations < MAX_SEEDING_ITERATIONS {
        iterations += 1;

        let candidates = order.sort(pool.iter().copied());
        let Some((center, _)) = argmax_by(&candidates, |v| graph.degree(v) as f64) else {
            break;
        };

        let members = grow_rough_seed(graph, order, center);
        let score = seed_score(graph, &members);
        debug!(
            iteration = iterations,
            center = center.index(),
            degree = graph.degree(center),
            seed_size = members.len(),
            score,
            "recorded rough seed"
        );
        seeds.push(RoughSeed {
            members,
            score,
            center,
        });

        pool.remove(&center);

        if seeds.len() >= MAX_CANDIDATE_SEEDS {
            debug!("candidate seed cap reached");
            break;
        }
    }

    seeds.sort_by_key(|s| Reverse(OrderedFloat(s.score)));
    debug!(count = seeds.len(), "seeding phase complete");
    seeds
}

/// Grows a rough seed from a center: repeatedly admits the neighbor with the
/// highest common-neighbor count against the center, until the best count
/// drops to zero.
fn grow_rough_seed<A: Ord>(graph: &Graph<A>, order: &NodeOrder, center: NodeId) -> Community {
    let mut seed: Community = BTreeSet::new();
    seed.insert(center);
    let neighbors = order.sort(graph.neighbors(center));

    loop {
        let available: Vec<NodeId> = neighbors
            .iter()
            .filter(|v| !seed.contains(v))
            .copied()
            .collect();
        let best = argmax_by(&available, |v| {
            common_neighbor_count(graph, center, v) as f64
        });
        match best {
            Some((v, nc)) if nc > 0.0 => {
                seed.insert(v);
            }
            _ => break,
        }
    }

    seed
}

/// Seed score: sum of member degrees + member count + internal edge count.
fn seed_score<A>(graph: &Graph<A>, seed: &Community) -> f64 {
    let degree_sum: usize = seed.iter().map(|&v| graph.degree(v)).sum();
    let members: Vec<NodeId> = seed.iter().copied().collect();
    let mut internal = 0usize;
    for (i, &u) in members.iter().enumerate() {
        for &v in &members[i + 1..] {
            if graph.contains_edge(u, v) {
                internal += 1;
            }
        }
    }
    (degree_sum + seed.len() + internal) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    // Triangle a-b-c plus an isolated edge d-e.
    fn fixture() -> (Graph<&'static str>, [NodeId; 5]) {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        let d = g.add_node("d");
        let e = g.add_node("e");
        g.add_link(a, b);
        g.add_link(b, c);
        g.add_link(c, a);
        g.add_link(d, e);
        (g, [a, b, c, d, e])
    }

    #[test]
    fn test_rough_seed_covers_triangle() {
        let (g, [a, b, c, _, _]) = fixture();
        let order = NodeOrder::of(&g);
        let seed = grow_rough_seed(&g, &order, a);
        let expected: Community = [a, b, c].into_iter().collect();
        assert_eq!(seed, expected);
    }

    #[test]
    fn test_rough_seed_stops_without_common_neighbors() {
        let (g, [_, _, _, d, _]) = fixture();
        let order = NodeOrder::of(&g);
        let seed = grow_rough_seed(&g, &order, d);
        assert_eq!(seed.len(), 1);
        assert!(seed.contains(&d));
    }

    #[test]
    fn test_seed_score() {
        let (g, [a, b, c, _, _]) = fixture();
        let seed: Community = [a, b, c].into_iter().collect();
        // degrees 2+2+2, three members, three internal edges
        assert_eq!(seed_score(&g, &seed), 12.0);
    }

    #[test]
    fn test_seeds_sorted_by_score() {
        let (g, _) = fixture();
        let order = NodeOrder::of(&g);
        let seeds = seeding_phase(&g, &order);
        assert_eq!(seeds.len(), g.node_count());
        for pair in seeds.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
