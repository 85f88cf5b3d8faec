/*!
# Property-Based Tests

Verifies the universal invariants of the detection pipeline over randomly
generated simple graphs: community size and membership bounds, determinism,
merge idempotence, and metric ranges.
*/

use proptest::prelude::*;
use std::collections::HashSet;

use glod::core::types::Graph;
use glod::detection::merge::merge_communities;
use glod::detection::{GlodConfig, detect_communities};

/// Builds a loop-free simple graph with `n` nodes from raw index pairs;
/// self loops and duplicate pairs are dropped.
fn build_graph(n: usize, raw_edges: &[(usize, usize)]) -> Graph<u32> {
    let mut g = Graph::new();
    let ids: Vec<_> = (0..n).map(|i| g.add_node(i as u32)).collect();
    let mut seen = HashSet::new();
    for &(u, v) in raw_edges {
        let (u, v) = (u % n, v % n);
        if u == v {
            continue;
        }
        let key = (u.min(v), u.max(v));
        if seen.insert(key) {
            g.add_link(ids[u], ids[v]);
        }
    }
    g
}

fn graph_size() -> impl Strategy<Value = usize> {
    4usize..20usize
}

fn edge_pairs() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..20, 0usize..20), 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every community has at least 3 members, all of them nodes
    /// of the input graph.
    #[test]
    fn prop_communities_are_valid_subsets(
        n in graph_size(),
        edges in edge_pairs(),
    ) {
        let graph = build_graph(n, &edges);
        let cover = detect_communities(&graph, &GlodConfig::default())
            .expect("detection should succeed on a simple graph");
        for community in &cover.communities {
            prop_assert!(community.len() >= 3);
            for &node in community {
                prop_assert!(graph.node_attr(node).is_some());
            }
        }
    }

    /// Property: identical inputs produce identical covers and metrics.
    #[test]
    fn prop_detection_is_deterministic(
        n in graph_size(),
        edges in edge_pairs(),
        alpha in 0.1f64..=1.0,
        tau in 0.05f64..=1.0,
    ) {
        let graph = build_graph(n, &edges);
        let config = GlodConfig { alpha, tau, seed: 42 };
        let first = detect_communities(&graph, &config).expect("first run");
        let second = detect_communities(&graph, &config).expect("second run");
        prop_assert_eq!(first, second);
    }

    /// Property: the returned cover is a merge fixed point; re-merging with
    /// the same threshold changes nothing.
    #[test]
    fn prop_merge_is_idempotent(
        n in graph_size(),
        edges in edge_pairs(),
        tau in 0.05f64..=1.0,
    ) {
        let graph = build_graph(n, &edges);
        let config = GlodConfig { tau, ..Default::default() };
        let cover = detect_communities(&graph, &config).expect("detection");
        let remerged = merge_communities(cover.communities.clone(), tau);
        prop_assert_eq!(remerged, cover.communities);
    }

    /// Property: Ψ is non-negative and conductance stays in [0, 1].
    #[test]
    fn prop_metric_ranges(
        n in graph_size(),
        edges in edge_pairs(),
    ) {
        let graph = build_graph(n, &edges);
        let cover = detect_communities(&graph, &GlodConfig::default())
            .expect("detection");
        for &psi in &cover.psi {
            prop_assert!(psi >= 0.0);
        }
        for &cond in &cover.conductance {
            prop_assert!((0.0..=1.0).contains(&cond));
        }
    }
}
