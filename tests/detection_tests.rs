// tests/detection_tests.rs

use glod::core::types::{Graph, NodeId};
use glod::detection::{Community, GlodConfig, detect_communities};

// Collect a community's labels in ascending order.
fn labels(graph: &Graph<&'static str>, community: &Community) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = community
        .iter()
        .map(|&v| *graph.node_attr(v).unwrap())
        .collect();
    out.sort();
    out
}

// Two disjoint triangles: a-b-c and d-e-f.
fn two_triangles() -> Graph<&'static str> {
    let mut g = Graph::new();
    let ids: Vec<NodeId> = ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|s| g.add_node(*s))
        .collect();
    g.add_link(ids[0], ids[1]);
    g.add_link(ids[1], ids[2]);
    g.add_link(ids[2], ids[0]);
    g.add_link(ids[3], ids[4]);
    g.add_link(ids[4], ids[5]);
    g.add_link(ids[5], ids[3]);
    g
}

// Two triangles sharing the articulation vertex x.
fn bowtie() -> Graph<&'static str> {
    let mut g = Graph::new();
    let x = g.add_node("x");
    let a = g.add_node("a");
    let b = g.add_node("b");
    let c = g.add_node("c");
    let d = g.add_node("d");
    g.add_link(x, a);
    g.add_link(x, b);
    g.add_link(a, b);
    g.add_link(x, c);
    g.add_link(x, d);
    g.add_link(c, d);
    g
}

// A linear path 1-2-3-4-5-6.
fn path_of_six() -> Graph<&'static str> {
    let mut g = Graph::new();
    let ids: Vec<NodeId> = ["1", "2", "3", "4", "5", "6"]
        .iter()
        .map(|s| g.add_node(*s))
        .collect();
    for pair in ids.windows(2) {
        g.add_link(pair[0], pair[1]);
    }
    g
}

fn k4() -> Graph<&'static str> {
    let mut g = Graph::new();
    let ids: Vec<NodeId> = ["a", "b", "c", "d"].iter().map(|s| g.add_node(*s)).collect();
    for i in 0..4 {
        for j in (i + 1)..4 {
            g.add_link(ids[i], ids[j]);
        }
    }
    g
}

#[test]
fn test_two_disjoint_triangles() {
    let g = two_triangles();
    let cover = detect_communities(&g, &GlodConfig::default()).unwrap();

    let found: Vec<Vec<&str>> = cover.communities.iter().map(|c| labels(&g, c)).collect();
    assert_eq!(found.len(), 2);
    assert!(found.contains(&vec!["a", "b", "c"]));
    assert!(found.contains(&vec!["d", "e", "f"]));

    assert!((cover.shen_eq - 0.5).abs() < 1e-9);
    assert!((cover.nicosia_qov - 0.5).abs() < 1e-9);
    // Both triangles have no cut edges.
    assert!(cover.psi.iter().all(|&p| p == 0.0));
    assert!(cover.conductance.iter().all(|&c| c == 0.0));
}

#[test]
fn test_bowtie_merges_at_default_threshold() {
    let g = bowtie();
    let cover = detect_communities(&g, &GlodConfig::default()).unwrap();
    assert_eq!(cover.communities.len(), 1);
    assert_eq!(labels(&g, &cover.communities[0]), vec!["a", "b", "c", "d", "x"]);
}

#[test]
fn test_bowtie_overlaps_at_high_threshold() {
    let g = bowtie();
    let config = GlodConfig {
        tau: 0.7,
        ..Default::default()
    };
    let cover = detect_communities(&g, &config).unwrap();
    assert!(cover.communities.len() > 1);
    // The articulation vertex sits in every community.
    let x_memberships = cover
        .communities
        .iter()
        .filter(|c| labels(&g, c).contains(&"x"))
        .count();
    assert_eq!(x_memberships, cover.communities.len());
}

#[test]
fn test_path_of_six_does_not_crash() {
    let g = path_of_six();
    let cover = detect_communities(&g, &GlodConfig::default()).unwrap();
    for community in &cover.communities {
        assert!(community.len() >= 3);
        assert!(community.iter().all(|&v| g.node_attr(v).is_some()));
    }
}

#[test]
fn test_k4_single_community() {
    let g = k4();
    let cover = detect_communities(&g, &GlodConfig::default()).unwrap();
    assert_eq!(cover.communities.len(), 1);
    assert_eq!(labels(&g, &cover.communities[0]), vec!["a", "b", "c", "d"]);
    // No cut edges at all.
    assert_eq!(cover.psi, vec![0.0]);
    assert_eq!(cover.conductance, vec![0.0]);
    // Observed and expected edge counts cancel over the whole clique.
    assert!(cover.shen_eq.abs() < 1e-9);
}

#[test]
fn test_reproducibility() {
    let g = bowtie();
    let config = GlodConfig::default();
    let first = detect_communities(&g, &config).unwrap();
    let second = detect_communities(&g, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_seed_does_not_affect_detection() {
    let g = two_triangles();
    let base = detect_communities(&g, &GlodConfig::default()).unwrap();
    let reseeded = detect_communities(
        &g,
        &GlodConfig {
            seed: 7,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(base, reseeded);
}

#[test]
fn test_rejects_malformed_graph() {
    let mut g = Graph::new();
    let a = g.add_node("a");
    g.add_link(a, a);
    assert!(detect_communities(&g, &GlodConfig::default()).is_err());
}

#[test]
fn test_rejects_bad_parameters() {
    let g = two_triangles();
    let config = GlodConfig {
        alpha: 1.5,
        ..Default::default()
    };
    assert!(detect_communities(&g, &config).is_err());
}
