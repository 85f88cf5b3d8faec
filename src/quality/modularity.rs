/*!
# Overlapping Modularity Measures

Cover-level quality scalars for overlapping community structures: Shen's
extended modularity EQ, Lázár's M^ov and Nicosia's Q_ov (undirected,
non-fuzzy adaptation). All three return 0 for an empty cover or a graph
without edges, and every division by zero short-circuits to 0.

Members of a community are always visited in ascending label order so the
floating-point sums are reproducible across runs and platforms.
*/

use crate::core::types::{Graph, NodeId, NodeMap, NodeOrder};
use crate::detection::Community;

/// Number of communities containing each node.
fn membership_counts(communities: &[Community]) -> NodeMap<usize> {
    let mut counts = NodeMap::new();
    for community in communities {
        for &node in community {
            *counts.entry(node).or_insert(0) += 1;
        }
    }
    counts
}

/// O_v with the zero case mapped to 1 so it is safe as a divisor.
fn overlap_of(counts: &NodeMap<usize>, node: NodeId) -> f64 {
    counts.get(&node).copied().unwrap_or(0).max(1) as f64
}

/// Shen's extended modularity EQ.
///
/// EQ = (1/2m) Σ_C Σ_{u∈C} Σ_{v∈C} (1/(O_u·O_v)) (A_uv − d_u·d_v/2m)
pub fn shen_modularity<A: Ord>(graph: &Graph<A>, communities: &[Community]) -> f64 {
    let m = graph.edge_count();
    if m == 0 || communities.is_empty() {
        return 0.0;
    }
    let two_m = (2 * m) as f64;
    let order = NodeOrder::of(graph);
    let counts = membership_counts(communities);

    let mut total = 0.0;
    for community in communities {
        let members = order.sort(community.iter().copied());
        for &u in &members {
            let d_u = graph.degree(u) as f64;
            let o_u = overlap_of(&counts, u);
            for &v in &members {
                let d_v = graph.degree(v) as f64;
                let o_v = overlap_of(&counts, v);
                let a_uv = if graph.contains_edge(u, v) { 1.0 } else { 0.0 };
                total += (a_uv - d_u * d_v / two_m) / (o_u * o_v);
            }
        }
    }
    total / two_m
}

/// Lázár's overlapping modularity M^ov.
///
/// Per community: the mean over members of (k_in − k_out)/(d·O), scaled by
/// the community's internal density. Communities with fewer than 2 members
/// contribute 0, while the final average still divides by the total number
/// of communities.
pub fn lazar_modularity<A: Ord>(graph: &Graph<A>, communities: &[Community]) -> f64 {
    let m = graph.edge_count();
    if m == 0 || communities.is_empty() {
        return 0.0;
    }
    let order = NodeOrder::of(graph);
    let counts = membership_counts(communities);

    let mut total = 0.0;
    for community in communities {
        let size = community.len();
        if size < 2 {
            continue;
        }
        let members = order.sort(community.iter().copied());

        let mut internal = 0usize;
        for (i, &u) in members.iter().enumerate() {
            for &v in &members[i + 1..] {
                if graph.contains_edge(u, v) {
                    internal += 1;
                }
            }
        }
        let possible = (size * (size - 1) / 2) as f64;
        let density = internal as f64 / possible;

        let mut contributions = 0.0;
        for &u in &members {
            let degree = graph.degree(u);
            if degree == 0 {
                continue;
            }
            let k_in = graph.neighbors(u).filter(|v| community.contains(v)).count();
            let k_out = degree - k_in;
            contributions +=
                (k_in as f64 - k_out as f64) / (degree as f64 * overlap_of(&counts, u));
        }

        total += contributions / size as f64 * density;
    }
    total / communities.len() as f64
}

/// Nicosia's overlapping modularity Q_ov, undirected adaptation with the
/// non-fuzzy belonging factor 1/O_v.
///
/// Q_ov = (1/2m) Σ_C Σ_{u∈C} Σ_{v∈C} (1/O_u)(1/O_v) (A_uv − d_u·d_v/2m)
pub fn nicosia_modularity<A: Ord>(graph: &Graph<A>, communities: &[Community]) -> f64 {
    let m = graph.edge_count();
    if m == 0 || communities.is_empty() {
        return 0.0;
    }
    let two_m = (2 * m) as f64;
    let order = NodeOrder::of(graph);
    let counts = membership_counts(communities);

    let mut total = 0.0;
    for community in communities {
        let members = order.sort(community.iter().copied());
        for &u in &members {
            let d_u = graph.degree(u) as f64;
            let belonging_u = 1.0 / overlap_of(&counts, u);
            for &v in &members {
                let d_v = graph.degree(v) as f64;
                let belonging_v = 1.0 / overlap_of(&counts, v);
                let a_uv = if graph.contains_edge(u, v) { 1.0 } else { 0.0 };
                total += belonging_u * belonging_v * (a_uv - d_u * d_v / two_m);
            }
        }
    }
    total / two_m
}
