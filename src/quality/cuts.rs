/*!
# Per-Community Boundary Measures

Normalized node cut Ψ and conductance for a single community. Both respect
edge weights and both are "lower is better": 0 means the community has no
cut edge at all. Divisions by zero short-circuit to 0 instead of producing
NaN.
*/

use crate::core::types::{Graph, NodeId, NodeOrder};
use crate::detection::Community;

/// Incident edges of a node split by community membership, in ascending
/// neighbor label order: (weight into the community, weight out of it).
fn split_incident_weight<A>(
    graph: &Graph<A>,
    order: &NodeOrder,
    community: &Community,
    node: NodeId,
) -> (f64, f64) {
    let mut incident: Vec<(usize, f64, bool)> = graph
        .incident_edges(node)
        .map(|(v, w)| (order.rank(v), w, community.contains(&v)))
        .collect();
    incident.sort_by_key(|(rank, _, _)| *rank);

    let mut k_in = 0.0;
    let mut k_out = 0.0;
    for (_, weight, inside) in incident {
        if inside {
            k_in += weight;
        } else {
            k_out += weight;
        }
    }
    (k_in, k_out)
}

/// Normalized node cut Ψ(C) = (Σ_u k_in(u)·k_out(u)/d_u) / Σ_u k_in(u).
///
/// Returns 0 for an empty community or one without internal degree.
pub fn normalized_node_cut<A: Ord>(graph: &Graph<A>, community: &Community) -> f64 {
    if community.is_empty() {
        return 0.0;
    }
    let order = NodeOrder::of(graph);
    let members = order.sort(community.iter().copied());

    let mut numerator = 0.0;
    let mut total_internal = 0.0;
    for &u in &members {
        let (k_in, k_out) = split_incident_weight(graph, &order, community, u);
        let degree = k_in + k_out;
        if degree > 0.0 {
            numerator += k_in * k_out / degree;
        }
        total_internal += k_in;
    }

    if total_internal == 0.0 {
        return 0.0;
    }
    numerator / total_internal
}

/// Conductance(C) = k_out / (k_in + k_out), with k_in counting each internal
/// edge once and k_out each cut edge once.
///
/// Returns 0 when the community touches no edge at all.
pub fn conductance<A: Ord>(graph: &Graph<A>, community: &Community) -> f64 {
    if community.is_empty() {
        return 0.0;
    }
    let order = NodeOrder::of(graph);
    let members = order.sort(community.iter().copied());

    let mut k_in = 0.0;
    let mut k_out = 0.0;
    for &u in &members {
        let mut incident: Vec<(usize, f64, bool)> = graph
            .incident_edges(u)
            .map(|(v, w)| (order.rank(v), w, community.contains(&v)))
            .collect();
        incident.sort_by_key(|(rank, _, _)| *rank);
        for (rank, weight, inside) in incident {
            if inside {
                if order.rank(u) < rank {
                    k_in += weight;
                }
            } else {
                k_out += weight;
            }
        }
    }

    if k_in + k_out == 0.0 {
        return 0.0;
    }
    k_out / (k_in + k_out)
}
