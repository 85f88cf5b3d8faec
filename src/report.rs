/*!
# Result Reports

Structured records for the downstream report and visualization layers. The
shapes here are the crate's canonical payload: per-community membership and
overlap listings with Ψ, plus the cover-level scalars, all rounded to 4
fractional digits. Rendering (tables, colours, spreadsheets) happens outside
the crate.
*/

use serde::Serialize;

use crate::core::error::{GlodError, Result};
use crate::core::types::{Graph, NodeMap};
use crate::detection::Cover;

/// One community of the final cover, with labels instead of node handles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityRecord<A> {
    /// 1-based index in expansion order.
    pub id: usize,
    pub size: usize,
    /// Member labels in ascending order.
    pub members: Vec<A>,
    /// Number of members shared with at least one other community.
    pub overlap_count: usize,
    /// The shared members, in ascending order.
    pub overlap_members: Vec<A>,
    /// Normalized node cut, rounded to 4 decimals.
    pub psi: f64,
}

/// The full report for a detection run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverReport<A> {
    pub num_communities: usize,
    pub shen_eq: f64,
    pub lazar_mov: f64,
    pub nicosia_qov: f64,
    pub avg_psi: f64,
    pub avg_conductance: f64,
    pub communities: Vec<CommunityRecord<A>>,
}

/// Rounds to 4 fractional digits for serialized payloads.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

impl<A: Clone + Ord> CoverReport<A> {
    /// Builds the report from a graph and a detection result.
    pub fn new(graph: &Graph<A>, cover: &Cover) -> Self {
        let mut counts: NodeMap<usize> = NodeMap::new();
        for community in &cover.communities {
            for &node in community {
                *counts.entry(node).or_insert(0) += 1;
            }
        }

        let communities = cover
            .communities
            .iter()
            .enumerate()
            .map(|(idx, community)| {
                let mut members: Vec<A> = community
                    .iter()
                    .filter_map(|&v| graph.node_attr(v))
                    .cloned()
                    .collect();
                members.sort();
                let mut overlap_members: Vec<A> = community
                    .iter()
                    .filter(|v| counts.get(v).copied().unwrap_or(0) > 1)
                    .filter_map(|&v| graph.node_attr(v))
                    .cloned()
                    .collect();
                overlap_members.sort();

                CommunityRecord {
                    id: idx + 1,
                    size: community.len(),
                    overlap_count: overlap_members.len(),
                    members,
                    overlap_members,
                    psi: round4(cover.psi[idx]),
                }
            })
            .collect();

        Self {
            num_communities: cover.communities.len(),
            shen_eq: round4(cover.shen_eq),
            lazar_mov: round4(cover.lazar_mov),
            nicosia_qov: round4(cover.nicosia_qov),
            avg_psi: round4(mean(&cover.psi)),
            avg_conductance: round4(mean(&cover.conductance)),
            communities,
        }
    }
}

impl<A: Serialize> CoverReport<A> {
    /// Serializes the report to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `GlodError::Serialization` when serde fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GlodError::serialization(e.to_string()))
    }
}
