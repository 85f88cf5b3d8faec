//! Expansion phase: OR-logic shell expansion with strict stopping.
//!
//! Each round scores every shell node with three functions (fitness gain,
//! node fitness ω, influence F) and keeps only the per-function argmax
//! candidates. The winner among those is admitted when its fitness gain
//! clears the threshold, or, early in the expansion, when ω or F is
//! exceptionally high despite a negative gain. Any other outcome terminates
//! the expansion.

use std::collections::HashSet;
use tracing::debug;

use crate::core::types::{Graph, NodeId, NodeMap, NodeOrder};
use crate::detection::similarity::{community_fitness, influence, node_fitness};
use crate::detection::{Community, argmax_by};

/// Minimum fitness gain for a regular admission.
const MIN_FITNESS_GAIN: f64 = 1e-4;

/// A community may not grow past this fraction of the graph.
const MAX_SIZE_RATIO: f64 = 0.5;

/// ω or F above this value can override a negative fitness gain.
const EXCEPTIONAL_SCORE: f64 = 0.8;

/// The override is only available during the first admissions.
const EXCEPTION_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy)]
struct CandidateScores {
    gain: f64,
    omega: f64,
    influence: f64,
}

impl CandidateScores {
    fn best(&self) -> f64 {
        self.gain.max(self.omega).max(self.influence)
    }

    /// Name of the scoring function that attained the candidate's best score.
    fn criterion(&self) -> &'static str {
        let best = self.best();
        if self.gain == best {
            "fitness"
        } else if self.omega == best {
            "omega"
        } else {
            "influence"
        }
    }
}

/// Size cap for a single community.
fn size_cap(node_count: usize) -> usize {
    ((node_count as f64 * MAX_SIZE_RATIO) as usize).max(3)
}

/// Shell of a community: nodes adjacent to a member but not members
/// themselves.
fn shell_nodes<A>(graph: &Graph<A>, community: &Community) -> HashSet<NodeId> {
    let mut shell = HashSet::new();
    for &member in community {
        for neighbor in graph.neighbors(member) {
            if !community.contains(&neighbor) {
                shell.insert(neighbor);
            }
        }
    }
    shell
}

/// Expands a rough seed into a community.
pub(crate) fn expand_seed<A: Ord>(
    graph: &Graph<A>,
    order: &NodeOrder,
    seed: &Community,
    alpha: f64,
) -> Community {
    let mut community = seed.clone();
    let cap = size_cap(graph.node_count());
    let mut admitted = 0usize;

    loop {
        let shell = shell_nodes(graph, &community);
        if shell.is_empty() {
            debug!(size = community.len(), "expansion stopped: empty shell");
            break;
        }
        if community.len() >= cap {
            debug!(size = community.len(), cap, "expansion stopped: size cap");
            break;
        }

        let current = community_fitness(graph, &community, alpha);
        let candidates = order.sort(shell);
        let scored: NodeMap<CandidateScores> = candidates
            .iter()
            .map(|&x| {
                let mut trial = community.clone();
                trial.insert(x);
                let scores = CandidateScores {
                    gain: community_fitness(graph, &trial, alpha) - current,
                    omega: node_fitness(graph, x, &community),
                    influence: influence(graph, x, &community),
                };
                (x, scores)
            })
            .collect();

        // One argmax per scoring function, then the winner among those by its
        // own best score. Candidates are in ascending label order, so every
        // tie goes to the smallest label.
        let champions: HashSet<NodeId> = [
            argmax_by(&candidates, |x| scored[&x].gain),
            argmax_by(&candidates, |x| scored[&x].omega),
            argmax_by(&candidates, |x| scored[&x].influence),
        ]
        .into_iter()
        .flatten()
        .map(|(x, _)| x)
        .collect();
        let champions = order.sort(champions);
        let Some((best, _)) = argmax_by(&champions, |x| scored[&x].best()) else {
            break;
        };
        let scores = scored[&best];

        let admit = if scores.gain >= MIN_FITNESS_GAIN {
            true
        } else {
            scores.gain < 0.0
                && admitted < EXCEPTION_WINDOW
                && (scores.omega > EXCEPTIONAL_SCORE || scores.influence > EXCEPTIONAL_SCORE)
        };
        if !admit {
            debug!(
                gain = scores.gain,
                omega = scores.omega,
                influence = scores.influence,
                "expansion stopped: no admissible candidate"
            );
            break;
        }

        community.insert(best);
        admitted += 1;
        debug!(
            node = best.index(),
            criterion = scores.criterion(),
            gain = scores.gain,
            size = community.len(),
            "admitted node"
        );
    }

    community
}
