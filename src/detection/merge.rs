//! Merge phase: pairwise overlap-weighted Jaccard merge to a fixed point.

use tracing::debug;

use crate::detection::Community;

/// Improved Jaccard coefficient between two communities.
///
/// Every overlapping node contributes 1/|Ci ∪ Cj|, which collapses to
/// |Ci ∩ Cj| / |Ci ∪ Cj|. Returns 0 when the communities are disjoint.
pub fn improved_jaccard(a: &Community, b: &Community) -> f64 {
    let overlap = a.intersection(b).count();
    if overlap == 0 {
        return 0.0;
    }
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    overlap as f64 / union as f64
}

/// Merges communities whose improved Jaccard coefficient reaches `tau`,
/// repeating passes until none does.
///
/// Within a pass the surviving community at index i absorbs every later
/// community j whose coefficient against the *original* community i reaches
/// the threshold; absorbed communities are skipped for the rest of the pass.
/// The result is a fixed point: re-merging it with the same `tau` changes
/// nothing.
pub fn merge_communities(mut communities: Vec<Community>, tau: f64) -> Vec<Community> {
    loop {
        let mut merged = false;
        let mut absorbed = vec![false; communities.len()];
        let mut next: Vec<Community> = Vec::with_capacity(communities.len());

        for i in 0..communities.len() {
            if absorbed[i] {
                continue;
            }
            let mut union = communities[i].clone();
            for j in (i + 1)..communities.len() {
                if absorbed[j] {
                    continue;
                }
                let coefficient = improved_jaccard(&communities[i], &communities[j]);
                if coefficient >= tau {
                    debug!(i, j, coefficient, "merging communities");
                    union.extend(communities[j].iter().copied());
                    absorbed[j] = true;
                    merged = true;
                }
            }
            next.push(union);
        }

        communities = next;
        if !merged {
            break;
        }
    }
    communities
}
