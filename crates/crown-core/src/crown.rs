//! Crown growth from the free vertices of the independent residue

use crate::error::{CrownError, Result};
use crate::extract::Extraction;
use crate::graph::Graph;
use crate::model::{Crown, Edge, Matching, Vertex};
use std::collections::{BTreeSet, VecDeque};

/// Grow a crown from the residue vertices left free by a maximum matching.
///
/// Worklist closure: an active independent vertex absorbs all of its
/// subgraph neighbours into the head, and every newly absorbed head vertex
/// pulls its matched partner into the independent side as a new active
/// vertex. The loop runs until no vertex is active, so activations produced
/// late are processed like the initial seeds.
///
/// With a maximum matching every head vertex is matched; an unmatched one
/// would close an augmenting path and is reported as an invariant violation.
pub fn build_crown(
    subgraph: &Graph,
    independent: &BTreeSet<Vertex>,
    matching: &Matching,
) -> Result<Crown> {
    let mut crown = Crown::default();
    let mut active: VecDeque<Vertex> = independent
        .iter()
        .copied()
        .filter(|&v| !matching.is_matched(v))
        .collect();
    crown.independent.extend(active.iter().copied());

    tracing::debug!("Crown seeds: {} free independent vertices", active.len());

    while let Some(v) = active.pop_front() {
        for u in subgraph.neighbors(v) {
            crown.edges.insert(Edge::new(v, u));
            if !crown.head.insert(u) {
                continue;
            }

            let Some(partner) = matching.mate(u) else {
                return Err(CrownError::invariant(
                    "maximum matching",
                    format!("head vertex {} reached from {} is unmatched", u, v),
                ));
            };
            if !independent.contains(&partner) {
                return Err(CrownError::invariant(
                    "crown disjointness",
                    format!("head vertex {} is matched to {} outside the independent side", u, partner),
                ));
            }
            crown.head_matching.insert(u, partner);
            crown.edges.insert(Edge::new(u, partner));
            if crown.independent.insert(partner) {
                active.push_back(partner);
            }
        }
    }

    tracing::debug!(
        "Crown closed: |I| = {}, |H| = {}, {} edges",
        crown.independent.len(),
        crown.head.len(),
        crown.edges.len()
    );

    Ok(crown)
}

/// Convenience wrapper taking the extractor's output directly.
pub fn crown_from_extraction(extraction: &Extraction, matching: &Matching) -> Result<Crown> {
    build_crown(&extraction.subgraph, &extraction.independent, matching)
}
