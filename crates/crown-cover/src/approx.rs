//! Greedy vertex-cover approximations

use crown_core::{Graph, Vertex};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use thiserror::Error;

/// Default approximation output file
pub const APPROX_OUTPUT: &str = "approxOutput.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApproxStrategy {
    /// Repeatedly take the vertex of highest remaining degree.
    #[default]
    MaxDegree,
    /// Repeatedly take both endpoints of the smallest remaining edge.
    EdgePick,
}

#[derive(Debug, Clone, Error)]
#[error("unknown approximation strategy: {0} (expected max-degree|edge-pick)")]
pub struct UnknownStrategy(pub String);

impl std::str::FromStr for ApproxStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max-degree" | "0" => Ok(ApproxStrategy::MaxDegree),
            "edge-pick" | "1" => Ok(ApproxStrategy::EdgePick),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

pub fn approximate_cover(graph: &Graph, strategy: ApproxStrategy) -> Vec<Vertex> {
    let cover = match strategy {
        ApproxStrategy::MaxDegree => max_degree_cover(graph),
        ApproxStrategy::EdgePick => edge_pick_cover(graph),
    };
    tracing::info!(
        "{:?} cover: {} vertices for {} edges",
        strategy,
        cover.len(),
        graph.edge_count()
    );
    cover
}

/// Highest-degree-first greedy cover. Ties go to the smallest identifier.
/// Returns the cover in ascending order.
pub fn max_degree_cover(graph: &Graph) -> Vec<Vertex> {
    let mut remaining = graph.clone();
    let mut cover = BTreeSet::new();

    while remaining.edge_count() > 0 {
        let Some(best) = remaining
            .vertices()
            .into_iter()
            .max_by_key(|&v| (remaining.degree(v), Reverse(v)))
        else {
            break;
        };
        tracing::trace!("taking {} (degree {})", best, remaining.degree(best));
        remaining.remove_vertex(best);
        cover.insert(best);
    }

    cover.into_iter().collect()
}

/// Maximal-matching 2-approximation: scan edges in ascending order and take
/// both endpoints of every edge not yet covered.
pub fn edge_pick_cover(graph: &Graph) -> Vec<Vertex> {
    let mut cover = BTreeSet::new();
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        if !cover.contains(&a) && !cover.contains(&b) {
            cover.insert(a);
            cover.insert(b);
        }
    }
    cover.into_iter().collect()
}
