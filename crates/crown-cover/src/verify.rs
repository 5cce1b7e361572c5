//! Candidate vertex cover verification

use crown_core::{Edge, Graph, Vertex};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate does not hold exactly k distinct vertices.
    WrongSize { expected: usize, actual: usize },
    /// The first edge, in ascending order, with neither endpoint chosen.
    Uncovered { edge: Edge },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No { reason: Rejection },
}

impl Verdict {
    pub fn is_yes(&self) -> bool {
        matches!(self, Verdict::Yes)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => write!(f, "yes"),
            Verdict::No { .. } => write!(f, "no"),
        }
    }
}

/// Check that `candidate` is a vertex cover of `graph` with exactly `k`
/// distinct vertices. The graph is never modified.
pub fn verify_cover(graph: &Graph, candidate: &[Vertex], k: usize) -> Verdict {
    let chosen: HashSet<Vertex> = candidate.iter().copied().collect();
    if chosen.len() != k {
        return Verdict::No {
            reason: Rejection::WrongSize {
                expected: k,
                actual: chosen.len(),
            },
        };
    }

    let uncovered = graph
        .edges()
        .into_iter()
        .find(|e| !chosen.contains(&e.u()) && !chosen.contains(&e.v()));
    match uncovered {
        Some(edge) => {
            tracing::debug!("candidate misses edge ({})", edge);
            Verdict::No {
                reason: Rejection::Uncovered { edge },
            }
        }
        None => Verdict::Yes,
    }
}
