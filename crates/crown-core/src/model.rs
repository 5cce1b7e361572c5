//! Core data structures for crown decomposition

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CrownError, Result};

/// Vertex identifier. Vertices carry no attributes beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Vertex(pub u32);

impl From<u32> for Vertex {
    fn from(id: u32) -> Self {
        Vertex(id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected edge, stored with the smaller endpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    u: Vertex,
    v: Vertex,
}

impl Edge {
    pub fn new(a: Vertex, b: Vertex) -> Self {
        if a <= b {
            Edge { u: a, v: b }
        } else {
            Edge { u: b, v: a }
        }
    }

    /// The smaller endpoint.
    pub fn u(&self) -> Vertex {
        self.u
    }

    /// The larger endpoint.
    pub fn v(&self) -> Vertex {
        self.v
    }

    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.u, self.v)
    }

    pub fn contains(&self, x: Vertex) -> bool {
        self.u == x || self.v == x
    }

    /// The endpoint opposite `x`, if `x` is an endpoint.
    pub fn other(&self, x: Vertex) -> Option<Vertex> {
        if x == self.u {
            Some(self.v)
        } else if x == self.v {
            Some(self.u)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.u, self.v)
    }
}

/// A set of pairwise vertex-disjoint edges, indexed by endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    mates: BTreeMap<Vertex, Vertex>,
}

impl Matching {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge. Fails if either endpoint is already matched.
    pub fn insert(&mut self, edge: Edge) -> Result<()> {
        let (a, b) = edge.endpoints();
        if let Some(held) = [a, b].into_iter().find(|x| self.mates.contains_key(x)) {
            return Err(CrownError::invariant(
                "matching disjointness",
                format!("vertex {} is already matched when adding edge ({})", held, edge),
            ));
        }
        self.mates.insert(a, b);
        self.mates.insert(b, a);
        Ok(())
    }

    pub fn mate(&self, x: Vertex) -> Option<Vertex> {
        self.mates.get(&x).copied()
    }

    pub fn is_matched(&self, x: Vertex) -> bool {
        self.mates.contains_key(&x)
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.mate(edge.u()) == Some(edge.v())
    }

    /// Number of matched edges.
    pub fn len(&self) -> usize {
        self.mates.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.mates.is_empty()
    }

    /// Matched edges in ascending order.
    pub fn edges(&self) -> Vec<Edge> {
        self.mates
            .iter()
            .filter(|(a, b)| a < b)
            .map(|(&a, &b)| Edge::new(a, b))
            .collect()
    }

    /// Every vertex touched by the matching.
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        self.mates.keys().copied().collect()
    }
}

/// A crown `(I, H)`: `I` independent, `H = N(I)`, and `head_matching`
/// pairs every head vertex with a distinct vertex of `I`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crown {
    /// Crown independent side.
    pub independent: BTreeSet<Vertex>,
    /// Head vertices, guaranteed to be in some minimum vertex cover.
    pub head: BTreeSet<Vertex>,
    /// Head vertex -> its matched partner in `independent`.
    pub head_matching: BTreeMap<Vertex, Vertex>,
    /// Every subgraph edge absorbed while the crown grew.
    pub edges: BTreeSet<Edge>,
}

impl Crown {
    pub fn is_empty(&self) -> bool {
        self.independent.is_empty() && self.head.is_empty()
    }

    /// `I ∪ H`.
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        self.independent.union(&self.head).copied().collect()
    }

    /// Total number of vertices removed by this crown.
    pub fn size(&self) -> usize {
        self.independent.len() + self.head.len()
    }
}
