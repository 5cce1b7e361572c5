//! Graph wrapper using petgraph::StableUnGraph keyed by Vertex

use crate::error::{CrownError, Result};
use crate::model::{Edge, Vertex};
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use std::collections::{BTreeSet, HashMap};

/// Undirected simple graph over integer vertex identifiers.
///
/// Node indices stay stable across removals, so the vertex lookup table never
/// has to be rebuilt. Every edge is stored once and is visible from both
/// endpoints.
#[derive(Clone)]
pub struct Graph {
    inner: StableUnGraph<Vertex, ()>,
    index: HashMap<Vertex, NodeIndex>,
    implicit_vertices: bool,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("implicit_vertices", &self.implicit_vertices)
            .finish()
    }
}

impl Graph {
    /// A graph that creates missing endpoints on edge insertion.
    pub fn new() -> Self {
        Graph {
            inner: StableUnGraph::default(),
            index: HashMap::new(),
            implicit_vertices: true,
        }
    }

    /// A graph whose `add_edge` rejects endpoints that were never added.
    pub fn strict() -> Self {
        Graph {
            implicit_vertices: false,
            ..Graph::new()
        }
    }

    /// Build a permissive graph from an edge list.
    pub fn from_edges<I, V>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
        V: Into<Vertex>,
    {
        let mut graph = Graph::new();
        for (a, b) in edges {
            graph.add_edge(a.into(), b.into())?;
        }
        Ok(graph)
    }

    /// Add a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        self.ensure_vertex(v);
        true
    }

    fn ensure_vertex(&mut self, v: Vertex) -> NodeIndex {
        *self
            .index
            .entry(v)
            .or_insert_with(|| self.inner.add_node(v))
    }

    /// Add an undirected edge. Returns false if the edge already existed.
    pub fn add_edge(&mut self, a: Vertex, b: Vertex) -> Result<bool> {
        if a == b {
            return Err(CrownError::SelfLoop { vertex: a });
        }
        let ia = self.index_for_edge(a)?;
        let ib = self.index_for_edge(b)?;
        if self.inner.find_edge(ia, ib).is_some() {
            return Ok(false);
        }
        self.inner.add_edge(ia, ib, ());
        Ok(true)
    }

    fn index_for_edge(&mut self, v: Vertex) -> Result<NodeIndex> {
        if let Some(&idx) = self.index.get(&v) {
            return Ok(idx);
        }
        if !self.implicit_vertices {
            return Err(CrownError::InvalidVertex { vertex: v });
        }
        Ok(self.ensure_vertex(v))
    }

    /// Remove a vertex and every incident edge. Returns false if absent.
    pub fn remove_vertex(&mut self, v: Vertex) -> bool {
        match self.index.remove(&v) {
            Some(idx) => {
                self.inner.remove_node(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every listed vertex. Returns how many were present.
    pub fn remove_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = Vertex>,
    {
        vertices
            .into_iter()
            .filter(|&v| self.remove_vertex(v))
            .count()
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.index.contains_key(&v)
    }

    pub fn contains_edge(&self, a: Vertex, b: Vertex) -> bool {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(&ia), Some(&ib)) => self.inner.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Adjacent vertices in ascending order; empty for isolated or absent vertices.
    pub fn neighbors(&self, v: Vertex) -> BTreeSet<Vertex> {
        match self.index.get(&v) {
            Some(&idx) => self
                .inner
                .neighbors(idx)
                .filter_map(|n| self.inner.node_weight(n).copied())
                .collect(),
            None => BTreeSet::new(),
        }
    }

    pub fn degree(&self, v: Vertex) -> usize {
        self.index
            .get(&v)
            .map_or(0, |&idx| self.inner.neighbors(idx).count())
    }

    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        self.index.keys().copied().collect()
    }

    /// All edges in ascending `(u, v)` order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = self.edges_in_storage_order();
        edges.sort_unstable();
        edges
    }

    /// All edges in the order the underlying storage holds them. For a graph
    /// that has only grown this is insertion order.
    pub fn edges_in_storage_order(&self) -> Vec<Edge> {
        self.inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .filter_map(|(a, b)| {
                let a = self.inner.node_weight(a)?;
                let b = self.inner.node_weight(b)?;
                Some(Edge::new(*a, *b))
            })
            .collect()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count() == other.edge_count()
            && self.vertices() == other.vertices()
            && self.edges() == other.edges()
    }
}

impl Eq for Graph {}
