//! Test utilities for crown-core

use crate::graph::Graph;
use crate::model::Vertex;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Deterministic xorshift generator so random fixtures reproduce.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// True with probability `percent / 100`.
    pub fn percent(&mut self, percent: u64) -> bool {
        self.next_u64() % 100 < percent
    }
}

pub fn vertices<const N: usize>(ids: [u32; N]) -> BTreeSet<Vertex> {
    ids.into_iter().map(Vertex).collect()
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: u32) -> Graph {
    Graph::from_edges((1..n).map(|i| (i - 1, i))).unwrap()
}

/// Triangle on `base, base + 1, base + 2`.
pub fn add_triangle(graph: &mut Graph, base: u32) {
    for (a, b) in [(0, 1), (1, 2), (0, 2)] {
        graph.add_edge(Vertex(base + a), Vertex(base + b)).unwrap();
    }
}

/// Star with `center` joined to every leaf.
pub fn add_star(graph: &mut Graph, center: u32, leaves: impl IntoIterator<Item = u32>) {
    for leaf in leaves {
        graph.add_edge(Vertex(center), Vertex(leaf)).unwrap();
    }
}

/// K(a, b) with left `0..a` and right `a..a + b`.
pub fn complete_bipartite(a: u32, b: u32) -> (Graph, BTreeSet<Vertex>, BTreeSet<Vertex>) {
    let left: BTreeSet<Vertex> = (0..a).map(Vertex).collect();
    let right: BTreeSet<Vertex> = (a..a + b).map(Vertex).collect();
    let mut graph = Graph::new();
    for &l in &left {
        for &r in &right {
            graph.add_edge(l, r).unwrap();
        }
    }
    (graph, left, right)
}

/// Random bipartite graph, each cross pair present with `percent`% chance.
/// Every vertex is added even when isolated.
pub fn random_bipartite(
    left_n: u32,
    right_n: u32,
    percent: u64,
    seed: u64,
) -> (Graph, BTreeSet<Vertex>, BTreeSet<Vertex>) {
    let mut rng = XorShift::new(seed);
    let left: BTreeSet<Vertex> = (0..left_n).map(Vertex).collect();
    let right: BTreeSet<Vertex> = (left_n..left_n + right_n).map(Vertex).collect();
    let mut graph = Graph::new();
    for &v in left.iter().chain(right.iter()) {
        graph.add_vertex(v);
    }
    for &l in &left {
        for &r in &right {
            if rng.percent(percent) {
                graph.add_edge(l, r).unwrap();
            }
        }
    }
    (graph, left, right)
}

/// Random simple graph on `0..n`.
pub fn random_graph(n: u32, percent: u64, seed: u64) -> Graph {
    let mut rng = XorShift::new(seed);
    let mut graph = Graph::new();
    for a in 0..n {
        graph.add_vertex(Vertex(a));
        for b in (a + 1)..n {
            if rng.percent(percent) {
                graph.add_edge(Vertex(a), Vertex(b)).unwrap();
            }
        }
    }
    graph
}

/// A crown that the pipeline finds under sorted scanning: matched pairs
/// `(0,1) (2,3) (4,5)` and independent vertices `6..6+extra+3` joined to every
/// odd vertex. Expected crown: `I = 6..`, `H = {1, 3, 5}`.
pub fn hidden_crown(extra: u32) -> Graph {
    let mut graph = Graph::new();
    for pair in [(0, 1), (2, 3), (4, 5)] {
        graph.add_edge(Vertex(pair.0), Vertex(pair.1)).unwrap();
    }
    for i in 6..(6 + 3 + extra) {
        for h in [1, 3, 5] {
            graph.add_edge(Vertex(h), Vertex(i)).unwrap();
        }
    }
    graph
}

/// Write `content` to a fresh temp directory and return the file path.
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xorshift_is_deterministic() {
        let mut a = XorShift::new(42);
        let mut b = XorShift::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_hidden_crown_shape() {
        let graph = hidden_crown(1);
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 3 + 4 * 3);
    }
}
