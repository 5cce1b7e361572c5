//! Maximum bipartite matching (Hopcroft–Karp)
//!
//! Each phase layers the left vertices by alternating BFS from every free left
//! vertex, stopping at the first layer that reaches a free right vertex. A DFS
//! from each free left vertex then walks strictly increasing layers to collect
//! a maximal set of vertex-disjoint shortest augmenting paths, flipping each
//! one as it is found. A phase that finds no path ends the search, so the
//! matching is maximum. Runs in O(E·√V).

use crate::error::{CrownError, Result};
use crate::graph::Graph;
use crate::model::{Edge, Matching, Vertex};
use std::collections::{BTreeSet, HashMap, VecDeque};

const NIL: usize = usize::MAX;
const UNREACHED: usize = usize::MAX;

/// A maximum matching together with the number of augmenting phases it took.
#[derive(Debug, Clone, Default)]
pub struct BipartiteMatching {
    pub matching: Matching,
    pub phases: usize,
}

/// Compute a maximum matching between `left` and `right` in `graph`.
///
/// Every edge of `graph` must join a `left` vertex to a `right` vertex and the
/// partitions must be disjoint; anything else is an invariant violation rather
/// than an edge to skip. Vertices of either side that have no edges are fine.
pub fn hopcroft_karp(
    graph: &Graph,
    left: &BTreeSet<Vertex>,
    right: &BTreeSet<Vertex>,
) -> Result<BipartiteMatching> {
    if let Some(v) = left.intersection(right).next() {
        return Err(CrownError::invariant(
            "disjoint partitions",
            format!("vertex {} is on both sides", v),
        ));
    }
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        let crosses = (left.contains(&a) && right.contains(&b))
            || (right.contains(&a) && left.contains(&b));
        if !crosses {
            return Err(CrownError::invariant(
                "cross-partition edges",
                format!("edge ({}) does not join the left side to the right side", edge),
            ));
        }
    }

    if left.is_empty() || right.is_empty() {
        return Ok(BipartiteMatching::default());
    }

    let left_ids: Vec<Vertex> = left.iter().copied().collect();
    let right_ids: Vec<Vertex> = right.iter().copied().collect();
    let right_pos: HashMap<Vertex, usize> = right_ids
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect();
    let adj: Vec<Vec<usize>> = left_ids
        .iter()
        .map(|&l| {
            graph
                .neighbors(l)
                .into_iter()
                .filter_map(|r| right_pos.get(&r).copied())
                .collect()
        })
        .collect();

    let mut search = Search::new(&adj, right_ids.len());
    let phases = search.run();

    let mut matching = Matching::new();
    for (l, &r) in search.mate_left.iter().enumerate() {
        if r != NIL {
            matching.insert(Edge::new(left_ids[l], right_ids[r]))?;
        }
    }

    tracing::debug!(
        "Hopcroft-Karp: {} left, {} right, matching size {} after {} phases",
        left_ids.len(),
        right_ids.len(),
        matching.len(),
        phases
    );

    Ok(BipartiteMatching { matching, phases })
}

/// Index-based search state. Left vertices are `0..adj.len()`, right
/// vertices `0..right_count`.
struct Search<'a> {
    adj: &'a [Vec<usize>],
    mate_left: Vec<usize>,
    mate_right: Vec<usize>,
    layer: Vec<usize>,
    cursor: Vec<usize>,
    /// Layer of the left vertex one step past the last left vertex on a
    /// shortest augmenting path in the current phase.
    limit: usize,
}

impl<'a> Search<'a> {
    fn new(adj: &'a [Vec<usize>], right_count: usize) -> Self {
        let n = adj.len();
        Search {
            adj,
            mate_left: vec![NIL; n],
            mate_right: vec![NIL; right_count],
            layer: vec![UNREACHED; n],
            cursor: vec![0; n],
            limit: UNREACHED,
        }
    }

    /// Run phases until none augments. Returns the number of augmenting phases.
    fn run(&mut self) -> usize {
        let mut phases = 0;
        while self.layer_free_vertices() {
            self.cursor.fill(0);
            let mut augmented = 0;
            for root in 0..self.adj.len() {
                if self.mate_left[root] == NIL && self.augment_from(root) {
                    augmented += 1;
                }
            }
            if augmented == 0 {
                break;
            }
            phases += 1;
            tracing::trace!("phase {}: {} augmenting paths of length {}", phases, augmented, 2 * self.limit - 1);
        }
        phases
    }

    /// Alternating BFS from every free left vertex. Returns true when a free
    /// right vertex is reachable.
    fn layer_free_vertices(&mut self) -> bool {
        let mut queue = VecDeque::new();
        for u in 0..self.adj.len() {
            if self.mate_left[u] == NIL {
                self.layer[u] = 0;
                queue.push_back(u);
            } else {
                self.layer[u] = UNREACHED;
            }
        }

        self.limit = UNREACHED;
        while let Some(u) = queue.pop_front() {
            let next = self.layer[u] + 1;
            if next > self.limit {
                continue;
            }
            for &r in &self.adj[u] {
                let w = self.mate_right[r];
                if w == NIL {
                    self.limit = self.limit.min(next);
                } else if self.layer[w] == UNREACHED {
                    self.layer[w] = next;
                    queue.push_back(w);
                }
            }
        }
        self.limit != UNREACHED
    }

    /// Iterative layered DFS from a free left vertex. On success the path is
    /// flipped and its left vertices are retired for the rest of the phase,
    /// which keeps the paths of one phase vertex-disjoint.
    fn augment_from(&mut self, root: usize) -> bool {
        let mut stack = vec![root];
        while let Some(&u) = stack.last() {
            let Some(&r) = self.adj[u].get(self.cursor[u]) else {
                self.layer[u] = UNREACHED;
                stack.pop();
                continue;
            };
            self.cursor[u] += 1;

            let w = self.mate_right[r];
            if w == NIL {
                if self.layer[u] + 1 == self.limit {
                    self.flip(&stack, r);
                    return true;
                }
            } else if self.layer[w] != UNREACHED && self.layer[w] == self.layer[u] + 1 {
                stack.push(w);
            }
        }
        false
    }

    /// `path[i + 1]` is the current mate of the right vertex `path[i]` stepped
    /// through; `free_right` ends the path.
    fn flip(&mut self, path: &[usize], free_right: usize) {
        let mut right = free_right;
        for &left in path.iter().rev() {
            let previous = self.mate_left[left];
            self.mate_left[left] = right;
            self.mate_right[right] = left;
            self.layer[left] = UNREACHED;
            right = previous;
        }
    }
}
