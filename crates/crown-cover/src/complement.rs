//! Vertex cover to clique: the complement graph construction

use crown_core::{Graph, Result};

/// Default complement output file
pub const COMPLEMENT_OUTPUT: &str = "edgeListFilename.txt";

/// A clique decision instance equivalent to "does `graph` have a vertex cover
/// of size k": the complement graph and the clique size `n - k`.
#[derive(Debug, Clone)]
pub struct CliqueInstance {
    pub graph: Graph,
    pub clique_size: usize,
}

/// The graph on the same vertices whose edges are exactly the missing ones.
pub fn complement(graph: &Graph) -> Result<Graph> {
    let vertices: Vec<_> = graph.vertices().into_iter().collect();
    let mut out = Graph::new();
    for &v in &vertices {
        out.add_vertex(v);
    }
    for (i, &a) in vertices.iter().enumerate() {
        for &b in &vertices[i + 1..] {
            if !graph.contains_edge(a, b) {
                out.add_edge(a, b)?;
            }
        }
    }
    tracing::debug!(
        "Complement of {} vertices: {} -> {} edges",
        vertices.len(),
        graph.edge_count(),
        out.edge_count()
    );
    Ok(out)
}

/// `graph` has a vertex cover of size `k` iff the returned complement has a
/// clique of size `n - k` (zero when `k >= n`).
pub fn clique_instance(graph: &Graph, k: usize) -> Result<CliqueInstance> {
    Ok(CliqueInstance {
        graph: complement(graph)?,
        clique_size: graph.vertex_count().saturating_sub(k),
    })
}
