//! Crown removal

use crate::error::{CrownError, Result};
use crate::graph::Graph;
use crate::model::{Crown, Vertex};
use std::collections::BTreeSet;

/// The result of removing one crown: the vertices forced into the cover and
/// the residual instance.
#[derive(Debug, Clone)]
pub struct Reduction {
    /// Head vertices, ascending and deduplicated.
    pub cover: BTreeSet<Vertex>,
    /// Crown independent vertices dropped from the instance.
    pub discarded: BTreeSet<Vertex>,
    pub residual: Graph,
}

/// Remove `I ∪ H` from `graph`, taking ownership of it.
pub fn remove_crown(mut graph: Graph, crown: &Crown) -> Result<Reduction> {
    if let Some(v) = crown.independent.intersection(&crown.head).next() {
        return Err(CrownError::invariant(
            "crown disjointness",
            format!("vertex {} is on both sides of the crown", v),
        ));
    }

    let before = (graph.vertex_count(), graph.edge_count());
    let removed = graph.remove_vertices(crown.vertices());
    tracing::debug!(
        "Removed crown: {} vertices ({} -> {} vertices, {} -> {} edges)",
        removed,
        before.0,
        graph.vertex_count(),
        before.1,
        graph.edge_count()
    );

    Ok(Reduction {
        cover: crown.head.clone(),
        discarded: crown.independent.clone(),
        residual: graph,
    })
}
