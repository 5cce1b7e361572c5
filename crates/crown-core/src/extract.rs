//! Subgraph extraction: greedy maximal matching, independent residue and the
//! bipartite subgraph between the residue and the matched vertices.

use crate::config::ScanOrder;
use crate::error::{CrownError, Result};
use crate::graph::Graph;
use crate::model::{Matching, Vertex};
use std::collections::BTreeSet;

/// Output of [`extract`].
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Edges with exactly one endpoint in `independent`; nothing else.
    pub subgraph: Graph,
    /// Residue vertices that still have at least one edge.
    pub independent: BTreeSet<Vertex>,
    /// Matched vertices adjacent to some residue vertex.
    pub matched: BTreeSet<Vertex>,
    /// The greedy matching the partition was derived from.
    pub maximal_matching: Matching,
}

/// Greedy maximal matching: accept an edge when neither endpoint is taken.
pub fn maximal_matching(graph: &Graph, order: ScanOrder) -> Result<Matching> {
    let edges = match order {
        ScanOrder::Sorted => graph.edges(),
        ScanOrder::Insertion => graph.edges_in_storage_order(),
    };

    let mut matching = Matching::new();
    for edge in edges {
        let (a, b) = edge.endpoints();
        if !matching.is_matched(a) && !matching.is_matched(b) {
            matching.insert(edge)?;
        }
    }
    Ok(matching)
}

/// Partition `graph` into the residue `I` and the matched side, and build the
/// bipartite subgraph between them.
///
/// Edges between two matched vertices are filtered out so the subgraph is
/// strictly bipartite. An edge between two residue vertices would mean the
/// greedy matching was not maximal, which is reported as an invariant
/// violation.
pub fn extract(graph: &Graph, order: ScanOrder) -> Result<Extraction> {
    let maximal_matching = maximal_matching(graph, order)?;
    let residue: BTreeSet<Vertex> = graph
        .vertices()
        .into_iter()
        .filter(|&v| !maximal_matching.is_matched(v))
        .collect();

    let mut subgraph = Graph::new();
    let mut independent = BTreeSet::new();
    let mut matched = BTreeSet::new();
    let mut filtered = 0usize;

    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        let (free, taken) = match (residue.contains(&a), residue.contains(&b)) {
            (true, false) => (a, b),
            (false, true) => (b, a),
            (false, false) => {
                filtered += 1;
                continue;
            }
            (true, true) => {
                return Err(CrownError::invariant(
                    "maximal matching",
                    format!("edge ({}) has both endpoints unmatched", edge),
                ));
            }
        };
        independent.insert(free);
        matched.insert(taken);
        subgraph.add_edge(free, taken)?;
    }

    tracing::debug!(
        "Extracted subgraph: maximal matching {}, residue {} ({} isolated dropped), matched side {}, {} cross edges, {} matched-side edges filtered",
        maximal_matching.len(),
        independent.len(),
        residue.len() - independent.len(),
        matched.len(),
        subgraph.edge_count(),
        filtered
    );

    Ok(Extraction {
        subgraph,
        independent,
        matched,
        maximal_matching,
    })
}
