//! Crown reduction pipeline: extract, match, grow, remove

use crate::config::{Config, ReductionConfig, ScanOrder};
use crate::crown::crown_from_extraction;
use crate::error::Result;
use crate::extract::extract;
use crate::graph::Graph;
use crate::matching::hopcroft_karp;
use crate::model::{Crown, Vertex};
use crate::reduce::remove_crown;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sizes observed during one crown round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub round: usize,
    pub maximal_matching: usize,
    pub independent: usize,
    pub matched_side: usize,
    pub maximum_matching: usize,
    pub phases: usize,
    pub crown_independent: usize,
    pub crown_head: usize,
}

/// Accumulated result of one or more crown rounds.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Vertices that belong to some minimum vertex cover.
    pub cover: BTreeSet<Vertex>,
    /// Crown independent vertices removed without entering the cover.
    pub discarded: BTreeSet<Vertex>,
    /// Non-empty crowns in the order they were removed.
    pub crowns: Vec<Crown>,
    pub rounds: Vec<RoundStats>,
    /// The reduced instance.
    pub residual: Graph,
}

/// JSON-friendly summary of a [`Kernel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelReport {
    pub cover: Vec<Vertex>,
    pub discarded: Vec<Vertex>,
    pub rounds: Vec<RoundStats>,
    pub residual_vertices: usize,
    pub residual_edges: usize,
}

impl Kernel {
    pub fn report(&self) -> KernelReport {
        KernelReport {
            cover: self.cover.iter().copied().collect(),
            discarded: self.discarded.iter().copied().collect(),
            rounds: self.rounds.clone(),
            residual_vertices: self.residual.vertex_count(),
            residual_edges: self.residual.edge_count(),
        }
    }
}

/// Drives the extraction → matching → crown → removal stages.
#[derive(Debug, Clone, Default)]
pub struct CrownReducer {
    config: ReductionConfig,
    scan_order: ScanOrder,
}

impl CrownReducer {
    pub fn new(config: ReductionConfig, scan_order: ScanOrder) -> Self {
        Self { config, scan_order }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reduction.clone(), config.extract.scan_order)
    }

    /// Find one crown in `graph` without modifying it.
    pub fn find_crown(&self, graph: &Graph) -> Result<(Crown, RoundStats)> {
        let extraction = extract(graph, self.scan_order)?;
        let maximum = hopcroft_karp(&extraction.subgraph, &extraction.independent, &extraction.matched)?;
        let crown = crown_from_extraction(&extraction, &maximum.matching)?;

        let stats = RoundStats {
            round: 0,
            maximal_matching: extraction.maximal_matching.len(),
            independent: extraction.independent.len(),
            matched_side: extraction.matched.len(),
            maximum_matching: maximum.matching.len(),
            phases: maximum.phases,
            crown_independent: crown.independent.len(),
            crown_head: crown.head.len(),
        };
        Ok((crown, stats))
    }

    /// Remove crowns from `graph`. One round unless configured exhaustive, in
    /// which case rounds continue until one finds nothing or the round cap is
    /// reached.
    pub fn run(&self, graph: Graph) -> Result<Kernel> {
        let max_rounds = if self.config.exhaustive {
            self.config.max_rounds.max(1)
        } else {
            1
        };

        let mut graph = graph;
        let mut cover = BTreeSet::new();
        let mut discarded = BTreeSet::new();
        let mut crowns = Vec::new();
        let mut rounds = Vec::new();

        for round in 1..=max_rounds {
            let (crown, mut stats) = self.find_crown(&graph)?;
            stats.round = round;
            tracing::info!(
                "Round {}: crown |I| = {}, |H| = {} (maximum matching {}, {} phases)",
                round,
                stats.crown_independent,
                stats.crown_head,
                stats.maximum_matching,
                stats.phases
            );
            rounds.push(stats);

            if crown.is_empty() {
                break;
            }

            let reduction = remove_crown(graph, &crown)?;
            cover.extend(reduction.cover);
            discarded.extend(reduction.discarded);
            graph = reduction.residual;
            crowns.push(crown);

            if graph.edge_count() == 0 {
                break;
            }
        }

        let capped = rounds.len() == max_rounds
            && rounds.last().is_some_and(|r| r.crown_independent > 0)
            && graph.edge_count() > 0;
        if self.config.exhaustive && capped {
            tracing::warn!("Stopped after the round cap of {}", max_rounds);
        }

        Ok(Kernel {
            cover,
            discarded,
            crowns,
            rounds,
            residual: graph,
        })
    }
}
