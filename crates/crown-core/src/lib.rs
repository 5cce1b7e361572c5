//! Crown Core — graph model and crown decomposition for Vertex Cover kernelization

pub mod config;
pub mod crown;
pub mod error;
pub mod extract;
pub mod graph;
pub mod io;
pub mod kernel;
pub mod matching;
pub mod model;
pub mod reduce;


#[cfg(test)]
pub mod test_utils;

pub use config::{Config, ExtractConfig, OutputConfig, ReductionConfig, ScanOrder, CONFIG_FILE, CROWN_OUTPUT, REDUCED_OUTPUT};
pub use crown::build_crown;
pub use error::{CrownError, Result};
pub use extract::{extract, maximal_matching, Extraction};
pub use graph::Graph;
pub use io::{open_input, parse_candidates, parse_edge_list, read_graph, write_edge_list, write_file, write_outputs, write_vertices};
pub use kernel::{CrownReducer, Kernel, KernelReport, RoundStats};
pub use matching::{hopcroft_karp, BipartiteMatching};
pub use model::{Crown, Edge, Matching, Vertex};
pub use reduce::{remove_crown, Reduction};
