//! CLI command implementations

use anyhow::Context;
use crown_core::{Config, CrownReducer, ScanOrder};
use crown_cover::{ApproxStrategy, Verdict};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Command-line settings that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub crown_out: Option<PathBuf>,
    pub reduced_out: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub exhaustive: bool,
    pub scan_order: Option<ScanOrder>,
}

impl Overrides {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.crown_out {
            config.output.crown_path = path;
        }
        if let Some(path) = self.reduced_out {
            config.output.reduced_path = path;
        }
        if self.report.is_some() {
            config.output.report_path = self.report;
        }
        if self.exhaustive {
            config.reduction.exhaustive = true;
        }
        if let Some(order) = self.scan_order {
            config.extract.scan_order = order;
        }
    }
}

pub fn reduce(input: &Path, config_path: Option<&Path>, overrides: Overrides) -> anyhow::Result<()> {
    let started = Instant::now();
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let mut config = Config::discover(config_path, &cwd).context("Failed to load config")?;
    overrides.apply(&mut config);

    let graph = crown_core::read_graph(input)
        .with_context(|| format!("Failed to read graph from {}", input.display()))?;
    tracing::info!(
        "Loaded {}: {} vertices, {} edges",
        input.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let kernel = CrownReducer::from_config(&config)
        .run(graph)
        .context("Crown reduction failed")?;
    crown_core::write_outputs(&kernel, &config.output).context("Failed to write outputs")?;

    tracing::info!(
        "Removed {} cover and {} crown vertices in {} rounds ({:.2?})",
        kernel.cover.len(),
        kernel.discarded.len(),
        kernel.crowns.len(),
        started.elapsed()
    );
    Ok(())
}

pub fn approx(input: &Path, strategy: ApproxStrategy, output: &Path) -> anyhow::Result<()> {
    let started = Instant::now();
    let graph = crown_core::read_graph(input)
        .with_context(|| format!("Failed to read graph from {}", input.display()))?;

    let cover = crown_cover::approximate_cover(&graph, strategy);
    crown_core::write_file(output, |w| crown_core::write_vertices(w, cover.iter().copied()))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Wrote {} cover vertices to {} ({:.2?})",
        cover.len(),
        output.display(),
        started.elapsed()
    );
    Ok(())
}

pub fn complement(input: &Path, k: Option<usize>, output: &Path) -> anyhow::Result<()> {
    let started = Instant::now();
    let graph = crown_core::read_graph(input)
        .with_context(|| format!("Failed to read graph from {}", input.display()))?;

    let complement = match k {
        Some(k) => {
            let instance = crown_cover::clique_instance(&graph, k)?;
            tracing::info!(
                "Vertex cover of size {} exists iff the complement has a clique of size {}",
                k,
                instance.clique_size
            );
            instance.graph
        }
        None => crown_cover::complement(&graph)?,
    };
    crown_core::write_file(output, |w| crown_core::write_edge_list(w, &complement))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        "Wrote {} complement edges to {} ({:.2?})",
        complement.edge_count(),
        output.display(),
        started.elapsed()
    );
    Ok(())
}

pub fn verify(graph_path: &Path, candidates_path: &Path, k: usize) -> anyhow::Result<()> {
    let started = Instant::now();
    let graph = crown_core::read_graph(graph_path)
        .with_context(|| format!("Failed to read graph from {}", graph_path.display()))?;
    let reader = crown_core::open_input(candidates_path)
        .with_context(|| format!("Failed to open {}", candidates_path.display()))?;
    let candidates = crown_core::parse_candidates(reader, &candidates_path.display().to_string())?;

    let mut accepted = 0;
    for (line, candidate) in candidates.iter().enumerate() {
        let verdict = crown_cover::verify_cover(&graph, candidate, k);
        if let Verdict::No { reason } = &verdict {
            tracing::debug!("Candidate {} rejected: {:?}", line + 1, reason);
        } else {
            accepted += 1;
        }
        println!("{}", verdict);
    }

    tracing::info!(
        "{} of {} candidates are vertex covers of size {} ({:.2?})",
        accepted,
        candidates.len(),
        k,
        started.elapsed()
    );
    Ok(())
}
