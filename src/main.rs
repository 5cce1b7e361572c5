//! Crown CLI entry point

use clap::{CommandFactory, Parser, Subcommand};
use crown_core::ScanOrder;
use crown_cover::ApproxStrategy;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "crown")]
#[command(about = "Crown decomposition kernelization for Vertex Cover", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to crown.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    reduce: ReduceArgs,
}

/// Arguments of the bare `crown <INPUT>` form.
#[derive(clap::Args)]
struct ReduceArgs {
    /// Edge-list file, one `u v` pair per line. A file named like a
    /// subcommand must be given with a path prefix, e.g. `./approx`
    input: Option<PathBuf>,

    /// Crown head output file
    #[arg(long)]
    crown_out: Option<PathBuf>,

    /// Reduced graph output file
    #[arg(long)]
    reduced_out: Option<PathBuf>,

    /// Write a JSON run report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Repeat crown rounds until none is found
    #[arg(long)]
    exhaustive: bool,

    /// Maximal matching scan order: sorted or insertion
    #[arg(long)]
    scan_order: Option<ScanOrder>,
}

#[derive(Subcommand)]
enum Commands {
    /// Greedy vertex cover approximation
    Approx {
        input: PathBuf,

        /// max-degree or edge-pick
        #[arg(short, long, default_value = "max-degree")]
        strategy: ApproxStrategy,

        #[arg(short, long, default_value = crown_cover::APPROX_OUTPUT)]
        output: PathBuf,
    },
    /// Write the complement graph of a vertex cover instance
    Complement {
        input: PathBuf,

        /// Vertex cover size; reports the equivalent clique size
        #[arg(short)]
        k: Option<usize>,

        #[arg(short, long, default_value = crown_cover::COMPLEMENT_OUTPUT)]
        output: PathBuf,
    },
    /// Check candidate vertex covers, one per line
    Verify {
        graph: PathBuf,
        candidates: PathBuf,
        k: usize,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "crown={l},crown_core={l},crown_cover={l}",
            l = log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Crown v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Approx {
            input,
            strategy,
            output,
        }) => commands::approx(&input, strategy, &output),
        Some(Commands::Complement { input, k, output }) => {
            commands::complement(&input, k, &output)
        }
        Some(Commands::Verify {
            graph,
            candidates,
            k,
        }) => commands::verify(&graph, &candidates, k),
        Some(Commands::Version) => {
            println!("Crown v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            let ReduceArgs {
                input,
                crown_out,
                reduced_out,
                report,
                exhaustive,
                scan_order,
            } = cli.reduce;
            let Some(input) = input else {
                anyhow::bail!("missing input file\n\n{}", Cli::command().render_usage());
            };
            let overrides = commands::Overrides {
                crown_out,
                reduced_out,
                report,
                exhaustive,
                scan_order,
            };
            commands::reduce(&input, cli.config.as_deref(), overrides)
        }
    }
}
