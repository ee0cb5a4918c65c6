//! graph2rdf: convert an annotated property graph document to N-Quads

use anyhow::{Context, Result};
use clap::Parser;
use graph2rdf::graph::json;
use graph2rdf::{ConversionConfig, GraphStore, GraphToRdf, NQuadsSerializer};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graph2rdf", version, about = "Convert an annotated property graph to RDF N-Quads")]
struct Cli {
    /// Graph document (JSON); reads stdin when absent or `-`
    graph: Option<PathBuf>,

    /// YAML conversion config
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Write N-Quads here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Reject malformed IRIs and language tags
    #[arg(long)]
    strict_iris: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ConversionConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ConversionConfig::default(),
    };
    if cli.strict_iris {
        config = config.with_strict_iris(true);
    }

    let graph = read_graph(cli.graph.as_deref())?;
    info!(
        "Loaded graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let quads = GraphToRdf::with_config(&graph, config)
        .convert_to_quads()
        .context("conversion failed")?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            NQuadsSerializer::write_to(&quads, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            NQuadsSerializer::write_to(&quads, io::stdout().lock())
                .context("failed to write to stdout")?;
        }
    }
    info!("Wrote {} quads", quads.len());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_graph(path: Option<&std::path::Path>) -> Result<GraphStore> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to read graph {}", path.display()))
        }
        _ => json::from_reader(io::stdin().lock()).context("failed to read graph from stdin"),
    }
}
