//! scc: strongly connected components of a directed edge list.
//!
//! Run: scc retweets.txt out_components.txt

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use costar_core::graph::DiGraph;
use costar_core::io::{read_edge_list_file, write_components, OutputFormat};
use costar_core::scc::strongly_connected_components;
use costar_core::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "scc", version, about = "Strongly connected components of a directed graph")]
struct Args {
    /// Edge list: one whitespace-separated `source target` pair per line
    edges: PathBuf,

    /// Where to write the components, one per line
    output: PathBuf,

    /// Write each component as a JSON array instead of space-separated ids
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let edges = read_edge_list_file(&args.edges)
        .with_context(|| format!("Failed to read {}", args.edges.display()))?;
    let graph = DiGraph::from_edges(edges);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Loaded directed graph"
    );

    let start = Instant::now();
    let components = strongly_connected_components(&graph);
    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        components = components.len(),
        "Computed strongly connected components"
    );

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    write_components(&mut out, &components, OutputFormat::from_json_flag(args.json))?;
    out.flush()?;

    Ok(())
}
