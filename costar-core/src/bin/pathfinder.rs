//! pathfinder: shortest connections between pairs of actors.
//!
//! Run: pathfinder movie_casts.tsv u test_pairs.tsv out_paths.tsv

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use costar_core::graph::{ActorGraph, Year};
use costar_core::io::{read_cast_file, read_pairs_file, write_paths, OutputFormat, PathRecord};
use costar_core::search::{PathFinder, PathfinderConfig, Weighting, DEFAULT_REFERENCE_YEAR};
use costar_core::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "pathfinder", version, about = "Find the shortest connection between actors")]
struct Args {
    /// Cast file: TSV of actor, movie, year with a header line
    movie_casts: PathBuf,

    /// Edge weighting: `u` for shared-movie hops, `w` for recency-weighted cost
    #[arg(value_enum)]
    weighting: Weighting,

    /// Query file: TSV of actor pairs with a header line
    pairs: PathBuf,

    /// Where to write the paths
    output: PathBuf,

    /// "Present day" year used to derive weighted edge costs
    #[arg(long, env = "COSTAR_REFERENCE_YEAR", default_value_t = DEFAULT_REFERENCE_YEAR)]
    reference_year: Year,

    /// Write one JSON object per query instead of the text format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let cast = read_cast_file(&args.movie_casts)
        .with_context(|| format!("Failed to read {}", args.movie_casts.display()))?;
    let graph = ActorGraph::from_cast(cast);
    info!(
        actors = graph.actor_count(),
        edges = graph.edge_count(),
        "Loaded actor graph"
    );

    let pairs = read_pairs_file(&args.pairs)
        .with_context(|| format!("Failed to read {}", args.pairs.display()))?;

    let config = PathfinderConfig {
        weighting: args.weighting,
        reference_year: args.reference_year,
        ..PathfinderConfig::default()
    };
    let finder = PathFinder::new(&graph, config)?;

    let start = Instant::now();
    let results = finder.find_all(&pairs);
    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        queries = pairs.len(),
        "Computed paths"
    );

    let mut records = Vec::with_capacity(pairs.len());
    for ((from, to), result) in pairs.into_iter().zip(results) {
        let path = match result {
            Ok(path) => Some(path),
            Err(err) if err.is_per_query() => {
                warn!("{}", err);
                None
            }
            Err(err) => return Err(err.into()),
        };
        records.push(PathRecord { from, to, path });
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    write_paths(&mut out, &records, OutputFormat::from_json_flag(args.json))?;
    out.flush()?;

    Ok(())
}
