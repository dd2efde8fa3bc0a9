//! actorconnections: the year each pair of actors first becomes connected.
//!
//! Run: actorconnections movie_casts.tsv pairs.tsv out.tsv [ufind|bfs]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use costar_core::connectivity::{resolve_connections, ConnectivityAlgorithm};
use costar_core::io::{read_cast_file, read_pairs_file, write_connections, OutputFormat};
use costar_core::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "actorconnections",
    version,
    about = "Find the year pairs of actors first become connected"
)]
struct Args {
    /// Cast file: TSV of actor, movie, year with a header line
    movie_casts: PathBuf,

    /// Query file: TSV of actor pairs with a header line
    pairs: PathBuf,

    /// Where to write the years
    output: PathBuf,

    /// Connectivity algorithm
    #[arg(value_enum, default_value_t = ConnectivityAlgorithm::UnionFind)]
    algorithm: ConnectivityAlgorithm,

    /// Write one JSON object per query instead of the text format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let cast = read_cast_file(&args.movie_casts)
        .with_context(|| format!("Failed to read {}", args.movie_casts.display()))?;
    info!(
        actors = cast.actor_count(),
        movies = cast.movie_count(),
        "Loaded cast table"
    );

    let pairs = read_pairs_file(&args.pairs)
        .with_context(|| format!("Failed to read {}", args.pairs.display()))?;

    let results = resolve_connections(&cast, &pairs, args.algorithm);

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut out = BufWriter::new(file);
    write_connections(&mut out, &results, OutputFormat::from_json_flag(args.json))?;
    out.flush()?;

    Ok(())
}
