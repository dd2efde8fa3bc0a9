//! Input Records
//!
//! Readers for the three input formats:
//!
//! - cast file: TSV with a header, `actor  movie  year` per row
//! - pair file: TSV with a header, `actor  actor` per row
//! - edge list: whitespace-separated `source target` integer pairs, no header
//!
//! Rows with the wrong number of fields or an unparsable number are logged
//! and skipped. Only I/O failures abort a read.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graph::{CastTable, Movie, NodeId, Year};

/// A pair of actor names from a query file.
pub type ActorPair = (String, String);

fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader)
}

/// Read TSV rows with exactly `fields` columns, skipping the rest.
fn read_rows<R, F>(reader: R, fields: usize, mut on_row: F) -> Result<()>
where
    R: Read,
    F: FnMut(u64, &csv::StringRecord) -> Result<()>,
{
    let mut rdr = tsv_reader(reader);
    let mut record = csv::StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(error = %err, "Skipping unreadable record");
                continue;
            }
        }
        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() != fields {
            let skipped = GraphError::MalformedRecord {
                line,
                reason: format!("expected {} fields, found {}", fields, record.len()),
            };
            warn!("{}", skipped);
            continue;
        }
        match on_row(line, &record) {
            Ok(()) => {}
            Err(err @ GraphError::MalformedRecord { .. }) => warn!("{}", err),
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Read a cast file into a [`CastTable`].
pub fn read_cast<R: Read>(reader: R) -> Result<CastTable> {
    let mut cast = CastTable::new();
    let mut roles = 0usize;
    read_rows(reader, 3, |line, record| {
        let year: Year = record[2].trim().parse().map_err(|_| GraphError::MalformedRecord {
            line,
            reason: format!("invalid year '{}'", &record[2]),
        })?;
        cast.add_role(&record[0], Movie::new(&record[1], year));
        roles += 1;
        Ok(())
    })?;
    debug!(
        roles,
        actors = cast.actor_count(),
        movies = cast.movie_count(),
        "Read cast table"
    );
    Ok(cast)
}

pub fn read_cast_file(path: impl AsRef<Path>) -> Result<CastTable> {
    read_cast(File::open(path)?)
}

/// Read a two-column file of actor name pairs.
pub fn read_pairs<R: Read>(reader: R) -> Result<Vec<ActorPair>> {
    let mut pairs = Vec::new();
    read_rows(reader, 2, |_, record| {
        pairs.push((record[0].to_string(), record[1].to_string()));
        Ok(())
    })?;
    Ok(pairs)
}

pub fn read_pairs_file(path: impl AsRef<Path>) -> Result<Vec<ActorPair>> {
    read_pairs(File::open(path)?)
}

/// Read a whitespace-separated edge list.
///
/// Blank lines are ignored.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Vec<(NodeId, NodeId)>> {
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let parsed = match fields.as_slice() {
            [from, to] => from.parse::<NodeId>().ok().zip(to.parse::<NodeId>().ok()),
            _ => None,
        };
        match parsed {
            Some(edge) => edges.push(edge),
            None => warn!(
                "{}",
                GraphError::MalformedRecord {
                    line: index as u64 + 1,
                    reason: format!("expected two integer ids, found '{}'", line.trim()),
                }
            ),
        }
    }
    debug!(edges = edges.len(), "Read edge list");
    Ok(edges)
}

pub fn read_edge_list_file(path: impl AsRef<Path>) -> Result<Vec<(NodeId, NodeId)>> {
    read_edge_list(BufReader::new(File::open(path)?))
}
