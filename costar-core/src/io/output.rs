//! Result Writers
//!
//! Serializes query results either in the fixed text formats or as JSON
//! lines (one object per query, no header).

use std::io::Write;

use serde::Serialize;

use crate::connectivity::ConnectionYear;
use crate::error::Result;
use crate::scc::Component;
use crate::search::ConnectionPath;

/// Header line of path output.
pub const PATH_HEADER: &str = "(actor)--[movie#@year]-->(actor)--...";

/// Line written for a pair with no connecting path.
pub const NOT_CONNECTED: &str = "Actors/actresses not connected!";

/// Header line of first-connection output.
pub const CONNECTIONS_HEADER: &str = "Actor1\tActor2\tYear";

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    JsonLines,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::JsonLines
        } else {
            OutputFormat::Text
        }
    }
}

/// Result of one path query, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRecord {
    pub from: String,
    pub to: String,

    /// `None` when the actors are not connected or unknown.
    pub path: Option<ConnectionPath>,
}

pub fn write_paths<W: Write>(out: &mut W, records: &[PathRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", PATH_HEADER)?;
            for record in records {
                match &record.path {
                    Some(path) => writeln!(out, "{}", path)?,
                    None => writeln!(out, "{}", NOT_CONNECTED)?,
                }
            }
        }
        OutputFormat::JsonLines => write_json_lines(out, records)?,
    }
    Ok(())
}

pub fn write_connections<W: Write>(
    out: &mut W,
    results: &[ConnectionYear],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", CONNECTIONS_HEADER)?;
            for result in results {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    result.actor1,
                    result.actor2,
                    result.year_or_never()
                )?;
            }
        }
        OutputFormat::JsonLines => write_json_lines(out, results)?,
    }
    Ok(())
}

pub fn write_components<W: Write>(
    out: &mut W,
    components: &[Component],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for component in components {
                let line = component
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::JsonLines => write_json_lines(out, components)?,
    }
    Ok(())
}

fn write_json_lines<W: Write, T: Serialize>(out: &mut W, items: &[T]) -> Result<()> {
    for item in items {
        serde_json::to_writer(&mut *out, item)?;
        writeln!(out)?;
    }
    Ok(())
}
