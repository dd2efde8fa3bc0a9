//! Error types for the graph engine

use thiserror::Error;

use crate::graph::{ActorId, Year};

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Unknown actor: {0}")]
    UnknownActor(String),

    #[error("Node {0} is not in the graph")]
    NodeOutOfRange(usize),

    #[error("Actors not connected: {from} -> {to}")]
    NotConnected { from: ActorId, to: ActorId },

    #[error("Movie year {year} is after the reference year {reference_year}")]
    InvalidWeight { year: Year, reference_year: Year },
}

impl GraphError {
    /// Whether a batch run can report this error for a single query and
    /// keep going.
    pub fn is_per_query(&self) -> bool {
        matches!(
            self,
            GraphError::UnknownActor(_) | GraphError::NotConnected { .. }
        )
    }
}
