//! Graph Nodes
//!
//! This module defines the value types that live in the actor graph: actor
//! and movie identities, the movie label carried by every edge, and the
//! actor node with its adjacency list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Release year of a movie.
pub type Year = u16;

/// Dense identifier for an actor in the graph.
///
/// Actor ids are assigned in first-seen order starting at 0, so they double
/// as indexes into every per-actor table (nodes, search state, disjoint set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(usize);

impl ActorId {
    /// Wrap a dense index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ActorId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Dense identifier for a movie in the cast table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(usize);

impl MovieId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A movie: the label carried by every co-starring edge.
///
/// Two movies are the same only if both title and year match; remakes that
/// reuse a title are distinct labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Year,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: Year) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }

    /// Edge cost for weighted search: older movies cost more.
    ///
    /// Fails for movies released after `reference_year`, since a negative
    /// cost would break Dijkstra's finalization rule.
    pub fn cost(&self, reference_year: Year) -> Result<u64> {
        edge_cost(self.year, reference_year)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#@{}", self.title, self.year)
    }
}

pub(crate) fn edge_cost(year: Year, reference_year: Year) -> Result<u64> {
    reference_year
        .checked_sub(year)
        .map(u64::from)
        .ok_or(GraphError::InvalidWeight {
            year,
            reference_year,
        })
}

/// A directed adjacency entry.
///
/// The year is copied out of the movie table so the weighted search can
/// derive costs without a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: ActorId,
    pub movie: MovieId,
    pub year: Year,
}

/// An actor in the graph.
#[derive(Debug, Clone)]
pub struct ActorNode {
    /// Identifier of this actor.
    id: ActorId,

    /// Outgoing edges in insertion order. Parallel edges to the same
    /// neighbor are kept, one per shared movie.
    edges: Vec<Edge>,
}

impl ActorNode {
    pub fn new(id: ActorId) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Append an adjacency entry.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// All outgoing edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges that lead to `target`.
    pub fn edges_to(&self, target: ActorId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.target == target)
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}
