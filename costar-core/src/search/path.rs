//! Path Reconstruction
//!
//! Turns the predecessor chain left by a search into a printable path:
//!
//! ```text
//! (Kevin Bacon)--[Apollo 13#@1995]-->(Tom Hanks)--[Big#@1988]-->(Elizabeth Perkins)
//! ```
//!
//! Two actors may share several movies, so each hop has to choose one of
//! the parallel edges to display. The choice depends on the search that
//! produced the chain; see [`EdgeChoice`].

use std::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{ActorGraph, ActorId, Edge, Movie};

use super::SearchState;

/// Which parallel edge a hop displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeChoice {
    /// The first matching edge in adjacency order (unweighted search).
    FirstListed,

    /// The edge with the latest year, first one on ties (weighted search).
    MostRecent,
}

/// One step of a path: the movie crossed and the actor reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub movie: Movie,
    pub actor: String,
}

/// A reconstructed connection between two actors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionPath {
    /// Actor the path starts from.
    pub start: String,

    /// Hops in order from `start` to the target.
    pub hops: Vec<Hop>,

    /// Distance recorded by the search: hop count for BFS, accumulated
    /// cost for Dijkstra.
    pub distance: u64,
}

impl ConnectionPath {
    /// Actor the path ends at.
    pub fn end(&self) -> &str {
        self.hops.last().map_or(self.start.as_str(), |hop| hop.actor.as_str())
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Actor names from start to end.
    pub fn actors(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.start.as_str()).chain(self.hops.iter().map(|hop| hop.actor.as_str()))
    }
}

impl fmt::Display for ConnectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.start)?;
        for hop in &self.hops {
            write!(f, "--[{}]-->({})", hop.movie, hop.actor)?;
        }
        Ok(())
    }
}

/// Walk the predecessor chain from `target` back to `source`.
///
/// Fails with [`GraphError::NotConnected`] when the chain stops before
/// reaching `source`.
pub fn reconstruct_path(
    graph: &ActorGraph,
    state: &SearchState,
    source: ActorId,
    target: ActorId,
    choice: EdgeChoice,
) -> Result<ConnectionPath> {
    let not_connected = || GraphError::NotConnected {
        from: source,
        to: target,
    };

    let distance = state.distance(target).ok_or_else(not_connected)?;

    let mut chain = vec![target];
    let mut current = target;
    while current != source {
        current = state.predecessor(current).ok_or_else(not_connected)?;
        chain.push(current);
        // a chain longer than the node count has looped
        if chain.len() > graph.actor_count() {
            return Err(not_connected());
        }
    }
    chain.reverse();

    let start = actor_name(graph, source)?;
    let mut hops = Vec::with_capacity(chain.len() - 1);
    for pair in chain.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let edge = select_edge(graph, from, to, choice).ok_or(GraphError::NotConnected { from, to })?;
        let movie = graph
            .movie(edge.movie)
            .cloned()
            .ok_or(GraphError::NodeOutOfRange(edge.movie.index()))?;
        hops.push(Hop {
            movie,
            actor: actor_name(graph, to)?,
        });
    }

    Ok(ConnectionPath {
        start,
        hops,
        distance,
    })
}

fn actor_name(graph: &ActorGraph, id: ActorId) -> Result<String> {
    graph
        .name(id)
        .map(str::to_string)
        .ok_or(GraphError::NodeOutOfRange(id.index()))
}

fn select_edge(graph: &ActorGraph, from: ActorId, to: ActorId, choice: EdgeChoice) -> Option<&Edge> {
    let mut candidates = graph.node(from)?.edges_to(to);
    match choice {
        EdgeChoice::FirstListed => candidates.next(),
        EdgeChoice::MostRecent => candidates.fold(None, |best: Option<&Edge>, edge| match best {
            Some(kept) if kept.year >= edge.year => Some(kept),
            _ => Some(edge),
        }),
    }
}
