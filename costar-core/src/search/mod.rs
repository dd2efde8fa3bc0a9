//! Path Search
//!
//! Shortest-path search over the actor graph, and reconstruction of the
//! resulting predecessor chains into printable paths.
//!
//! # Algorithms
//!
//! - [`breadth_first`]: fewest shared-movie hops.
//! - [`dijkstra`]: lowest recency-weighted cost, where an edge costs
//!   `reference_year - movie.year`, so paths through recent movies win.
//!
//! # Search State
//!
//! Every search writes into a caller-supplied [`SearchState`] that it resets
//! first. The graph is only ever borrowed immutably, so several searches can
//! share one graph as long as each has its own state table. This is what
//! [`PathFinder`] does to run query batches in parallel.

mod bfs;
mod dijkstra;
mod finder;
mod path;

pub use bfs::breadth_first;
pub use dijkstra::dijkstra;
pub use finder::{PathFinder, PathfinderConfig, Weighting, DEFAULT_REFERENCE_YEAR};
pub use path::{reconstruct_path, ConnectionPath, EdgeChoice, Hop};

use crate::graph::ActorId;

/// Whether a search may stop once the target's result is final.
///
/// Stopping early never changes the distance or predecessor recorded for
/// the target; it only leaves other nodes unexplored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarlyExit {
    /// Stop as soon as the target's distance is settled.
    #[default]
    AtTarget,

    /// Explore everything reachable from the source.
    Exhaustive,
}

/// Per-node bookkeeping for one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct NodeState {
    /// Distance from the source; `None` means not reached.
    distance: Option<u64>,

    /// Node this one was reached from.
    predecessor: Option<ActorId>,

    /// Set once the distance can no longer improve.
    finalized: bool,
}

/// Search state for every node of a graph, owned by one traversal.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    nodes: Vec<NodeState>,
}

impl SearchState {
    /// Create a state table for a graph of `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            nodes: vec![NodeState::default(); node_count],
        }
    }

    /// Reset every node to unreached, resizing to `node_count`.
    pub fn reset(&mut self, node_count: usize) {
        self.nodes.clear();
        self.nodes.resize(node_count, NodeState::default());
    }

    /// Distance from the source, `None` if the node was not reached.
    pub fn distance(&self, id: ActorId) -> Option<u64> {
        self.nodes.get(id.index()).and_then(|node| node.distance)
    }

    /// Node this one was reached from. Always `None` for the source.
    pub fn predecessor(&self, id: ActorId) -> Option<ActorId> {
        self.nodes.get(id.index()).and_then(|node| node.predecessor)
    }

    pub fn is_reached(&self, id: ActorId) -> bool {
        self.distance(id).is_some()
    }

    pub fn is_finalized(&self, id: ActorId) -> bool {
        self.nodes.get(id.index()).is_some_and(|node| node.finalized)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn start(&mut self, source: ActorId) {
        self.nodes[source.index()].distance = Some(0);
    }

    fn reach(&mut self, id: ActorId, distance: u64, predecessor: ActorId) {
        let node = &mut self.nodes[id.index()];
        node.distance = Some(distance);
        node.predecessor = Some(predecessor);
    }

    fn finalize(&mut self, id: ActorId) {
        self.nodes[id.index()].finalized = true;
    }
}
