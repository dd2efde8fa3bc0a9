//! Graph Model
//!
//! This module implements the graph containers the algorithms run on.
//!
//! # Overview
//!
//! There are two graph flavours:
//!
//! - The actor graph, a multigraph where nodes are actors and each edge is
//!   labeled with the movie the two actors share. Ids are dense and assigned
//!   in first-seen order by the [`CastTable`].
//! - The generic directed graph, unlabeled, keyed by sparse external ids.
//!
//! # Design Decisions
//!
//! 1. Nodes live in arenas indexed by id. Name and id lookups return
//!    `Option` instead of a sentinel index.
//!
//! 2. The graphs hold topology only. Traversal state (distances,
//!    predecessors, visited flags) is allocated by each traversal, so one
//!    graph can serve many searches at once.
//!
//! 3. Parallel edges are never merged. Two actors who share three movies are
//!    joined by three edges in each direction, and path rendering picks among
//!    them.

mod actor_graph;
mod cast;
mod digraph;
mod node;

pub use actor_graph::ActorGraph;
pub use cast::{Cast, CastTable};
pub use digraph::{DiGraph, NodeId};
pub use node::{ActorId, ActorNode, Edge, Movie, MovieId, Year};
pub(crate) use node::edge_cost;
