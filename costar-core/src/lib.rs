//! Costar Core
//!
//! This crate computes relationships over a bipartite actor-movie dataset.
//! It implements:
//!
//! - Shortest connections between two actors, by fewest shared movies or by
//!   a recency-weighted cost
//! - The year two actors first become connected as movies are released
//! - Strongly connected components of arbitrary directed graphs
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: cast table, actor multigraph and generic directed graph
//! - `search`: BFS, Dijkstra and path reconstruction
//! - `connectivity`: disjoint sets and the year-by-year replay driver
//! - `scc`: Kosaraju's strongly connected components
//! - `io`: input readers and result writers used by the binaries
//!
//! # Example
//!
//! ```rust
//! use costar_core::graph::{ActorGraph, CastTable, Movie};
//! use costar_core::search::{PathFinder, PathfinderConfig};
//!
//! let mut cast = CastTable::new();
//! cast.add_role("A", Movie::new("X", 2000));
//! cast.add_role("B", Movie::new("X", 2000));
//! cast.add_role("B", Movie::new("Y", 2005));
//! cast.add_role("C", Movie::new("Y", 2005));
//!
//! let graph = ActorGraph::from_cast(cast);
//! let finder = PathFinder::new(&graph, PathfinderConfig::default()).unwrap();
//! let path = finder.find_by_name("A", "C").unwrap();
//! assert_eq!(path.to_string(), "(A)--[X#@2000]-->(B)--[Y#@2005]-->(C)");
//! ```

pub mod connectivity;
pub mod error;
pub mod graph;
pub mod io;
pub mod scc;
pub mod search;
pub mod telemetry;

pub use error::{GraphError, Result};
