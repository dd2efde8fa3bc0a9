//! Connectivity
//!
//! Incremental connectivity: a disjoint-set forest and the driver that
//! replays movies year by year to find when actor pairs first connect.

mod temporal;
mod union_find;

pub use temporal::{
    first_connection_years, resolve_connections, BfsOracle, ConnectionYear,
    ConnectivityAlgorithm, ConnectivityOracle, UnionFindOracle, NEVER_CONNECTED,
};
pub use union_find::DisjointSet;
