//! Temporal Connectivity
//!
//! Answers "in which year did these two actors first become connected?" by
//! replaying the movie table one release year at a time.
//!
//! # Algorithm
//!
//! 1. Group movies by year, years ascending.
//! 2. For each year, feed every movie of that year to a
//!    [`ConnectivityOracle`].
//! 3. Ask the oracle about every still-unresolved query pair; pairs that are
//!    now connected are stamped with the current year and dropped from the
//!    unresolved list, so a stamp is never revised.
//!
//! Two oracles are provided. [`UnionFindOracle`] unions each cast into one
//! set. [`BfsOracle`] grows an actor graph and runs a reachability search per
//! query; it is the slow baseline and must agree with the union-find oracle
//! on every input.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::graph::{ActorGraph, ActorId, CastTable, MovieId, Year};
use crate::search::{breadth_first, EarlyExit, SearchState};

use super::union_find::DisjointSet;

/// Marker written in place of a year for pairs that never connect.
pub const NEVER_CONNECTED: Year = 9999;

/// Which oracle the driver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ConnectivityAlgorithm {
    /// Disjoint-set unions, near-constant time per query.
    #[default]
    #[value(name = "ufind")]
    UnionFind,

    /// A fresh BFS per query over the graph built so far.
    #[value(name = "bfs")]
    Bfs,
}

/// Incremental connectivity over a growing set of movies.
pub trait ConnectivityOracle {
    /// Make every actor in `movie`'s cast mutually connected.
    fn add_movie(&mut self, cast: &CastTable, movie: MovieId);

    /// Whether `a` and `b` are connected by the movies added so far.
    fn connected(&mut self, a: ActorId, b: ActorId) -> bool;
}

/// Oracle backed by a [`DisjointSet`].
pub struct UnionFindOracle {
    sets: DisjointSet,
}

impl UnionFindOracle {
    pub fn new(actor_count: usize) -> Self {
        Self {
            sets: DisjointSet::new(actor_count),
        }
    }
}

impl ConnectivityOracle for UnionFindOracle {
    fn add_movie(&mut self, cast: &CastTable, movie: MovieId) {
        // chaining neighbours is enough; union is transitive
        for pair in cast.cast(movie).windows(2) {
            self.sets.union(pair[0].index(), pair[1].index());
        }
    }

    fn connected(&mut self, a: ActorId, b: ActorId) -> bool {
        self.sets.connected(a.index(), b.index())
    }
}

/// Oracle that rebuilds reachability with BFS on every query.
pub struct BfsOracle {
    graph: ActorGraph,
    state: SearchState,
}

impl BfsOracle {
    /// Start from an edgeless graph over the actors of `cast`.
    pub fn new(cast: &CastTable) -> Self {
        let graph = ActorGraph::new(cast.clone());
        let state = SearchState::new(graph.actor_count());
        Self { graph, state }
    }
}

impl ConnectivityOracle for BfsOracle {
    fn add_movie(&mut self, _cast: &CastTable, movie: MovieId) {
        if let Err(err) = self.graph.add_movie(movie) {
            warn!(error = %err, "Skipping movie missing from the cast table");
        }
    }

    fn connected(&mut self, a: ActorId, b: ActorId) -> bool {
        match breadth_first(&self.graph, &mut self.state, a, Some(b), EarlyExit::AtTarget) {
            Ok(()) => self.state.is_reached(b),
            Err(_) => false,
        }
    }
}

/// First-connection result for one named query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionYear {
    pub actor1: String,
    pub actor2: String,

    /// First year the two are connected, `None` if never.
    pub year: Option<Year>,
}

impl ConnectionYear {
    /// The year, or [`NEVER_CONNECTED`].
    pub fn year_or_never(&self) -> Year {
        self.year.unwrap_or(NEVER_CONNECTED)
    }
}

/// Stamp each pair with the first year it becomes connected.
///
/// Results are in `pairs` order; `None` means the pair is never connected.
pub fn first_connection_years<O>(
    cast: &CastTable,
    oracle: &mut O,
    pairs: &[(ActorId, ActorId)],
) -> Vec<Option<Year>>
where
    O: ConnectivityOracle + ?Sized,
{
    let mut years = vec![None; pairs.len()];
    let mut unresolved: Vec<usize> = (0..pairs.len()).collect();

    for (year, movies) in cast.movies_by_year() {
        if unresolved.is_empty() {
            break;
        }
        for movie in movies {
            oracle.add_movie(cast, movie);
        }
        unresolved.retain(|&query| {
            let (a, b) = pairs[query];
            if oracle.connected(a, b) {
                years[query] = Some(year);
                false
            } else {
                true
            }
        });
        debug!(year, unresolved = unresolved.len(), "Processed year");
    }

    years
}

/// Resolve named query pairs with the chosen algorithm.
///
/// Pairs naming an unknown actor are logged and reported as never connected.
pub fn resolve_connections<S>(
    cast: &CastTable,
    queries: &[(S, S)],
    algorithm: ConnectivityAlgorithm,
) -> Vec<ConnectionYear>
where
    S: AsRef<str>,
{
    let mut known = Vec::with_capacity(queries.len());
    let mut slots = Vec::with_capacity(queries.len());
    for (index, (from, to)) in queries.iter().enumerate() {
        let (from, to) = (from.as_ref(), to.as_ref());
        match (cast.lookup(from), cast.lookup(to)) {
            (Some(a), Some(b)) => {
                known.push((a, b));
                slots.push(index);
            }
            _ => warn!("Unknown actor in query ({}) -> ({})", from, to),
        }
    }

    let start = Instant::now();
    let years = match algorithm {
        ConnectivityAlgorithm::UnionFind => {
            info!("Running union-find");
            let mut oracle = UnionFindOracle::new(cast.actor_count());
            first_connection_years(cast, &mut oracle, &known)
        }
        ConnectivityAlgorithm::Bfs => {
            info!("Running BFS");
            let mut oracle = BfsOracle::new(cast);
            first_connection_years(cast, &mut oracle, &known)
        }
    };
    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        queries = known.len(),
        "Resolved first connection years"
    );

    let mut results: Vec<ConnectionYear> = queries
        .iter()
        .map(|(from, to)| ConnectionYear {
            actor1: from.as_ref().to_string(),
            actor2: to.as_ref().to_string(),
            year: None,
        })
        .collect();
    for (slot, year) in slots.into_iter().zip(years) {
        results[slot].year = year;
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Movie;

    fn two_years() -> CastTable {
        let mut cast = CastTable::new();
        cast.add_role("A", Movie::new("X", 2000));
        cast.add_role("B", Movie::new("X", 2000));
        cast.add_role("B", Movie::new("Y", 2005));
        cast.add_role("C", Movie::new("Y", 2005));
        cast.add_role("D", Movie::new("Z", 2003));
        cast
    }

    fn ids(cast: &CastTable, a: &str, b: &str) -> (ActorId, ActorId) {
        (cast.lookup(a).unwrap(), cast.lookup(b).unwrap())
    }

    #[test]
    fn transitive_connection_uses_later_year() {
        let cast = two_years();
        let pairs = [ids(&cast, "A", "C"), ids(&cast, "A", "B")];

        let mut oracle = UnionFindOracle::new(cast.actor_count());
        let years = first_connection_years(&cast, &mut oracle, &pairs);
        assert_eq!(years, vec![Some(2005), Some(2000)]);
    }

    #[test]
    fn disconnected_pair_is_never_stamped() {
        let cast = two_years();
        let pairs = [ids(&cast, "A", "D")];

        let mut oracle = UnionFindOracle::new(cast.actor_count());
        let years = first_connection_years(&cast, &mut oracle, &pairs);
        assert_eq!(years, vec![None]);
    }

    #[test]
    fn bfs_oracle_agrees_with_union_find() {
        let cast = two_years();
        let names = ["A", "B", "C", "D"];
        let mut pairs = Vec::new();
        for a in names {
            for b in names {
                pairs.push(ids(&cast, a, b));
            }
        }

        let mut union_find = UnionFindOracle::new(cast.actor_count());
        let mut bfs = BfsOracle::new(&cast);
        assert_eq!(
            first_connection_years(&cast, &mut union_find, &pairs),
            first_connection_years(&cast, &mut bfs, &pairs)
        );
    }

    #[test]
    fn same_actor_connects_in_first_year() {
        let cast = two_years();
        let pairs = [ids(&cast, "C", "C")];

        let mut oracle = UnionFindOracle::new(cast.actor_count());
        assert_eq!(first_connection_years(&cast, &mut oracle, &pairs), vec![Some(2000)]);
    }

    #[test]
    fn named_queries_report_unknown_actors_as_never() {
        let cast = two_years();
        let queries = [("A", "C"), ("A", "Nobody"), ("B", "A")];

        let results = resolve_connections(&cast, &queries, ConnectivityAlgorithm::UnionFind);
        assert_eq!(results[0].year, Some(2005));
        assert_eq!(results[1].year, None);
        assert_eq!(results[1].year_or_never(), NEVER_CONNECTED);
        assert_eq!(results[2].year, Some(2000));
        assert_eq!(results[2].actor1, "B");
    }
}
