//! Path Finder
//!
//! Ties the searches and path reconstruction together behind one query API,
//! resolving actor names and choosing the algorithm and edge-display policy
//! from a [`PathfinderConfig`].
//!
//! Batches of queries run on the rayon pool. The graph is shared read-only
//! and every worker thread owns one [`SearchState`], reset per query.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{GraphError, Result};
use crate::graph::{edge_cost, ActorGraph, ActorId, Year};

use super::path::{reconstruct_path, ConnectionPath, EdgeChoice};
use super::{breadth_first, dijkstra, EarlyExit, SearchState};

/// "Present day" for the bundled movie dataset.
pub const DEFAULT_REFERENCE_YEAR: Year = 2016;

/// How edges are weighted when searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Weighting {
    /// Every shared movie counts as one hop.
    #[default]
    #[value(name = "u")]
    Unweighted,

    /// Shared movies cost `reference_year - year`.
    #[value(name = "w")]
    Weighted,
}

impl Weighting {
    fn edge_choice(self) -> EdgeChoice {
        match self {
            Weighting::Unweighted => EdgeChoice::FirstListed,
            Weighting::Weighted => EdgeChoice::MostRecent,
        }
    }
}

/// Settings for path queries.
#[derive(Debug, Clone, Copy)]
pub struct PathfinderConfig {
    pub weighting: Weighting,

    /// Year used to derive weighted edge costs.
    pub reference_year: Year,

    pub early_exit: EarlyExit,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            weighting: Weighting::Unweighted,
            reference_year: DEFAULT_REFERENCE_YEAR,
            early_exit: EarlyExit::AtTarget,
        }
    }
}

impl PathfinderConfig {
    pub fn weighted(reference_year: Year) -> Self {
        Self {
            weighting: Weighting::Weighted,
            reference_year,
            ..Self::default()
        }
    }
}

/// Answers shortest-connection queries over a shared actor graph.
pub struct PathFinder<'g> {
    graph: &'g ActorGraph,
    config: PathfinderConfig,
}

impl<'g> PathFinder<'g> {
    /// Create a path finder.
    ///
    /// Weighted configurations are checked against the graph up front: a
    /// movie newer than the reference year is an [`GraphError::InvalidWeight`].
    pub fn new(graph: &'g ActorGraph, config: PathfinderConfig) -> Result<Self> {
        if config.weighting == Weighting::Weighted {
            if let Some(latest) = graph.latest_year() {
                edge_cost(latest, config.reference_year)?;
            }
        }
        Ok(Self { graph, config })
    }

    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// Shortest connection between two actors, with a fresh search state.
    pub fn find(&self, from: ActorId, to: ActorId) -> Result<ConnectionPath> {
        let mut state = SearchState::new(self.graph.actor_count());
        self.find_with_state(&mut state, from, to)
    }

    /// Shortest connection between two actors, reusing `state`.
    pub fn find_with_state(
        &self,
        state: &mut SearchState,
        from: ActorId,
        to: ActorId,
    ) -> Result<ConnectionPath> {
        if !self.graph.contains(to) {
            return Err(GraphError::NodeOutOfRange(to.index()));
        }
        match self.config.weighting {
            Weighting::Unweighted => {
                breadth_first(self.graph, state, from, Some(to), self.config.early_exit)?
            }
            Weighting::Weighted => dijkstra(
                self.graph,
                state,
                from,
                Some(to),
                self.config.reference_year,
                self.config.early_exit,
            )?,
        }
        reconstruct_path(self.graph, state, from, to, self.config.weighting.edge_choice())
    }

    /// Shortest connection between two actors given by name.
    pub fn find_by_name(&self, from: &str, to: &str) -> Result<ConnectionPath> {
        let mut state = SearchState::new(self.graph.actor_count());
        self.find_by_name_with_state(&mut state, from, to)
    }

    fn find_by_name_with_state(
        &self,
        state: &mut SearchState,
        from: &str,
        to: &str,
    ) -> Result<ConnectionPath> {
        info!("Computing path for ({}) -> ({})", from, to);
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        self.find_with_state(state, source, target)
    }

    fn resolve(&self, name: &str) -> Result<ActorId> {
        self.graph
            .lookup(name)
            .ok_or_else(|| GraphError::UnknownActor(name.to_string()))
    }

    /// Run a batch of named queries in parallel.
    ///
    /// Results come back in query order.
    pub fn find_all<S>(&self, queries: &[(S, S)]) -> Vec<Result<ConnectionPath>>
    where
        S: AsRef<str> + Sync,
    {
        let node_count = self.graph.actor_count();
        debug!(queries = queries.len(), "Running path query batch");
        queries
            .par_iter()
            .map_init(
                || SearchState::new(node_count),
                |state, (from, to)| self.find_by_name_with_state(state, from.as_ref(), to.as_ref()),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CastTable, Movie};

    fn three_actors() -> ActorGraph {
        let mut cast = CastTable::new();
        cast.add_role("A", Movie::new("X", 2000));
        cast.add_role("B", Movie::new("X", 2000));
        cast.add_role("B", Movie::new("Y", 2005));
        cast.add_role("C", Movie::new("Y", 2005));
        ActorGraph::from_cast(cast)
    }

    #[test]
    fn unweighted_query_by_name() {
        let graph = three_actors();
        let finder = PathFinder::new(&graph, PathfinderConfig::default()).unwrap();

        let path = finder.find_by_name("A", "C").unwrap();
        assert_eq!(path.to_string(), "(A)--[X#@2000]-->(B)--[Y#@2005]-->(C)");
        assert_eq!(path.distance, 2);
    }

    #[test]
    fn weighted_query_cost() {
        let graph = three_actors();
        let finder = PathFinder::new(&graph, PathfinderConfig::weighted(2016)).unwrap();

        let path = finder.find_by_name("A", "C").unwrap();
        assert_eq!(path.to_string(), "(A)--[X#@2000]-->(B)--[Y#@2005]-->(C)");
        assert_eq!(path.distance, 16 + 11);
    }

    #[test]
    fn unknown_actor_is_reported() {
        let graph = three_actors();
        let finder = PathFinder::new(&graph, PathfinderConfig::default()).unwrap();

        let err = finder.find_by_name("A", "Nobody").unwrap_err();
        assert!(matches!(err, GraphError::UnknownActor(ref name) if name == "Nobody"));
        assert!(err.is_per_query());
    }

    #[test]
    fn weighted_config_rejects_future_movies() {
        let graph = three_actors();
        let result = PathFinder::new(&graph, PathfinderConfig::weighted(2001));
        assert!(matches!(result, Err(GraphError::InvalidWeight { year: 2005, .. })));
    }

    #[test]
    fn batch_preserves_query_order() {
        let graph = three_actors();
        let finder = PathFinder::new(&graph, PathfinderConfig::default()).unwrap();
        let queries = [("A", "C"), ("C", "A"), ("A", "Nobody"), ("B", "B")];

        let results = finder.find_all(&queries);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().end(), "C");
        assert_eq!(results[1].as_ref().unwrap().end(), "A");
        assert!(results[2].is_err());
        assert_eq!(results[3].as_ref().unwrap().to_string(), "(B)");
    }

    #[test]
    fn batch_matches_sequential_queries() {
        let graph = three_actors();
        let finder = PathFinder::new(&graph, PathfinderConfig::weighted(2016)).unwrap();
        let queries = vec![
            ("A".to_string(), "C".to_string()),
            ("B".to_string(), "A".to_string()),
        ];

        let batch = finder.find_all(&queries);
        for ((from, to), result) in queries.iter().zip(batch) {
            assert_eq!(result.unwrap(), finder.find_by_name(from, to).unwrap());
        }
    }
}
