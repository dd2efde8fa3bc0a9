//! Actor Graph
//!
//! The co-starring multigraph. Every actor is a node; every pair of actors
//! who share a movie is joined by two directed edges (one per direction)
//! labeled with that movie.
//!
//! Nodes live in a dense arena indexed by [`ActorId`], so the search engines
//! can keep their per-node state in plain vectors of the same length.

use tracing::debug;

use crate::error::{GraphError, Result};

use super::cast::CastTable;
use super::node::{ActorId, ActorNode, Edge, Movie, MovieId, Year};

/// The actor co-starring multigraph.
#[derive(Debug, Clone)]
pub struct ActorGraph {
    /// Names and casts; node labels are resolved through here.
    cast: CastTable,

    /// One node per actor, indexed by actor id.
    nodes: Vec<ActorNode>,

    /// Number of directed adjacency entries.
    edge_count: usize,
}

impl ActorGraph {
    /// Create a graph with a node for every actor in `cast` and no edges.
    pub fn new(cast: CastTable) -> Self {
        let nodes = (0..cast.actor_count())
            .map(|index| ActorNode::new(ActorId::new(index)))
            .collect();
        Self {
            cast,
            nodes,
            edge_count: 0,
        }
    }

    /// Build the full graph: one clique per movie.
    ///
    /// Every ordered pair of distinct cast members gets an edge, so two
    /// actors who share several movies are joined by several parallel edges.
    pub fn from_cast(cast: CastTable) -> Self {
        let mut graph = Self::new(cast);
        for index in 0..graph.cast.movie_count() {
            graph.link_cast(MovieId::new(index));
        }
        debug!(
            actors = graph.actor_count(),
            movies = graph.cast.movie_count(),
            edges = graph.edge_count,
            "Built actor graph"
        );
        graph
    }

    /// Add an actor. Adding a known name returns its existing id.
    pub fn add_actor(&mut self, name: &str) -> ActorId {
        let id = self.cast.add_actor(name);
        if id.index() == self.nodes.len() {
            self.nodes.push(ActorNode::new(id));
        }
        id
    }

    /// Append a directed edge `from -> to` labeled with `movie`.
    ///
    /// Callers wanting a symmetric relationship add both directions.
    pub fn add_edge(&mut self, from: ActorId, to: ActorId, movie: MovieId) -> Result<()> {
        if !self.contains(to) {
            return Err(GraphError::NodeOutOfRange(to.index()));
        }
        let year = self
            .cast
            .movie(movie)
            .map(|m| m.year)
            .ok_or(GraphError::NodeOutOfRange(movie.index()))?;
        let node = self
            .nodes
            .get_mut(from.index())
            .ok_or(GraphError::NodeOutOfRange(from.index()))?;
        node.add_edge(Edge {
            target: to,
            movie,
            year,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// Connect the cast of one movie pairwise, in both directions.
    ///
    /// Returns the number of directed edges added.
    pub fn add_movie(&mut self, movie: MovieId) -> Result<usize> {
        if self.cast.movie(movie).is_none() {
            return Err(GraphError::NodeOutOfRange(movie.index()));
        }
        Ok(self.link_cast(movie))
    }

    fn link_cast(&mut self, movie: MovieId) -> usize {
        let Some((label, members)) = self.cast.movie_entry(movie) else {
            return 0;
        };
        let year = label.year;
        let mut added = 0;
        for &from in members {
            for &to in members {
                if from == to {
                    continue;
                }
                self.nodes[from.index()].add_edge(Edge {
                    target: to,
                    movie,
                    year,
                });
                added += 1;
            }
        }
        self.edge_count += added;
        added
    }

    pub fn cast(&self) -> &CastTable {
        &self.cast
    }

    pub fn node(&self, id: ActorId) -> Option<&ActorNode> {
        self.nodes.get(id.index())
    }

    /// Outgoing edges of an actor; empty for unknown ids.
    pub fn edges(&self, id: ActorId) -> &[Edge] {
        self.nodes
            .get(id.index())
            .map(ActorNode::edges)
            .unwrap_or(&[])
    }

    pub fn contains(&self, id: ActorId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Look up an actor by name.
    pub fn lookup(&self, name: &str) -> Option<ActorId> {
        self.cast.lookup(name)
    }

    /// Display label of an actor.
    pub fn name(&self, id: ActorId) -> Option<&str> {
        self.cast.name(id)
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.cast.movie(id)
    }

    pub fn actor_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Most recent movie year known to the graph.
    pub fn latest_year(&self) -> Option<Year> {
        self.cast.latest_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cast() -> CastTable {
        let mut cast = CastTable::new();
        cast.add_role("A", Movie::new("X", 2000));
        cast.add_role("B", Movie::new("X", 2000));
        cast.add_role("C", Movie::new("X", 2000));
        cast.add_role("A", Movie::new("Y", 2005));
        cast.add_role("B", Movie::new("Y", 2005));
        cast
    }

    #[test]
    fn clique_per_movie() {
        let graph = ActorGraph::from_cast(sample_cast());

        // X: 3 actors -> 6 directed edges, Y: 2 actors -> 2 directed edges
        assert_eq!(graph.actor_count(), 3);
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn parallel_edges_survive_construction() {
        let graph = ActorGraph::from_cast(sample_cast());
        let a = graph.lookup("A").unwrap();
        let b = graph.lookup("B").unwrap();

        let years: Vec<_> = graph.node(a).unwrap().edges_to(b).map(|e| e.year).collect();
        assert_eq!(years, vec![2000, 2005]);
    }

    #[test]
    fn no_self_loops() {
        let graph = ActorGraph::from_cast(sample_cast());
        for index in 0..graph.actor_count() {
            let id = ActorId::new(index);
            assert!(graph.edges(id).iter().all(|e| e.target != id));
        }
    }

    #[test]
    fn incremental_build_matches_full_build() {
        let cast = sample_cast();
        let full = ActorGraph::from_cast(cast.clone());

        let mut incremental = ActorGraph::new(cast);
        assert_eq!(incremental.edge_count(), 0);
        for (_, ids) in incremental.cast().movies_by_year() {
            for id in ids {
                incremental.add_movie(id).unwrap();
            }
        }

        assert_eq!(incremental.edge_count(), full.edge_count());
        for index in 0..full.actor_count() {
            let id = ActorId::new(index);
            assert_eq!(incremental.edges(id), full.edges(id));
        }
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut graph = ActorGraph::from_cast(sample_cast());
        let a = graph.lookup("A").unwrap();
        let err = graph.add_edge(a, ActorId::new(42), MovieId::new(0)).unwrap_err();
        assert!(matches!(err, GraphError::NodeOutOfRange(42)));
    }

    #[test]
    fn add_actor_is_idempotent() {
        let mut graph = ActorGraph::new(CastTable::new());
        let a = graph.add_actor("A");
        let again = graph.add_actor("A");
        assert_eq!(a, again);
        assert_eq!(graph.actor_count(), 1);
    }
}
