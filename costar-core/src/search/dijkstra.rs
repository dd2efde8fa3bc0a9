//! Weighted Search
//!
//! Dijkstra's algorithm with a binary heap. Edge costs are derived from the
//! movie year rather than stored: `cost = reference_year - year`. Older
//! movies cost more, which biases shortest paths toward recent co-starrings.
//!
//! Costs must be non-negative, so the search refuses to run on a graph
//! containing a movie newer than the reference year.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};
use crate::graph::{edge_cost, ActorGraph, ActorId, Year};

use super::{EarlyExit, SearchState};

/// Run Dijkstra from `source`, filling `state` with accumulated costs.
///
/// Nodes are finalized when popped; stale heap entries for finalized nodes
/// are discarded. Equal costs pop in ascending actor id order. With
/// [`EarlyExit::AtTarget`] the search stops once `target` is finalized.
pub fn dijkstra(
    graph: &ActorGraph,
    state: &mut SearchState,
    source: ActorId,
    target: Option<ActorId>,
    reference_year: Year,
    early_exit: EarlyExit,
) -> Result<()> {
    if !graph.contains(source) {
        return Err(GraphError::NodeOutOfRange(source.index()));
    }
    if let Some(latest) = graph.latest_year() {
        edge_cost(latest, reference_year)?;
    }
    state.reset(graph.actor_count());
    state.start(source);

    let stop_at = match early_exit {
        EarlyExit::AtTarget => target,
        EarlyExit::Exhaustive => None,
    };

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((distance, current))) = heap.pop() {
        if state.is_finalized(current) {
            continue;
        }
        state.finalize(current);
        if stop_at == Some(current) {
            return Ok(());
        }

        for edge in graph.edges(current) {
            let neighbor = edge.target;
            if state.is_finalized(neighbor) {
                continue;
            }
            let candidate = distance + edge_cost(edge.year, reference_year)?;
            let improves = state
                .distance(neighbor)
                .map_or(true, |known| candidate < known);
            if improves {
                state.reach(neighbor, candidate, current);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CastTable, Movie};
    use crate::search::breadth_first;

    fn id(graph: &ActorGraph, name: &str) -> ActorId {
        graph.lookup(name).unwrap()
    }

    /// A reaches D either directly through an old movie or in two hops
    /// through recent ones.
    fn shortcut() -> ActorGraph {
        let mut cast = CastTable::new();
        cast.add_role("A", Movie::new("Old", 1950));
        cast.add_role("D", Movie::new("Old", 1950));
        cast.add_role("A", Movie::new("New1", 2014));
        cast.add_role("B", Movie::new("New1", 2014));
        cast.add_role("B", Movie::new("New2", 2015));
        cast.add_role("D", Movie::new("New2", 2015));
        ActorGraph::from_cast(cast)
    }

    #[test]
    fn prefers_recent_movies() {
        let graph = shortcut();
        let mut state = SearchState::default();
        let a = id(&graph, "A");
        let d = id(&graph, "D");
        dijkstra(&graph, &mut state, a, Some(d), 2016, EarlyExit::AtTarget).unwrap();

        assert_eq!(state.distance(d), Some(2 + 1));
        assert_eq!(state.predecessor(d), Some(id(&graph, "B")));

        // BFS takes the single old hop instead
        let mut hops = SearchState::default();
        breadth_first(&graph, &mut hops, a, Some(d), EarlyExit::AtTarget).unwrap();
        assert_eq!(hops.predecessor(d), Some(a));
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let mut cast = CastTable::new();
        cast.add_role("A", Movie::new("Old", 1990));
        cast.add_role("B", Movie::new("Old", 1990));
        cast.add_role("A", Movie::new("New", 2010));
        cast.add_role("B", Movie::new("New", 2010));
        let graph = ActorGraph::from_cast(cast);

        let mut state = SearchState::default();
        let a = id(&graph, "A");
        let b = id(&graph, "B");
        dijkstra(&graph, &mut state, a, Some(b), 2016, EarlyExit::AtTarget).unwrap();
        assert_eq!(state.distance(b), Some(6));
    }

    #[test]
    fn finalized_distances_are_settled() {
        let graph = shortcut();
        let mut state = SearchState::default();
        let a = id(&graph, "A");
        dijkstra(&graph, &mut state, a, None, 2016, EarlyExit::Exhaustive).unwrap();

        for index in 0..graph.actor_count() {
            let node = ActorId::new(index);
            assert!(state.is_finalized(node));
            // no edge can improve a finalized distance
            let Some(distance) = state.distance(node) else { continue };
            for edge in graph.edges(node) {
                let via = distance + u64::from(2016 - edge.year);
                assert!(state.distance(edge.target).unwrap() <= via);
            }
        }
    }

    #[test]
    fn early_exit_leaves_target_unchanged() {
        let graph = shortcut();
        let a = id(&graph, "A");
        for index in 0..graph.actor_count() {
            let target = ActorId::new(index);
            let mut early = SearchState::default();
            let mut full = SearchState::default();
            dijkstra(&graph, &mut early, a, Some(target), 2016, EarlyExit::AtTarget).unwrap();
            dijkstra(&graph, &mut full, a, Some(target), 2016, EarlyExit::Exhaustive).unwrap();

            assert_eq!(early.distance(target), full.distance(target));
            assert_eq!(early.predecessor(target), full.predecessor(target));
        }
    }

    #[test]
    fn future_movie_is_rejected() {
        let mut cast = CastTable::new();
        cast.add_role("A", Movie::new("Sequel", 2030));
        cast.add_role("B", Movie::new("Sequel", 2030));
        let graph = ActorGraph::from_cast(cast);

        let mut state = SearchState::default();
        let err = dijkstra(&graph, &mut state, ActorId::new(0), None, 2016, EarlyExit::AtTarget)
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidWeight {
                year: 2030,
                reference_year: 2016
            }
        ));
    }
}
