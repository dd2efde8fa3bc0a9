//! Unweighted Search
//!
//! Breadth-first search from a single source. The frontier grows one hop at
//! a time, so the first time a node is reached is also its shortest reach;
//! a node's distance and predecessor are written once and never revised.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::{ActorGraph, ActorId};

use super::{EarlyExit, SearchState};

/// Run BFS from `source`, filling `state` with hop counts and predecessors.
///
/// With [`EarlyExit::AtTarget`] the search stops as soon as `target` is
/// discovered. If `target` is unreachable its predecessor stays `None`.
pub fn breadth_first(
    graph: &ActorGraph,
    state: &mut SearchState,
    source: ActorId,
    target: Option<ActorId>,
    early_exit: EarlyExit,
) -> Result<()> {
    if !graph.contains(source) {
        return Err(GraphError::NodeOutOfRange(source.index()));
    }
    state.reset(graph.actor_count());
    state.start(source);

    let stop_at = match early_exit {
        EarlyExit::AtTarget => target,
        EarlyExit::Exhaustive => None,
    };
    if stop_at == Some(source) {
        return Ok(());
    }

    let mut queue = VecDeque::new();
    queue.push_back((source, 0u64));

    while let Some((current, distance)) = queue.pop_front() {
        for edge in graph.edges(current) {
            let neighbor = edge.target;
            if state.is_reached(neighbor) {
                continue;
            }
            state.reach(neighbor, distance + 1, current);
            if stop_at == Some(neighbor) {
                return Ok(());
            }
            queue.push_back((neighbor, distance + 1));
        }
    }

    Ok(())
}
