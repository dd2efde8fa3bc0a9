//! Strongly Connected Components
//!
//! Kosaraju's two-pass algorithm over a [`DiGraph`]:
//!
//! 1. Depth-first search the graph from every unvisited node, in insertion
//!    order, recording nodes in the order their searches finish.
//! 2. Depth-first search the transpose, taking start nodes from the finish
//!    order latest first. Each search tree is one component.
//!
//! Both passes use explicit stacks, so deep graphs (long retweet chains)
//! cannot overflow the call stack.

use tracing::debug;

use crate::graph::{DiGraph, NodeId};

/// One strongly connected component: external ids in discovery order.
pub type Component = Vec<NodeId>;

/// Slots of `graph` in DFS finish order.
fn finish_order(graph: &DiGraph) -> Vec<usize> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut finished = Vec::with_capacity(node_count);
    // (node, index of the next successor to look at)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..node_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            match graph.successors(node).get(next) {
                Some(&successor) => {
                    top.1 += 1;
                    if !visited[successor] {
                        visited[successor] = true;
                        stack.push((successor, 0));
                    }
                }
                None => {
                    stack.pop();
                    finished.push(node);
                }
            }
        }
    }

    finished
}

/// Partition `graph` into strongly connected components.
///
/// Every node appears in exactly one component. Components are ordered by
/// descending size; equal sizes keep the order they were found in.
pub fn strongly_connected_components(graph: &DiGraph) -> Vec<Component> {
    let mut finished = finish_order(graph);
    let transpose = graph.transpose();

    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    while let Some(root) = finished.pop() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(root);

        let mut component = Vec::new();
        while let Some(node) = stack.pop() {
            if let Some(id) = transpose.id(node) {
                component.push(id);
            }
            for &predecessor in transpose.successors(node) {
                if !visited[predecessor] {
                    visited[predecessor] = true;
                    stack.push(predecessor);
                }
            }
        }
        components.push(component);
    }

    components.sort_by(|a, b| b.len().cmp(&a.len()));
    debug!(
        nodes = graph.node_count(),
        components = components.len(),
        "Computed strongly connected components"
    );
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut components: Vec<Component>) -> Vec<Component> {
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        components
    }

    #[test]
    fn cycle_with_tail() {
        let graph = DiGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
        let components = strongly_connected_components(&graph);

        assert_eq!(components[0].len(), 3);
        assert_eq!(sorted(components), vec![vec![1, 2, 3], vec![4]]);
    }

    #[test]
    fn dag_is_all_singletons() {
        let graph = DiGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
        let components = strongly_connected_components(&graph);
        assert_eq!(components.len(), 4);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn two_cycles_joined_one_way() {
        let graph = DiGraph::from_edges([(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)]);
        let components = strongly_connected_components(&graph);
        assert_eq!(sorted(components), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn self_loop_is_its_own_component() {
        let graph = DiGraph::from_edges([(5, 5), (5, 6)]);
        let components = strongly_connected_components(&graph);
        assert_eq!(sorted(components), vec![vec![5], vec![6]]);
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 200_000u64;
        let mut edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        edges.push((n - 1, 0));
        let graph = DiGraph::from_edges(edges);

        let components = strongly_connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), n as usize);
    }

    #[test]
    fn finish_order_puts_root_last() {
        let graph = DiGraph::from_edges([(1, 2), (2, 3)]);
        let order = finish_order(&graph);
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn empty_graph_has_no_components() {
        assert!(strongly_connected_components(&DiGraph::new()).is_empty());
    }
}
