//! Directed Graph
//!
//! An unlabeled directed graph over externally supplied integer ids, used
//! for the strongly-connected-components extension (e.g. a retweet graph
//! where an edge `u -> v` means user `u` retweeted user `v`).
//!
//! Ids are sparse, so they are mapped to dense slots on insertion; the
//! algorithms work on slots and translate back at the boundary.

use indexmap::IndexSet;

/// External node id as it appears in the edge list.
pub type NodeId = u64;

/// A directed graph with sparse external ids.
#[derive(Debug, Clone, Default)]
pub struct DiGraph {
    /// External ids; the position of an id is its slot.
    ids: IndexSet<NodeId>,

    /// Successor slots of every slot, in insertion order.
    successors: Vec<Vec<usize>>,

    edge_count: usize,
}

impl DiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list. Nodes are created in first-seen order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Insert a node if absent and return its slot.
    pub fn add_node(&mut self, id: NodeId) -> usize {
        let (slot, inserted) = self.ids.insert_full(id);
        if inserted {
            self.successors.push(Vec::new());
        }
        slot
    }

    /// Add the edge `from -> to`, creating either endpoint if needed.
    ///
    /// Duplicate edges and self-loops are kept as given.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.successors[from].push(to);
        self.edge_count += 1;
    }

    /// The same nodes, in the same slots, with every edge reversed.
    pub fn transpose(&self) -> DiGraph {
        let mut successors = vec![Vec::new(); self.successors.len()];
        for (from, targets) in self.successors.iter().enumerate() {
            for &to in targets {
                successors[to].push(from);
            }
        }
        DiGraph {
            ids: self.ids.clone(),
            successors,
            edge_count: self.edge_count,
        }
    }

    /// Successor slots of `slot`; empty for unknown slots.
    pub fn successors(&self, slot: usize) -> &[usize] {
        self.successors.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// External id stored at `slot`.
    pub fn id(&self, slot: usize) -> Option<NodeId> {
        self.ids.get_index(slot).copied()
    }

    /// Slot of an external id.
    pub fn slot(&self, id: NodeId) -> Option<usize> {
        self.ids.get_index_of(&id)
    }

    /// External ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_ids_get_dense_slots() {
        let graph = DiGraph::from_edges([(100, 7), (7, 100_000)]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.slot(100), Some(0));
        assert_eq!(graph.slot(7), Some(1));
        assert_eq!(graph.slot(100_000), Some(2));
        assert_eq!(graph.id(2), Some(100_000));
        assert_eq!(graph.slot(8), None);
    }

    #[test]
    fn transpose_reverses_every_edge() {
        let graph = DiGraph::from_edges([(1, 2), (1, 3), (3, 2)]);
        let transpose = graph.transpose();

        let two = graph.slot(2).unwrap();
        let one = graph.slot(1).unwrap();
        let three = graph.slot(3).unwrap();

        assert_eq!(transpose.successors(two), &[one, three]);
        assert!(transpose.successors(one).is_empty());
        assert_eq!(transpose.successors(three), &[one]);
        assert_eq!(transpose.edge_count(), graph.edge_count());
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut graph = DiGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors(0).len(), 2);
    }
}
