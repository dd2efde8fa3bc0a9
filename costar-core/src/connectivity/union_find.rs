//! Disjoint Set
//!
//! Union-find over dense indexes `0..len`, with union by size and full path
//! compression. It knows nothing about actors, movies or years: it is built
//! from a node count and driven entirely by its caller.

/// A disjoint-set forest.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent of each entry; a representative is its own parent.
    parent: Vec<usize>,

    /// Size of the set rooted at each entry. Only accurate at representatives.
    size: Vec<usize>,

    /// Number of disjoint sets.
    sets: usize,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            sets: len,
        }
    }

    /// Representative of the set containing `node`.
    ///
    /// Every entry visited on the way is re-pointed directly at the
    /// representative.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The smaller tree is attached under the larger tree's representative;
    /// on equal sizes `b`'s goes under `a`'s. Returns `false` if they were
    /// already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let merged = self.size[root_a] + self.size[root_b];
        if self.size[root_a] < self.size[root_b] {
            self.parent[root_a] = root_b;
            self.size[root_b] = merged;
        } else {
            self.parent[root_b] = root_a;
            self.size[root_a] = merged;
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of entries in the set containing `node`.
    pub fn set_size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    #[cfg(test)]
    fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
