//! Union-find over vertex ids with union by rank and iterative path
//! compression.
//!
//! The tracker is only merged when an edge is *deleted* from the live graph,
//! so its groups record which vertices were joined by removed edges. It is
//! not a connectivity oracle for the live graph; see
//! [`ConnectivityOracle`](crate::oracle::ConnectivityOracle) for the ground
//! truth.

#[derive(Clone, Debug)]
pub struct DisjointSetTracker {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSetTracker {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Root of the tree containing `u`. Every vertex on the walked chain is
    /// re-pointed at the root.
    pub fn find(&mut self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = u;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the groups of `u` and `v`. Returns `false` without touching the
    /// forest when they already share a root.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let mut root_u = self.find(u);
        let mut root_v = self.find(v);
        if root_u == root_v {
            return false;
        }
        if self.rank[root_u] < self.rank[root_v] {
            std::mem::swap(&mut root_u, &mut root_v);
        }
        self.parent[root_v] = root_u;
        if self.rank[root_u] == self.rank[root_v] {
            self.rank[root_u] += 1;
        }
        true
    }

    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    pub fn group_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(i, p)| *i == **p)
            .count()
    }

    #[cfg(test)]
    fn rank(&self, u: usize) -> u32 {
        self.rank[u]
    }
}
