use crate::error::{ConnectivityError, Result};
use fxhash::FxHashSet;
use std::fmt;

/// An undirected edge. Endpoints are stored in the order they were given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.u, self.v)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.u, self.v)
    }
}

/// Every edge ever added, addressed by insertion index, plus the indices
/// that have since been deleted.
#[derive(Clone, Debug, Default)]
pub struct EdgeStore {
    edges: Vec<Edge>,
    deleted: FxHashSet<usize>,
}

impl EdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            deleted: FxHashSet::default(),
        }
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> usize {
        self.edges.push(Edge::new(u, v));
        self.edges.len() - 1
    }

    pub fn edge_at(&self, index: usize) -> Result<Edge> {
        self.edges
            .get(index)
            .copied()
            .ok_or(ConnectivityError::EdgeOutOfRange {
                index,
                len: self.edges.len(),
            })
    }

    pub fn is_deleted(&self, index: usize) -> bool {
        self.deleted.contains(&index)
    }

    /// Marks `index` as deleted. Returns `false` if it already was.
    pub fn mark_deleted(&mut self, index: usize) -> Result<bool> {
        if index >= self.edges.len() {
            return Err(ConnectivityError::EdgeOutOfRange {
                index,
                len: self.edges.len(),
            });
        }
        Ok(self.deleted.insert(index))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn live_count(&self) -> usize {
        self.edges.len() - self.deleted.len()
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    pub fn live_edges(&self) -> impl Iterator<Item = (usize, Edge)> + '_ {
        self.edges
            .iter()
            .copied()
            .enumerate()
            .filter(move |(i, _)| !self.deleted.contains(i))
    }
}
