use crate::disjoint_set::DisjointSetTracker;
use crate::edge_store::{Edge, EdgeStore};
use crate::error::{ConnectivityError, Result};
use crate::graph::{BaseGraph, Components, LiveGraph, MutableGraph};
use log::debug;
use std::fmt;

/// Outcome of a single edge deletion.
///
/// `connected` and `components` are the ground truth recomputed over the
/// live graph. The `tracker_*` fields come from the disjoint-set tracker,
/// which is merged on deletion and therefore answers a different question:
/// whether the endpoints were joined by the history of removed edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeletionReport {
    pub index: usize,
    pub edge: Edge,
    pub connected: bool,
    pub components: usize,
    pub tracker_connected_before: bool,
    pub tracker_connected_after: bool,
    pub tracker_merged: bool,
}

impl fmt::Display for DeletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (u, v) = self.edge.endpoints();
        writeln!(f, "Deleted edge: {}", self.edge)?;
        if self.connected {
            write!(
                f,
                "Vertices {} and {} are in the same connected component.",
                u, v
            )?;
        } else {
            write!(
                f,
                "Vertices {} and {} are NOT in the same connected component.",
                u, v
            )?;
        }
        write!(
            f,
            " ({} components; tracker: {})",
            self.components,
            if self.tracker_connected_after {
                "joined"
            } else {
                "apart"
            }
        )
    }
}

/// Coordinates the edge store, the live graph and the disjoint-set tracker.
///
/// All edges are expected to be added before the first deletion, although
/// nothing prevents interleaving.
#[derive(Clone, Debug)]
pub struct ConnectivityOracle {
    edges: EdgeStore,
    tracker: DisjointSetTracker,
    graph: LiveGraph,
}

impl ConnectivityOracle {
    pub fn new(order: usize) -> Self {
        Self {
            edges: EdgeStore::new(),
            tracker: DisjointSetTracker::new(order),
            graph: LiveGraph::with_order(order),
        }
    }

    /// Like [`new`](Self::new), with room for `edges` edges up front.
    pub fn with_capacity(order: usize, edges: usize) -> Self {
        Self {
            edges: EdgeStore::with_capacity(edges),
            tracker: DisjointSetTracker::new(order),
            graph: LiveGraph::with_order(order),
        }
    }

    pub fn order(&self) -> usize {
        self.graph.order()
    }

    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    pub fn graph(&self) -> &LiveGraph {
        &self.graph
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.order() {
            return Err(ConnectivityError::VertexOutOfRange {
                vertex,
                order: self.order(),
            });
        }
        Ok(())
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<usize> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(ConnectivityError::SelfLoop { vertex: u });
        }
        let index = self.edges.add_edge(u, v);
        self.graph.add_edge(u, v);
        debug!("added edge {} as {}-{}", index, u, v);
        Ok(index)
    }

    /// Deletes the edge at `index` and reports both connectivity signals for
    /// its endpoints. Deleting an already deleted edge is a no-op and yields
    /// `Ok(None)`.
    pub fn delete_edge(&mut self, index: usize) -> Result<Option<DeletionReport>> {
        let edge = self.edges.edge_at(index)?;
        if self.edges.is_deleted(index) {
            debug!("edge {} already deleted", index);
            return Ok(None);
        }
        let (u, v) = edge.endpoints();

        let tracker_connected_before = self.tracker.connected(u, v);
        let tracker_merged = self.tracker.union(u, v);

        self.graph.remove_edge(u, v);
        self.edges.mark_deleted(index)?;

        let components = self.graph.connected_components();
        let connected = components.same_component(u, v);
        let tracker_connected_after = self.tracker.connected(u, v);
        debug!(
            "deleted edge {} ({}); {} components, ground truth {}, tracker {}",
            index,
            edge,
            components.count(),
            connected,
            tracker_connected_after
        );

        Ok(Some(DeletionReport {
            index,
            edge,
            connected,
            components: components.count(),
            tracker_connected_before,
            tracker_connected_after,
            tracker_merged,
        }))
    }

    /// Disjoint-set answer for `a` and `b`. This is a diagnostic signal, not
    /// live connectivity.
    pub fn tracker_connected(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok(self.tracker.connected(a, b))
    }

    /// Live connectivity for `a` and `b`, recomputed from scratch.
    pub fn ground_truth_connected(&self, a: usize, b: usize) -> Result<bool> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        Ok(self.components().same_component(a, b))
    }

    pub fn components(&self) -> Components {
        self.graph.connected_components()
    }

    pub fn tracker_groups(&self) -> usize {
        self.tracker.group_count()
    }
}
