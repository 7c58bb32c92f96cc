use crate::error::{ConnectivityError, Result};
use crate::oracle::ConnectivityOracle;
use fxhash::FxHashSet;
use log::debug;
use rand::Rng;
use std::cmp::{max, min};

pub fn max_edges(order: usize) -> usize {
    order * order.saturating_sub(1) / 2
}

/// Draws `edge_count` distinct unordered vertex pairs without self loops.
/// Each pair keeps the orientation in which it was drawn.
pub fn random_edges<R: Rng>(
    order: usize,
    edge_count: usize,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>> {
    if edge_count > max_edges(order) {
        return Err(ConnectivityError::TooManyEdges {
            requested: edge_count,
            max: max_edges(order),
        });
    }
    let mut seen: FxHashSet<(usize, usize)> =
        FxHashSet::with_capacity_and_hasher(edge_count, Default::default());
    let mut edges = Vec::with_capacity(edge_count);
    let mut draws = 0usize;
    while edges.len() < edge_count {
        draws += 1;
        let u = rng.gen_range(0..order);
        let v = rng.gen_range(0..order);
        if u != v && seen.insert((min(u, v), max(u, v))) {
            edges.push((u, v));
        }
    }
    debug!("drew {} edges in {} attempts", edge_count, draws);
    Ok(edges)
}

/// Builds an oracle over `order` vertices populated with random edges.
pub fn random_oracle<R: Rng>(
    order: usize,
    edge_count: usize,
    rng: &mut R,
) -> Result<ConnectivityOracle> {
    let mut oracle = ConnectivityOracle::with_capacity(order, edge_count);
    for (u, v) in random_edges(order, edge_count, rng)? {
        oracle.add_edge(u, v)?;
    }
    Ok(oracle)
}
