pub(crate) mod datastructures;

pub mod counter;
pub mod disjoint_set;
pub mod edge_store;
pub mod error;
pub mod generator;
pub mod graph;
pub mod io;
pub mod oracle;
pub mod session;

#[cfg(feature = "cli")]
pub mod log;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;

pub use disjoint_set::DisjointSetTracker;
pub use edge_store::{Edge, EdgeStore};
pub use error::{ConnectivityError, Result};
pub use oracle::{ConnectivityOracle, DeletionReport};
