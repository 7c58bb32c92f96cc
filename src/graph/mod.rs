pub use base_graph::BaseGraph;
pub use live_graph::{Components, LiveGraph};
pub use mutable_graph::MutableGraph;

mod base_graph;
mod live_graph;
mod mutable_graph;
