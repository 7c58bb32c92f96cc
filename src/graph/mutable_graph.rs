use crate::graph::base_graph::BaseGraph;

pub trait MutableGraph: BaseGraph {
    fn add_edge(&mut self, u: usize, v: usize);
    /// Removes a single parallel copy of `{u, v}`. Returns `false` when no copy was present.
    fn remove_edge(&mut self, u: usize, v: usize) -> bool;
    fn with_order(order: usize) -> Self;
}
