use crate::datastructures::BitSet;
use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use log::trace;

/// Adjacency lists over a fixed vertex set `0..order`. Neighbors are kept in
/// insertion order and parallel edges are allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveGraph {
    data: Vec<Vec<usize>>,
    edge_count: usize,
}

/// Connected components of a graph, labelled densely in order of each
/// component's smallest vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    count: usize,
    labels: Vec<usize>,
}

impl Components {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn labels(&self) -> &[usize] {
        self.labels.as_slice()
    }

    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.labels[u] == self.labels[v]
    }

    /// Vertices grouped by label, each group in ascending order.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.count];
        for (v, label) in self.labels.iter().copied().enumerate() {
            groups[label].push(v);
        }
        groups
    }
}

impl LiveGraph {
    /// Recomputes the components from scratch with an iterative depth first
    /// search over the current edge set.
    pub fn connected_components(&self) -> Components {
        let order = self.data.len();
        let mut labels = vec![0; order];
        let mut visited = BitSet::new(order);
        let mut stack: Vec<usize> = Vec::with_capacity(order);
        let mut count = 0;

        let mut seed = visited.get_next_unset(0);
        while let Some(root) = seed {
            visited.set_bit(root);
            stack.push(root);
            while let Some(v) = stack.pop() {
                labels[v] = count;
                for x in self.data[v].iter().copied() {
                    if !visited.set_bit(x) {
                        stack.push(x);
                    }
                }
            }
            count += 1;
            seed = visited.get_next_unset(root + 1);
        }
        debug_assert_eq!(visited.cardinality(), order);
        trace!("recomputed {} components over {} vertices", count, order);
        Components { count, labels }
    }

    fn detach(&mut self, u: usize, v: usize) -> bool {
        match self.data.get_mut(u) {
            Some(nb) => match nb.iter().position(|x| *x == v) {
                Some(idx) => {
                    nb.remove(idx);
                    true
                }
                None => false,
            },
            None => false,
        }
    }
}

impl MutableGraph for LiveGraph {
    fn add_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        self.data[u].push(v);
        self.data[v].push(u);
        self.edge_count += 1;
    }

    fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v || !self.detach(u, v) {
            return false;
        }
        self.detach(v, u);
        self.edge_count -= 1;
        true
    }

    fn with_order(order: usize) -> Self {
        LiveGraph {
            data: vec![Vec::new(); order],
            edge_count: 0,
        }
    }
}

impl BaseGraph for LiveGraph {
    fn degree(&self, u: usize) -> usize {
        self.data[u].len()
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(u).map_or(false, |nb| nb.contains(&v))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.data.len())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data[u].iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::live_graph::LiveGraph;
    use crate::graph::mutable_graph::MutableGraph;

    #[test]
    fn test_order() {
        let graph = LiveGraph::with_order(0);
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.connected_components().count(), 0);

        let graph = LiveGraph::with_order(5);
        assert_eq!(graph.order(), 5);
        assert_eq!(graph.vertices().count(), 5);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_degree() {
        let mut graph = LiveGraph::with_order(3);
        graph.add_edge(0, 1);

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 0);

        graph.add_edge(0, 1);

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.edge_count(), 2);

        assert!(graph.remove_edge(1, 0));

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert!(graph.has_edge(0, 1));

        assert!(graph.remove_edge(0, 1));
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn remove_missing_edge_is_silent() {
        let mut graph = LiveGraph::with_order(3);
        graph.add_edge(0, 1);
        assert!(!graph.remove_edge(1, 2));
        assert!(!graph.remove_edge(0, 7));
        assert!(!graph.remove_edge(2, 2));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighborhood_keeps_insertion_order() {
        let mut graph = LiveGraph::with_order(5);
        graph.add_edge(0, 3);
        graph.add_edge(0, 1);
        graph.add_edge(4, 0);
        graph.add_edge(0, 2);
        assert_eq!(graph.neighborhood(0).collect::<Vec<_>>(), vec![3, 1, 4, 2]);
        graph.remove_edge(0, 1);
        assert_eq!(graph.neighborhood(0).collect::<Vec<_>>(), vec![3, 4, 2]);
    }

    #[test]
    fn components_labels() {
        let mut graph = LiveGraph::with_order(6);
        graph.add_edge(4, 5);
        graph.add_edge(0, 2);
        graph.add_edge(2, 3);

        let components = graph.connected_components();
        assert_eq!(components.count(), 3);
        assert_eq!(components.labels(), &[0, 1, 0, 0, 2, 2]);
        assert!(components.same_component(0, 3));
        assert!(!components.same_component(1, 2));
        assert_eq!(
            components.groups(),
            vec![vec![0, 2, 3], vec![1], vec![4, 5]]
        );
    }
}
