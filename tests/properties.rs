use edge_decay::generator::{max_edges, random_edges};
use edge_decay::ConnectivityOracle;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashSet, VecDeque};

fn graph_case() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, u64)> {
    (2usize..14).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..40),
            any::<u64>(),
        )
    })
}

fn build(n: usize, pairs: &[(usize, usize)]) -> ConnectivityOracle {
    let mut oracle = ConnectivityOracle::new(n);
    for (u, v) in pairs.iter().copied().filter(|(u, v)| u != v) {
        oracle.add_edge(u, v).unwrap();
    }
    oracle
}

fn deletion_order(oracle: &ConnectivityOracle, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..oracle.edges().len()).collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));
    order
}

/// Breadth first search over the live edges of the store, ignoring the
/// adjacency lists of the live graph.
fn reachable(oracle: &ConnectivityOracle, from: usize) -> HashSet<usize> {
    let live: Vec<(usize, usize)> = oracle
        .edges()
        .live_edges()
        .map(|(_, e)| e.endpoints())
        .collect();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(from);
    queue.push_back(from);
    while let Some(x) = queue.pop_front() {
        for (u, v) in live.iter().copied() {
            let next = if u == x {
                v
            } else if v == x {
                u
            } else {
                continue;
            };
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn deleting_twice_equals_deleting_once((n, pairs, seed) in graph_case()) {
        let mut once = build(n, &pairs);
        let mut twice = build(n, &pairs);
        for index in deletion_order(&once, seed) {
            let a = once.delete_edge(index).unwrap();
            let b = twice.delete_edge(index).unwrap();
            prop_assert_eq!(a, b);
            prop_assert!(twice.delete_edge(index).unwrap().is_none());
            prop_assert_eq!(once.graph(), twice.graph());
            prop_assert_eq!(once.components(), twice.components());
        }
    }

    #[test]
    fn component_count_never_decreases((n, pairs, seed) in graph_case()) {
        let mut oracle = build(n, &pairs);
        let mut previous = oracle.components().count();
        for index in deletion_order(&oracle, seed) {
            let report = oracle.delete_edge(index).unwrap().unwrap();
            prop_assert!(report.components >= previous);
            previous = report.components;
        }
        prop_assert_eq!(previous, n);
    }

    #[test]
    fn labels_match_independent_traversal((n, pairs, seed) in graph_case()) {
        let mut oracle = build(n, &pairs);
        let order = deletion_order(&oracle, seed);
        let half = order.len() / 2;
        for index in order.into_iter().take(half) {
            oracle.delete_edge(index).unwrap();
        }
        let components = oracle.components();
        for a in 0..n {
            let from_a = reachable(&oracle, a);
            for b in 0..n {
                prop_assert_eq!(components.same_component(a, b), from_a.contains(&b));
            }
        }
    }

    #[test]
    fn tracker_never_splits((n, pairs, seed) in graph_case()) {
        let mut oracle = build(n, &pairs);
        let mut joined: Vec<(usize, usize)> = Vec::new();
        for index in deletion_order(&oracle, seed) {
            let report = oracle.delete_edge(index).unwrap().unwrap();
            prop_assert!(report.tracker_connected_after);
            prop_assert_eq!(report.tracker_merged, !report.tracker_connected_before);
            for (a, b) in joined.iter().copied() {
                prop_assert!(oracle.tracker_connected(a, b).unwrap());
            }
            for a in 0..n {
                for b in a + 1..n {
                    if oracle.tracker_connected(a, b).unwrap() && !joined.contains(&(a, b)) {
                        joined.push((a, b));
                    }
                }
            }
        }
    }

    #[test]
    fn generator_yields_distinct_pairs(n in 0usize..30, fill in 0.0f64..1.0, seed in any::<u64>()) {
        let m = (max_edges(n) as f64 * fill) as usize;
        let edges = random_edges(n, m, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(edges.len(), m);
        let mut seen = HashSet::new();
        for (u, v) in edges {
            prop_assert!(u != v);
            prop_assert!(u < n && v < n);
            prop_assert!(seen.insert((u.min(v), u.max(v))));
        }
    }
}
