//! Property-based tests comparing isolation branching against exhaustive
//! enumeration on small random instances.

use ktcut::generators::random_connected_graph;
use ktcut::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solver_matches_brute_force(
        vertex_count in 4usize..=8,
        extra_edges in 0usize..=6,
        max_capacity in 1u32..=5,
        k in 2usize..=3,
        seed in any::<u64>(),
    ) {
        let graph = random_connected_graph(vertex_count, extra_edges, max_capacity, seed);
        let terminals: Vec<usize> = (0..k).collect();

        let (_, expected) = brute_force(&graph, &terminals).unwrap();
        let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();

        prop_assert!((solution.cut_value - expected).abs() < 1e-6);
    }

    #[test]
    fn partitions_are_always_valid(
        vertex_count in 4usize..=10,
        extra_edges in 0usize..=8,
        seed in any::<u64>(),
    ) {
        let graph = random_connected_graph(vertex_count, extra_edges, 4, seed);
        let terminals = vec![0, 1, 2];

        let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();

        let mut seen = BTreeSet::new();
        for &t in &terminals {
            prop_assert!(solution.partition[&t].contains(&t));
            for &v in &solution.partition[&t] {
                prop_assert!(seen.insert(v));
            }
        }
        prop_assert_eq!(seen, graph.vertices().into_iter().collect::<BTreeSet<_>>());

        let crossing = graph.cut_weight(&solution.partition);
        prop_assert!((crossing - solution.cut_value).abs() < 1e-6);
    }

    #[test]
    fn solving_twice_is_deterministic(
        vertex_count in 4usize..=9,
        extra_edges in 0usize..=6,
        seed in any::<u64>(),
    ) {
        let graph = random_connected_graph(vertex_count, extra_edges, 4, seed);
        let terminals = vec![0, 1];

        let first = IsolationBranching::new().solve(&graph, &terminals).unwrap();
        let second = IsolationBranching::new().solve(&graph, &terminals).unwrap();

        prop_assert_eq!(first.cut_value, second.cut_value);
        prop_assert_eq!(first.partition, second.partition);
    }
}

#[cfg(feature = "lp-solver")]
mod persistence_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn persistence_never_changes_the_optimum(
            vertex_count in 4usize..=7,
            extra_edges in 0usize..=4,
            seed in any::<u64>(),
        ) {
            let graph = random_connected_graph(vertex_count, extra_edges, 3, seed);
            let terminals = vec![0, 1, 2];

            let plain = IsolationBranching::new().solve(&graph, &terminals).unwrap();
            for mode in [Persistence::Weak, Persistence::Strong] {
                let seeded = IsolationBranching::new()
                    .with_persistence(mode)
                    .solve(&graph, &terminals)
                    .unwrap();
                prop_assert_eq!(seeded.cut_value, plain.cut_value);
            }
        }
    }
}
