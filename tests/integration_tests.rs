//! End-to-end tests for the ktcut crate.
//!
//! Each canonical instance is solved to optimality and checked against its
//! known cut value, then the returned partition is verified to cover the
//! graph, keep blocks disjoint, and price out to exactly the reported cut
//! value.

use ktcut::instances;
use ktcut::prelude::*;
use std::collections::BTreeSet;

/// Checks the universal partition invariants and cut-value consistency.
fn assert_valid_partition(graph: &CutGraph, terminals: &[usize], solution: &Solution) {
    let mut seen = BTreeSet::new();
    for &t in terminals {
        let block = &solution.partition[&t];
        assert!(block.contains(&t), "terminal {t} missing from its block");
        for &v in block {
            assert!(seen.insert(v), "vertex {v} appears in two blocks");
        }
    }
    let all: BTreeSet<usize> = graph.vertices().into_iter().collect();
    assert_eq!(seen, all, "partition does not cover the graph");

    let crossing = graph.cut_weight(&solution.partition);
    assert!(
        (crossing - solution.cut_value).abs() < 1e-8,
        "cut value {} disagrees with the partition's crossing capacity {}",
        solution.cut_value,
        crossing
    );
}

fn solve_and_check(graph: &CutGraph, terminals: &[usize], expected: f64) {
    let solution = IsolationBranching::new().solve(graph, terminals).unwrap();
    assert_eq!(solution.cut_value, expected);
    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_valid_partition(graph, terminals, &solution);
}

mod known_instances {
    use super::*;

    #[test]
    fn test_four_spoke_cycle() {
        let (graph, terminals) = instances::four_spoke_cycle();
        solve_and_check(&graph, &terminals, 8.0);
    }

    #[test]
    fn test_pair_triangle() {
        let (graph, terminals) = instances::pair_triangle();
        solve_and_check(&graph, &terminals, 8.0);
    }

    #[test]
    fn test_pair_gadget() {
        let (graph, terminals) = instances::pair_gadget();
        solve_and_check(&graph, &terminals, 26.0);
    }

    #[test]
    fn test_triple_gadget() {
        let (graph, terminals) = instances::triple_gadget();
        solve_and_check(&graph, &terminals, 27.0);
    }

    #[test]
    fn test_dahlhaus_gadget() {
        let (graph, terminals) = instances::dahlhaus_gadget();
        solve_and_check(&graph, &terminals, 27.0);
    }

    #[cfg(feature = "lp-solver")]
    #[test]
    fn test_quintuple_gadget_with_strong_persistence() {
        let (graph, terminals) = instances::quintuple_gadget();
        let solution = IsolationBranching::new()
            .with_persistence(Persistence::Strong)
            .solve(&graph, &terminals)
            .unwrap();
        assert_eq!(solution.cut_value, 110.0);
        assert_valid_partition(&graph, &terminals, &solution);
    }
}

mod boundary_behavior {
    use super::*;

    #[test]
    fn test_two_terminals_equal_min_cut() {
        let (graph, _) = instances::isolating_cut_example();
        let solution = IsolationBranching::new().solve(&graph, &[1, 6]).unwrap();
        let min_cut =
            minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([6])).unwrap();
        assert_eq!(solution.cut_value, min_cut.weight);
        assert_valid_partition(&graph, &[1, 6], &solution);
    }

    #[test]
    fn test_pairwise_disconnected_terminals() {
        let graph = CutGraph::from_weighted_edges([(1, 2, 2.0), (3, 4, 2.0), (5, 6, 2.0)]);
        let solution = IsolationBranching::new().solve(&graph, &[1, 3, 5]).unwrap();
        assert_eq!(solution.cut_value, 0.0);
        assert_valid_partition(&graph, &[1, 3, 5], &solution);
        assert_eq!(solution.partition[&3], BTreeSet::from([3, 4]));
        assert_eq!(solution.partition[&5], BTreeSet::from([5, 6]));
    }

    #[test]
    fn test_unweighted_edges_default_to_unit_capacity() {
        // a triangle of unit edges between three terminals: cutting any
        // two of the three edges is not enough, all three must go
        let graph = CutGraph::from_unit_edges([(1, 2), (2, 3), (1, 3)]);
        let solution = IsolationBranching::new().solve(&graph, &[1, 2, 3]).unwrap();
        assert_eq!(solution.cut_value, 3.0);
    }

    #[test]
    fn test_final_report_proves_optimality() {
        // at termination the frontier's best lower bound has met the best
        // upper bound, and the best upper bound is the reported cut value
        for (graph, terminals) in [
            instances::four_spoke_cycle(),
            instances::pair_triangle(),
            instances::dahlhaus_gadget(),
        ] {
            let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();
            assert!(
                solution.report.best_lower_bound >= solution.report.best_upper_bound - 1e-8
            );
            assert!((solution.report.best_upper_bound - solution.cut_value).abs() < 1e-8);
        }
    }
}

mod brute_force_parity {
    use super::*;

    #[test]
    fn test_small_instances_match_exhaustive_search() {
        for (graph, terminals) in [
            instances::four_spoke_cycle(),
            instances::pair_triangle(),
            instances::dahlhaus_gadget(),
            instances::isolating_cut_example(),
        ] {
            let (_, expected) = brute_force(&graph, &terminals).unwrap();
            let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();
            assert!((solution.cut_value - expected).abs() < 1e-8);
        }
    }
}

#[cfg(feature = "lp-solver")]
mod lp_parity {
    use super::*;
    use ktcut::formulation::CutFormulation;

    #[test]
    fn test_branching_matches_integer_program() {
        for (graph, terminals) in [
            instances::four_spoke_cycle(),
            instances::pair_triangle(),
            instances::pair_gadget(),
            instances::triple_gadget(),
            instances::dahlhaus_gadget(),
        ] {
            let ip = CutFormulation::new(&graph, &terminals)
                .unwrap()
                .solve_ip()
                .unwrap();
            let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();
            assert!((solution.cut_value - ip.cut_value).abs() < 1e-4);
        }
    }

    #[test]
    fn test_lp_relaxation_is_tight_on_quintuple_gadget() {
        let (graph, terminals) = instances::quintuple_gadget();
        let lp = CutFormulation::new(&graph, &terminals)
            .unwrap()
            .solve_lp()
            .unwrap();
        assert!((lp.cut_value - 110.0).abs() < 1e-4);
    }

    #[test]
    fn test_persistence_holds_on_all_small_instances() {
        for (graph, terminals) in [
            instances::four_spoke_cycle(),
            instances::pair_triangle(),
            instances::pair_gadget(),
            instances::triple_gadget(),
            instances::dahlhaus_gadget(),
        ] {
            assert!(check_persistence(&graph, &terminals, Persistence::Weak).unwrap());
            assert!(check_persistence(&graph, &terminals, Persistence::Strong).unwrap());
        }
    }

    #[test]
    fn test_weak_persistence_soundness() {
        // a vertex pinned to a single terminal must end up with it
        let (graph, terminals) = instances::four_spoke_cycle();
        let candidates = terminal_candidates(&graph, &terminals, Persistence::Weak).unwrap();
        let solution = IsolationBranching::new()
            .with_persistence(Persistence::Weak)
            .solve(&graph, &terminals)
            .unwrap();
        for (vertex, allowed) in &candidates {
            if allowed.len() == 1 {
                let terminal = *allowed.iter().next().unwrap();
                assert!(
                    solution.partition[&terminal].contains(vertex),
                    "vertex {vertex} was pinned to terminal {terminal}"
                );
            }
        }
    }
}
