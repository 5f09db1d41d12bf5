use super::*;
use crate::instances;

#[test]
fn test_rejects_empty_graph() {
    let graph = CutGraph::new();
    let err = IsolationBranching::new().solve(&graph, &[1, 2]).unwrap_err();
    assert!(matches!(err, CutError::InvalidInput(_)));
}

#[test]
fn test_rejects_single_terminal() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    let err = IsolationBranching::new().solve(&graph, &[1]).unwrap_err();
    assert!(matches!(err, CutError::InvalidInput(_)));
}

#[test]
fn test_rejects_duplicate_terminals() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    let err = IsolationBranching::new().solve(&graph, &[1, 1]).unwrap_err();
    assert!(matches!(err, CutError::InvalidInput(_)));
}

#[test]
fn test_rejects_missing_terminal() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    let err = IsolationBranching::new().solve(&graph, &[1, 99]).unwrap_err();
    assert!(matches!(err, CutError::InvalidInput(_)));
}

#[test]
fn test_solves_spoke_cycle() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();
    assert_eq!(solution.cut_value, 8.0);
    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_eq!(solution.persistence, Persistence::None);
}

#[test]
fn test_partition_is_consistent_with_cut_value() {
    let (graph, terminals) = instances::dahlhaus_gadget();
    let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();
    assert_eq!(solution.cut_value, round8(graph.cut_weight(&solution.partition)));
    assert_eq!(solution.cut_value, 27.0);
}

#[test]
fn test_two_terminals_reduce_to_min_cut() {
    let (graph, _) = instances::isolating_cut_example();
    let solution = IsolationBranching::new().solve(&graph, &[1, 5]).unwrap();
    let cut = crate::cut::minimum_isolating_cut(
        &graph,
        &BTreeSet::from([1]),
        &BTreeSet::from([5]),
    )
    .unwrap();
    assert_eq!(solution.cut_value, round8(cut.weight));
}

#[test]
fn test_disconnected_terminals_cut_nothing() {
    let mut graph = CutGraph::from_unit_edges([(1, 2), (3, 4), (5, 6)]);
    graph.add_unit_edge(2, 1);
    let solution = IsolationBranching::new().solve(&graph, &[1, 3, 5]).unwrap();
    assert_eq!(solution.cut_value, 0.0);
    assert_eq!(solution.partition[&3], BTreeSet::from([3, 4]));
    assert_eq!(solution.partition[&5], BTreeSet::from([5, 6]));
}

#[test]
fn test_solve_is_idempotent() {
    let (graph, terminals) = instances::triple_gadget();
    let first = IsolationBranching::new().solve(&graph, &terminals).unwrap();
    let second = IsolationBranching::new().solve(&graph, &terminals).unwrap();
    assert_eq!(first.cut_value, second.cut_value);
    assert_eq!(first.partition, second.partition);
}

#[test]
fn test_caller_graph_is_not_mutated() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let before = (graph.vertices(), graph.edges());
    IsolationBranching::new().solve(&graph, &terminals).unwrap();
    assert_eq!((graph.vertices(), graph.edges()), before);
}

#[test]
fn test_expired_time_limit_reports_gap() {
    let (graph, terminals) = instances::pair_gadget();
    let solution = IsolationBranching::new()
        .with_time_limit(0.0)
        .solve(&graph, &terminals)
        .unwrap();
    match solution.status {
        SolveStatus::TimeLimitExceeded { gap } => assert!(gap >= 0.0),
        SolveStatus::Optimal => panic!("a zero budget cannot prove optimality"),
    }
    // the early exit still returns a full partition
    let covered: usize = solution.partition.values().map(|b| b.len()).sum();
    assert_eq!(covered, graph.num_vertices());
}

#[test]
fn test_round8() {
    assert_eq!(round8(1.000000004), 1.0);
    assert_eq!(round8(1.000000006), 1.00000001);
    assert_eq!(round8(8.0), 8.0);
}

#[cfg(feature = "lp-solver")]
#[test]
fn test_persistence_modes_agree() {
    let (graph, terminals) = instances::pair_triangle();
    let plain = IsolationBranching::new().solve(&graph, &terminals).unwrap();
    for mode in [Persistence::Weak, Persistence::Strong] {
        let seeded = IsolationBranching::new()
            .with_persistence(mode)
            .solve(&graph, &terminals)
            .unwrap();
        assert_eq!(seeded.cut_value, plain.cut_value);
        assert_eq!(seeded.persistence, mode);
    }
}

#[cfg(not(feature = "lp-solver"))]
#[test]
fn test_persistence_degrades_without_backend() {
    let (graph, terminals) = instances::pair_triangle();
    let solution = IsolationBranching::new()
        .with_persistence(Persistence::Strong)
        .solve(&graph, &terminals)
        .unwrap();
    assert_eq!(solution.persistence, Persistence::None);
    assert_eq!(solution.cut_value, 8.0);
}
