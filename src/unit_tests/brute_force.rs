use super::*;
use crate::instances;
use crate::solver::IsolationBranching;

#[test]
fn test_finds_known_optimum() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let (partition, value) = brute_force(&graph, &terminals).unwrap();
    assert_eq!(value, 8.0);
    assert_eq!(graph.cut_weight(&partition), 8.0);
}

#[test]
fn test_matches_isolation_branching() {
    for (graph, terminals) in [
        instances::four_spoke_cycle(),
        instances::pair_triangle(),
        instances::isolating_cut_example(),
    ] {
        let (_, value) = brute_force(&graph, &terminals).unwrap();
        let solution = IsolationBranching::new().solve(&graph, &terminals).unwrap();
        assert_eq!(solution.cut_value, crate::solver::round8(value));
    }
}

#[test]
fn test_no_free_vertices() {
    let graph = CutGraph::from_weighted_edges([(1, 2, 2.0), (2, 3, 1.0)]);
    let (partition, value) = brute_force(&graph, &[1, 2, 3]).unwrap();
    assert_eq!(value, 3.0);
    assert_eq!(partition[&1], BTreeSet::from([1]));
}

#[test]
fn test_rejects_invalid_input() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    assert!(brute_force(&graph, &[1]).is_err());
}
