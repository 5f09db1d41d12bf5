use super::*;
use crate::instances;

#[test]
fn test_initial_cuts_absorb_provable_vertices() {
    let (graph, terminals) = instances::isolating_cut_example();
    let mut root = BranchRoot::new(&graph, &terminals);
    root.initial_isolating_cuts().unwrap();
    let reduced = root.into_graph();

    // terminal 1's isolating cut absorbs 2 and 3; terminals 5 and 6 gain
    // nothing because vertex 4 still reaches both of them
    assert_eq!(reduced.combined(1), BTreeSet::from([2, 3]));
    assert!(reduced.combined(5).is_empty());
    assert!(reduced.combined(6).is_empty());
    assert_eq!(reduced.vertices(), vec![1, 4, 5, 6]);
}

#[test]
fn test_terminals_survive_preprocessing() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let mut root = BranchRoot::new(&graph, &terminals);
    root.initial_isolating_cuts().unwrap();
    let reduced = root.into_graph();
    for &t in &terminals {
        assert!(reduced.contains(t));
    }
}

#[test]
fn test_caller_graph_not_mutated() {
    let (graph, terminals) = instances::isolating_cut_example();
    let before = (graph.vertices(), graph.edges());
    let mut root = BranchRoot::new(&graph, &terminals);
    root.initial_isolating_cuts().unwrap();
    assert_eq!((graph.vertices(), graph.edges()), before);
}
