use super::*;
use crate::instances;

#[test]
fn test_isolating_cut_example() {
    let (graph, _) = instances::isolating_cut_example();
    let cut = minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([5, 6])).unwrap();
    assert_eq!(cut.source_side, BTreeSet::from([1, 2, 3]));
    assert_eq!(cut.weight, 2.0);
}

#[test]
fn test_source_maximal_on_ties() {
    // both edges of the path are minimum cuts; the source side must be
    // the larger one
    let graph = CutGraph::from_unit_edges([(1, 2), (2, 3)]);
    let cut = minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([3])).unwrap();
    assert_eq!(cut.source_side, BTreeSet::from([1, 2]));
    assert_eq!(cut.weight, 1.0);
}

#[test]
fn test_multiple_sources_and_sinks() {
    let (graph, _) = instances::isolating_cut_example();
    let cut = minimum_isolating_cut(&graph, &BTreeSet::from([5, 6]), &BTreeSet::from([1])).unwrap();
    assert!(cut.source_side.is_superset(&BTreeSet::from([5, 6])));
    assert!(!cut.source_side.contains(&1));
    assert_eq!(cut.weight, 2.0);
}

#[test]
fn test_disconnected_vertices_join_source_side() {
    let mut graph = CutGraph::from_unit_edges([(1, 2), (3, 4)]);
    graph.add_vertex(9);
    let cut = minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([3])).unwrap();
    // only 3's component reaches the super-sink
    assert_eq!(cut.source_side, BTreeSet::from([1, 2, 9]));
    assert_eq!(cut.weight, 0.0);
}

#[test]
fn test_empty_side_is_trivial() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    let cut = minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::new()).unwrap();
    assert_eq!(cut.source_side, BTreeSet::from([1]));
    assert_eq!(cut.weight, 0.0);

    let cut = minimum_isolating_cut(&graph, &BTreeSet::new(), &BTreeSet::from([2])).unwrap();
    assert!(cut.source_side.is_empty());
    assert_eq!(cut.weight, 0.0);
}

#[test]
fn test_overlapping_sides_fail() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    let err =
        minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([1, 2])).unwrap_err();
    assert_eq!(err, CutError::InvalidCut(1));
}

#[test]
fn test_missing_vertex_fails() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    assert!(
        minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([99])).is_err()
    );
}

#[test]
fn test_input_graph_untouched() {
    let (graph, _) = instances::isolating_cut_example();
    let before = graph.edges();
    minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([5, 6])).unwrap();
    assert_eq!(graph.edges(), before);
    assert_eq!(graph.num_vertices(), 6);
}

#[test]
fn test_fractional_capacities() {
    let graph = CutGraph::from_weighted_edges([(1, 2, 0.3), (2, 3, 0.1), (2, 4, 0.15)]);
    let cut =
        minimum_isolating_cut(&graph, &BTreeSet::from([1]), &BTreeSet::from([3, 4])).unwrap();
    assert_eq!(cut.source_side, BTreeSet::from([1, 2]));
    assert!((cut.weight - 0.25).abs() < 1e-9);
}
