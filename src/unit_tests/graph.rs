use super::*;

fn spoke_graph() -> CutGraph {
    // capacity-2 four-cycle 5-6-7-8 with capacity-3 spokes to 1..4
    let mut graph = CutGraph::new();
    for (u, v) in [(5, 6), (6, 7), (7, 8), (8, 5)] {
        graph.add_edge(u, v, 2.0);
    }
    for (u, v) in [(1, 5), (2, 6), (3, 7), (4, 8)] {
        graph.add_edge(u, v, 3.0);
    }
    graph
}

#[test]
fn test_construction() {
    let graph = spoke_graph();
    assert_eq!(graph.num_vertices(), 8);
    assert_eq!(graph.num_edges(), 8);
    assert_eq!(graph.vertices(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(graph.capacity(5, 6), Some(2.0));
    assert_eq!(graph.capacity(6, 5), Some(2.0));
    assert_eq!(graph.capacity(1, 2), None);
}

#[test]
fn test_add_edge_overwrites() {
    let mut graph = CutGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 1, 5.0);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.capacity(1, 2), Some(5.0));
}

#[test]
fn test_zero_capacity_edges_are_absent() {
    let mut graph = CutGraph::new();
    graph.add_edge(1, 2, 0.0);
    graph.add_edge(3, 4, -1.0);
    assert_eq!(graph.num_edges(), 0);
}

#[test]
fn test_self_loops_are_ignored() {
    let mut graph = CutGraph::new();
    graph.add_edge(1, 1, 2.0);
    assert_eq!(graph.num_edges(), 0);
}

#[test]
fn test_unit_edges() {
    let graph = CutGraph::from_unit_edges([(1, 2), (2, 3)]);
    assert_eq!(graph.capacity(1, 2), Some(1.0));
    assert_eq!(graph.capacity(2, 3), Some(1.0));
}

#[test]
fn test_neighbors_sorted() {
    let graph = spoke_graph();
    assert_eq!(graph.neighbors(5), vec![1, 6, 8]);
    assert_eq!(graph.neighbors(1), vec![5]);
    assert!(graph.neighbors(99).is_empty());
}

#[test]
fn test_weighted_degree() {
    let graph = spoke_graph();
    assert_eq!(graph.weighted_degree(5), 7.0);
    assert_eq!(graph.weighted_degree(1), 3.0);
    assert_eq!(graph.weighted_degree(99), 0.0);
}

#[test]
fn test_contract_merges_parallel_capacities() {
    let mut graph = spoke_graph();
    graph
        .contract_set(1, &BTreeSet::from([5, 7, 8]))
        .unwrap();
    // 6 was adjacent to both 5 and 7 with capacity 2 each
    assert_eq!(graph.capacity(1, 6), Some(4.0));
    assert_eq!(graph.combined(1), BTreeSet::from([5, 7, 8]));
    assert!(!graph.contains(5));
    assert_eq!(graph.num_vertices(), 5);
}

#[test]
fn test_contract_carries_nested_combined() {
    let mut graph = CutGraph::from_weighted_edges([(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]);
    graph.contract(2, 3).unwrap();
    graph.contract(1, 2).unwrap();
    assert_eq!(graph.combined(1), BTreeSet::from([2, 3]));
    assert_eq!(graph.capacity(1, 4), Some(1.0));
}

#[test]
fn test_contract_discards_interior_edges() {
    let mut graph = CutGraph::from_weighted_edges([
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 1, 1.0),
        (3, 4, 1.0),
    ]);
    graph.contract_set(1, &BTreeSet::from([2, 3])).unwrap();
    assert_eq!(graph.num_vertices(), 2);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.capacity(1, 4), Some(1.0));
}

#[test]
fn test_contract_into_itself_fails() {
    let mut graph = CutGraph::from_unit_edges([(1, 2)]);
    let err = graph.contract(1, 1).unwrap_err();
    assert_eq!(err, CutError::InvalidContraction(1));
}

#[test]
fn test_contract_missing_vertex_fails() {
    let mut graph = CutGraph::from_unit_edges([(1, 2)]);
    assert!(graph.contract(1, 99).is_err());
    assert!(graph.contract(99, 1).is_err());
}

#[test]
fn test_cut_weight() {
    let graph = spoke_graph();
    let partition = BTreeMap::from([
        (1, BTreeSet::from([1, 5])),
        (2, BTreeSet::from([2, 6])),
        (3, BTreeSet::from([3, 7])),
        (4, BTreeSet::from([4, 8])),
    ]);
    // the whole cycle is cut
    assert_eq!(graph.cut_weight(&partition), 8.0);

    let lopsided = BTreeMap::from([
        (1, BTreeSet::from([1, 5, 6, 7, 8, 2, 3])),
        (4, BTreeSet::from([4])),
    ]);
    assert_eq!(graph.cut_weight(&lopsided), 3.0);
}

#[test]
fn test_total_weight() {
    let graph = spoke_graph();
    assert_eq!(graph.total_weight(), 20.0);
}
