use super::*;

#[test]
fn test_top_degree_by_capacity() {
    // vertex 2 carries the heavy edges, vertex 4 the most incident ones
    let graph = CutGraph::from_weighted_edges([
        (1, 2, 10.0),
        (2, 3, 10.0),
        (3, 4, 1.0),
        (4, 5, 1.0),
        (4, 6, 1.0),
    ]);
    let terminals = top_degree_terminals(&graph, 2).unwrap();
    assert_eq!(terminals, vec![2, 3]);
}

#[test]
fn test_ties_break_by_smallest_id() {
    let graph = CutGraph::from_unit_edges([(1, 2), (2, 3), (3, 4), (4, 1)]);
    // every vertex has degree 2
    assert_eq!(top_degree_terminals(&graph, 3).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_rejects_bad_counts() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    assert!(top_degree_terminals(&graph, 1).is_err());
    assert!(top_degree_terminals(&graph, 3).is_err());
}
