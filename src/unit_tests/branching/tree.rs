use super::*;
use crate::instances;
use crate::persistence;

fn build_tree(graph: &CutGraph, terminals: &[usize]) -> SearchTree {
    let candidates = persistence::default_candidates(graph, terminals);
    SearchTree::new(graph, terminals, candidates, VertexSelection::default()).unwrap()
}

#[test]
fn test_solves_spoke_cycle() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let mut tree = build_tree(&graph, &terminals);
    let outcome = tree.run(false, None).unwrap();
    assert!(!outcome.timed_out);
    assert!(outcome.node.is_leaf());
    assert_eq!(outcome.node.lower_bound(), 8.0);
    assert_eq!(outcome.best_upper, 8.0);
}

#[test]
fn test_partition_extraction_covers_graph() {
    let (graph, terminals) = instances::pair_triangle();
    let mut tree = build_tree(&graph, &terminals);
    let outcome = tree.run(false, None).unwrap();
    let partition = SearchTree::extract_partition(&terminals, &outcome.node);

    let mut seen = BTreeSet::new();
    for (&t, block) in &partition {
        assert!(block.contains(&t));
        for &v in block {
            assert!(seen.insert(v), "vertex {v} appears in two blocks");
        }
    }
    assert_eq!(seen, graph.vertices().into_iter().collect());
}

#[test]
fn test_bound_crossing_termination() {
    let (graph, terminals) = instances::dahlhaus_gadget();
    let mut tree = build_tree(&graph, &terminals);
    let outcome = tree.run(false, None).unwrap();
    assert_eq!(outcome.node.lower_bound(), 27.0);
    assert!(outcome.best_lower >= outcome.node.lower_bound() - 1e-9);
}

#[test]
fn test_time_limit_returns_feasible_incumbent() {
    let (graph, terminals) = instances::pair_gadget();
    let mut tree = build_tree(&graph, &terminals);
    let outcome = tree.run(false, Some(0.0)).unwrap();
    assert!(outcome.timed_out);
    assert!(outcome.node.is_leaf());
    assert!(outcome.best_upper >= outcome.best_lower - 1e-9);
    let partition = SearchTree::extract_partition(&terminals, &outcome.node);
    let covered: usize = partition.values().map(|b| b.len()).sum();
    assert_eq!(covered, graph.num_vertices());
}

#[test]
fn test_counters_and_report() {
    let (graph, terminals) = instances::pair_triangle();
    let mut tree = build_tree(&graph, &terminals);
    let outcome = tree.run(false, None).unwrap();
    assert!(tree.nodes_total() >= 1);
    assert!(tree.nodes_explored() >= 1);
    let report = tree.last_report().expect("final report");
    assert_eq!(report.unassigned_vertices, 0);
    assert_eq!(report.node_lower_bound, outcome.node.lower_bound());
    assert!(report.elapsed_seconds >= 0.0);
    let sizes: usize = report.source_set_sizes.values().sum();
    assert_eq!(sizes + terminals.len(), graph.num_vertices());
}

#[test]
fn test_determinism() {
    let (graph, terminals) = instances::triple_gadget();
    let mut first = build_tree(&graph, &terminals);
    let mut second = build_tree(&graph, &terminals);
    let a = first.run(false, None).unwrap();
    let b = second.run(false, None).unwrap();
    assert_eq!(a.node.lower_bound(), b.node.lower_bound());
    assert_eq!(
        SearchTree::extract_partition(&terminals, &a.node),
        SearchTree::extract_partition(&terminals, &b.node)
    );
    assert_eq!(first.nodes_total(), second.nodes_total());
}

#[test]
fn test_vertex_selection_policies() {
    let graph = CutGraph::from_weighted_edges([(1, 2, 1.0), (2, 3, 5.0), (3, 4, 1.0)]);
    let unassigned = vec![2, 3];
    assert_eq!(
        VertexSelection::HighestDegree.choose(&graph, &unassigned),
        Some(2)
    );
    assert_eq!(
        VertexSelection::FirstUnassigned.choose(&graph, &unassigned),
        Some(2)
    );
    assert_eq!(VertexSelection::HighestDegree.choose(&graph, &[]), None);
}

#[test]
fn test_highest_degree_breaks_ties_by_smallest_id() {
    let graph = CutGraph::from_weighted_edges([(1, 2, 1.0), (1, 3, 1.0)]);
    assert_eq!(
        VertexSelection::HighestDegree.choose(&graph, &[2, 3]),
        Some(2)
    );
}
