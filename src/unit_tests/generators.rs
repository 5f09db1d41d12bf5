use super::*;
use std::collections::BTreeSet;

fn is_connected(graph: &CutGraph) -> bool {
    let vertices = graph.vertices();
    let Some(&start) = vertices.first() else {
        return true;
    };
    let mut seen = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(v) = stack.pop() {
        for w in graph.neighbors(v) {
            if seen.insert(w) {
                stack.push(w);
            }
        }
    }
    seen.len() == vertices.len()
}

#[test]
fn test_generates_connected_graph() {
    let graph = random_connected_graph(20, 15, 10, 42);
    assert_eq!(graph.num_vertices(), 20);
    assert!(graph.num_edges() >= 19);
    assert!(is_connected(&graph));
}

#[test]
fn test_same_seed_same_graph() {
    let a = random_connected_graph(12, 8, 5, 7);
    let b = random_connected_graph(12, 8, 5, 7);
    assert_eq!(a.edges(), b.edges());
}

#[test]
fn test_different_seeds_differ() {
    let a = random_connected_graph(12, 8, 5, 7);
    let b = random_connected_graph(12, 8, 5, 8);
    assert_ne!(a.edges(), b.edges());
}

#[test]
fn test_capacities_in_range() {
    let graph = random_connected_graph(15, 10, 3, 1);
    for (_, _, capacity) in graph.edges() {
        assert!((1.0..=3.0).contains(&capacity));
        assert_eq!(capacity.fract(), 0.0);
    }
}
