use super::*;

#[test]
fn test_four_spoke_cycle_shape() {
    let (graph, terminals) = four_spoke_cycle();
    assert_eq!(graph.num_vertices(), 8);
    assert_eq!(graph.num_edges(), 8);
    assert_eq!(terminals, vec![1, 2, 3, 4]);
}

#[test]
fn test_pair_triangle_shape() {
    let (graph, terminals) = pair_triangle();
    assert_eq!(graph.num_vertices(), 6);
    assert_eq!(graph.num_edges(), 9);
    assert_eq!(terminals.len(), 3);
}

#[test]
fn test_pair_gadget_shape() {
    let (graph, _) = pair_gadget();
    assert_eq!(graph.num_vertices(), 10);
    assert_eq!(graph.num_edges(), 24);
}

#[test]
fn test_triple_gadget_shape() {
    let (graph, _) = triple_gadget();
    assert_eq!(graph.num_vertices(), 8);
    assert_eq!(graph.num_edges(), 18);
}

#[test]
fn test_quintuple_gadget_shape() {
    let (graph, terminals) = quintuple_gadget();
    // 5 terminals plus the 10 three-element subsets
    assert_eq!(graph.num_vertices(), 15);
    // 3 terminal edges per subset, and 15 subset pairs agreeing in one
    assert_eq!(graph.num_edges(), 45);
    assert_eq!(terminals, vec![1, 2, 3, 4, 5]);
    for &t in &terminals {
        assert_eq!(graph.neighbors(t).len(), 6);
    }
}

#[test]
fn test_dahlhaus_gadget_shape() {
    let (graph, terminals) = dahlhaus_gadget();
    assert_eq!(graph.num_vertices(), 9);
    assert_eq!(graph.num_edges(), 18);
    assert_eq!(terminals, vec![1, 5, 9]);
}

#[test]
fn test_terminals_exist_in_their_graphs() {
    for (graph, terminals) in [
        four_spoke_cycle(),
        pair_triangle(),
        pair_gadget(),
        triple_gadget(),
        quintuple_gadget(),
        dahlhaus_gadget(),
        isolating_cut_example(),
    ] {
        for &t in &terminals {
            assert!(graph.contains(t));
        }
    }
}
