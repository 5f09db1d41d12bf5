use super::*;
use crate::instances;

#[test]
fn test_initial_bounds() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let node = BranchNode::new(graph, &terminals, None, 0).unwrap();
    // no terminal-terminal edges, four capacity-3 spokes
    assert_eq!(node.lower_bound(), 6.0);
    assert_eq!(node.upper_bound(), 12.0);
    assert_eq!(node.depth(), 0);
    assert_eq!(node.unassigned_vertices(), vec![5, 6, 7, 8]);
    assert!(!node.is_leaf());
}

#[test]
fn test_assignment_contracts_and_recuts() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let node = BranchNode::new(graph, &terminals, Some((5, 1)), 1).unwrap();
    assert!(node.graph().combined(1).contains(&5));
    assert!(!node.graph().contains(5));
    // 5's cycle edges now hang off terminal 1
    assert_eq!(node.graph().capacity(1, 6), Some(2.0));
    assert_eq!(node.graph().capacity(1, 8), Some(2.0));
}

#[test]
fn test_branch_creates_one_child_per_terminal() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let node = BranchNode::new(graph, &terminals, None, 0).unwrap();
    let allowed: BTreeSet<usize> = terminals.iter().copied().collect();
    let children = node.branch(5, &allowed).unwrap();
    assert_eq!(children.len(), 4);
    for child in &children {
        assert_eq!(child.depth(), 1);
        assert!(child.lower_bound() >= node.lower_bound());
        assert!(!child.graph().contains(5));
    }
}

#[test]
fn test_branch_respects_allowed_terminals() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let node = BranchNode::new(graph, &terminals, None, 0).unwrap();
    let children = node.branch(5, &BTreeSet::from([1, 2])).unwrap();
    assert_eq!(children.len(), 2);
}

#[test]
fn test_leaf_bounds_coincide() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let mut node = BranchNode::new(graph, &terminals, None, 0).unwrap();
    for (vertex, terminal) in [(5, 1), (6, 2), (7, 3), (8, 4)] {
        if node.graph().contains(vertex) {
            node = BranchNode::new(
                node.graph().clone(),
                &terminals,
                Some((vertex, terminal)),
                node.depth() + 1,
            )
            .unwrap();
        }
    }
    assert!(node.is_leaf());
    assert_eq!(node.lower_bound(), node.upper_bound());
    assert_eq!(node.lower_bound(), 8.0);
}

#[test]
fn test_assign_remaining_produces_leaf() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let mut node = BranchNode::new(graph, &terminals, None, 0).unwrap();
    let upper = node.upper_bound();
    node.assign_remaining().unwrap();
    assert!(node.is_leaf());
    assert!(node.lower_bound() <= upper + 1e-9);
    // every original vertex now sits in some terminal's block
    let assigned: usize = terminals
        .iter()
        .map(|&t| node.graph().combined(t).len())
        .sum();
    assert_eq!(assigned, 4);
}
