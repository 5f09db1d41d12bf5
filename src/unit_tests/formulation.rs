use super::*;
use crate::instances;

#[test]
fn test_lp_matches_ip_on_tight_instance() {
    let (graph, terminals) = instances::four_spoke_cycle();
    let formulation = CutFormulation::new(&graph, &terminals).unwrap();
    let lp = formulation.solve_lp().unwrap();
    let ip = formulation.solve_ip().unwrap();
    assert!((lp.cut_value - 8.0).abs() < 1e-4);
    assert!((ip.cut_value - 8.0).abs() < 1e-4);
}

#[test]
fn test_integrality_gap_instance() {
    let (graph, terminals) = instances::pair_triangle();
    let formulation = CutFormulation::new(&graph, &terminals).unwrap();
    let lp = formulation.solve_lp().unwrap();
    let ip = formulation.solve_ip().unwrap();
    assert!((lp.cut_value - 7.5).abs() < 1e-4);
    assert!((ip.cut_value - 8.0).abs() < 1e-4);
}

#[test]
fn test_triple_gadget_gap() {
    let (graph, terminals) = instances::triple_gadget();
    let formulation = CutFormulation::new(&graph, &terminals).unwrap();
    assert!((formulation.solve_lp().unwrap().cut_value - 26.0).abs() < 1e-4);
    assert!((formulation.solve_ip().unwrap().cut_value - 27.0).abs() < 1e-4);
}

#[test]
fn test_ip_source_sets_partition_the_graph() {
    let (graph, terminals) = instances::dahlhaus_gadget();
    let ip = CutFormulation::new(&graph, &terminals)
        .unwrap()
        .solve_ip()
        .unwrap();
    assert!((ip.cut_value - 27.0).abs() < 1e-4);

    let mut seen = BTreeSet::new();
    for (&t, block) in &ip.source_sets {
        assert!(block.contains(&t));
        for &v in block {
            assert!(seen.insert(v), "vertex {v} assigned to two terminals");
        }
    }
    assert_eq!(seen, graph.vertices().into_iter().collect());
}

#[test]
fn test_terminals_are_fixed_in_relaxation() {
    let (graph, terminals) = instances::pair_triangle();
    let lp = CutFormulation::new(&graph, &terminals)
        .unwrap()
        .solve_lp()
        .unwrap();
    for &t in &terminals {
        assert!((lp.assignment(t, t) - 1.0).abs() <= ASSIGNMENT_TOLERANCE);
    }
}

#[test]
fn test_assignments_sum_to_one() {
    let (graph, terminals) = instances::pair_triangle();
    let lp = CutFormulation::new(&graph, &terminals)
        .unwrap()
        .solve_lp()
        .unwrap();
    for &v in &graph.vertices() {
        let total: f64 = terminals.iter().map(|&k| lp.assignment(v, k)).sum();
        assert!((total - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_rejects_invalid_instances() {
    let graph = CutGraph::from_unit_edges([(1, 2)]);
    assert!(CutFormulation::new(&graph, &[1]).is_err());
    assert!(CutFormulation::new(&graph, &[1, 99]).is_err());
}
