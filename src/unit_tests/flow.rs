use super::*;

#[test]
fn test_single_arc() {
    let mut network = FlowNetwork::new(2);
    network.add_arc(0, 1, 3.0, 0.0);
    assert_eq!(network.max_flow(0, 1), 3.0);
}

#[test]
fn test_clrs_example() {
    // the CLRS flow network with maximum flow 23
    let mut network = FlowNetwork::new(6);
    for (u, v, c) in [
        (0, 1, 16.0),
        (0, 2, 13.0),
        (1, 2, 10.0),
        (1, 3, 12.0),
        (2, 1, 4.0),
        (2, 4, 14.0),
        (3, 2, 9.0),
        (3, 5, 20.0),
        (4, 3, 7.0),
        (4, 5, 4.0),
    ] {
        network.add_arc(u, v, c, 0.0);
    }
    assert_eq!(network.max_flow(0, 5), 23.0);
}

#[test]
fn test_undirected_path() {
    // 0 -2- 1 -3- 2: bottleneck 2
    let mut network = FlowNetwork::new(3);
    network.add_arc(0, 1, 2.0, 2.0);
    network.add_arc(1, 2, 3.0, 3.0);
    assert_eq!(network.max_flow(0, 2), 2.0);
}

#[test]
fn test_disconnected_sink() {
    let mut network = FlowNetwork::new(3);
    network.add_arc(0, 1, 5.0, 5.0);
    assert_eq!(network.max_flow(0, 2), 0.0);
}

#[test]
fn test_infinite_arcs_feed_finite_bottleneck() {
    // super-source style: 0 -inf- 1 -4- 2 -inf- 3
    let mut network = FlowNetwork::new(4);
    network.add_arc(0, 1, f64::INFINITY, 0.0);
    network.add_arc(1, 2, 4.0, 4.0);
    network.add_arc(2, 3, f64::INFINITY, 0.0);
    assert_eq!(network.max_flow(0, 3), 4.0);
}

#[test]
fn test_residual_sink_side_is_minimal() {
    // 0 -1- 1 -1- 2: both edges are tie-minimum cuts; the sink side must
    // be the smallest one, keeping the source side maximal.
    let mut network = FlowNetwork::new(3);
    network.add_arc(0, 1, 1.0, 1.0);
    network.add_arc(1, 2, 1.0, 1.0);
    assert_eq!(network.max_flow(0, 2), 1.0);
    let member = network.residual_sink_side(2);
    assert_eq!(member, vec![false, false, true]);
}

#[test]
fn test_sink_side_after_flow() {
    // 0 -3- 1 -2- 2, cut is the capacity-2 edge
    let mut network = FlowNetwork::new(3);
    network.add_arc(0, 1, 3.0, 3.0);
    network.add_arc(1, 2, 2.0, 2.0);
    assert_eq!(network.max_flow(0, 2), 2.0);
    let member = network.residual_sink_side(2);
    assert!(!member[0]);
    assert!(!member[1]);
    assert!(member[2]);
}
