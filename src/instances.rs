//! Canonical small instances with known optimal cut values.
//!
//! These are the standard hand-constructed graphs used throughout the test
//! suite and benchmarks, each returned together with its terminals.

use crate::graph::CutGraph;

/// Four terminals hanging off a capacity-2 four-cycle. Optimal cut 8
/// (both the LP relaxation and the IP reach 8).
pub fn four_spoke_cycle() -> (CutGraph, Vec<usize>) {
    let mut graph = CutGraph::new();
    for (u, v) in [(5, 6), (6, 7), (7, 8), (8, 5)] {
        graph.add_edge(u, v, 2.0);
    }
    for (u, v) in [(1, 5), (2, 6), (3, 7), (4, 8)] {
        graph.add_edge(u, v, 3.0);
    }
    (graph, vec![1, 2, 3, 4])
}

/// Three terminals around a triangle of pair vertices. Optimal cut 8,
/// LP relaxation 7.5: the smallest instance with an integrality gap.
pub fn pair_triangle() -> (CutGraph, Vec<usize>) {
    let mut graph = CutGraph::new();
    for (u, v) in [(1, 12), (1, 13), (2, 12), (2, 23), (3, 13), (3, 23)] {
        graph.add_edge(u, v, 2.0);
    }
    for (u, v) in [(12, 13), (13, 23), (12, 23)] {
        graph.add_edge(u, v, 1.0);
    }
    (graph, vec![1, 2, 3])
}

/// Four terminals, one intermediate vertex per terminal pair, pair
/// vertices joined when they share a terminal. Optimal cut 26, LP 24.
pub fn pair_gadget() -> (CutGraph, Vec<usize>) {
    let mut graph = CutGraph::new();
    for (u, v) in [
        (1, 12),
        (1, 13),
        (1, 14),
        (2, 12),
        (2, 23),
        (2, 24),
        (3, 13),
        (3, 23),
        (3, 34),
        (4, 14),
        (4, 24),
        (4, 34),
    ] {
        graph.add_edge(u, v, 3.0);
    }
    for (u, v) in [
        (12, 13),
        (12, 14),
        (12, 23),
        (12, 24),
        (13, 14),
        (13, 23),
        (13, 34),
        (14, 24),
        (14, 34),
        (23, 24),
        (23, 34),
        (24, 34),
    ] {
        graph.add_edge(u, v, 1.0);
    }
    (graph, vec![1, 2, 3, 4])
}

/// Four terminals, one intermediate vertex per terminal triple. Optimal
/// cut 27, LP 26.
pub fn triple_gadget() -> (CutGraph, Vec<usize>) {
    let mut graph = CutGraph::new();
    for (u, v) in [
        (1, 123),
        (1, 124),
        (1, 134),
        (2, 123),
        (2, 124),
        (2, 234),
        (3, 123),
        (3, 134),
        (3, 234),
        (4, 124),
        (4, 134),
        (4, 234),
    ] {
        graph.add_edge(u, v, 3.0);
    }
    for (u, v) in [
        (123, 124),
        (123, 134),
        (123, 234),
        (124, 134),
        (124, 234),
        (134, 234),
    ] {
        graph.add_edge(u, v, 1.0);
    }
    (graph, vec![1, 2, 3, 4])
}

/// Five terminals plus one intermediate vertex per terminal triple;
/// triples are joined when they agree in exactly one terminal. Optimal
/// cut 110, and the LP relaxation is tight.
pub fn quintuple_gadget() -> (CutGraph, Vec<usize>) {
    let terminals: Vec<usize> = (1..=5).collect();
    let mut triples: Vec<(usize, [usize; 3])> = Vec::new();
    for a in 1..=5usize {
        for b in (a + 1)..=5 {
            for c in (b + 1)..=5 {
                triples.push((100 * a + 10 * b + c, [a, b, c]));
            }
        }
    }

    let mut graph = CutGraph::new();
    for &(id, members) in &triples {
        for &t in &members {
            graph.add_edge(t, id, 5.0);
        }
    }
    for (i, &(id_a, ta)) in triples.iter().enumerate() {
        for &(id_b, tb) in &triples[i + 1..] {
            let agreement = ta.iter().filter(|&&a| tb.contains(&a)).count();
            if agreement == 1 {
                graph.add_edge(id_a, id_b, 1.0);
            }
        }
    }
    (graph, terminals)
}

/// The 9-vertex gadget from the Dahlhaus et al. NP-hardness proof:
/// capacity-1 interior edges, capacity-4 outer edges. Optimal cut 27 with
/// a tight LP relaxation.
pub fn dahlhaus_gadget() -> (CutGraph, Vec<usize>) {
    let mut graph = CutGraph::new();
    for (u, v) in [(2, 3), (2, 8), (3, 6), (4, 6), (4, 7), (7, 8)] {
        graph.add_edge(u, v, 1.0);
    }
    for (u, v) in [
        (1, 2),
        (1, 3),
        (1, 4),
        (1, 7),
        (2, 5),
        (3, 9),
        (4, 5),
        (5, 6),
        (5, 8),
        (6, 9),
        (7, 9),
        (8, 9),
    ] {
        graph.add_edge(u, v, 4.0);
    }
    (graph, vec![1, 5, 9])
}

/// Six-vertex path-and-fork graph whose minimum isolating cut from {1}
/// against {5, 6} has weight 2 and source side {1, 2, 3}.
pub fn isolating_cut_example() -> (CutGraph, Vec<usize>) {
    let mut graph = CutGraph::new();
    for (u, v) in [(1, 2), (3, 4), (4, 5), (4, 6)] {
        graph.add_edge(u, v, 2.0);
    }
    graph.add_edge(2, 3, 3.0);
    (graph, vec![1, 5, 6])
}

#[cfg(test)]
#[path = "unit_tests/instances.rs"]
mod tests;
