use super::*;
use crate::instances;

#[test]
fn test_default_candidates_allow_everything() {
    let (graph, terminals) = instances::pair_triangle();
    let candidates = default_candidates(&graph, &terminals);
    assert_eq!(candidates.len(), graph.num_vertices());
    let all: BTreeSet<usize> = terminals.iter().copied().collect();
    for set in candidates.values() {
        assert_eq!(*set, all);
    }
}

#[test]
fn test_none_mode_needs_no_backend() {
    let (graph, terminals) = instances::pair_triangle();
    let candidates = terminal_candidates(&graph, &terminals, Persistence::None).unwrap();
    assert_eq!(candidates, default_candidates(&graph, &terminals));
}

#[cfg(feature = "lp-solver")]
mod with_backend {
    use super::*;

    #[test]
    fn test_candidates_are_never_empty() {
        let (graph, terminals) = instances::pair_triangle();
        for mode in [Persistence::Weak, Persistence::Strong] {
            let candidates = terminal_candidates(&graph, &terminals, mode).unwrap();
            assert_eq!(candidates.len(), graph.num_vertices());
            for (vertex, set) in &candidates {
                assert!(!set.is_empty(), "vertex {vertex} lost all candidates");
                assert!(set.iter().all(|t| terminals.contains(t)));
            }
        }
    }

    #[test]
    fn test_weak_pins_terminals_to_themselves() {
        let (graph, terminals) = instances::four_spoke_cycle();
        let candidates =
            terminal_candidates(&graph, &terminals, Persistence::Weak).unwrap();
        for &t in &terminals {
            assert_eq!(candidates[&t], BTreeSet::from([t]));
        }
    }

    #[test]
    fn test_check_persistence_holds_on_small_graphs() {
        for (graph, terminals) in [
            instances::four_spoke_cycle(),
            instances::pair_triangle(),
            instances::dahlhaus_gadget(),
        ] {
            assert!(check_persistence(&graph, &terminals, Persistence::Weak).unwrap());
            assert!(check_persistence(&graph, &terminals, Persistence::Strong).unwrap());
        }
    }
}

#[cfg(not(feature = "lp-solver"))]
#[test]
fn test_lp_modes_fail_without_backend() {
    let (graph, terminals) = instances::pair_triangle();
    let err = terminal_candidates(&graph, &terminals, Persistence::Weak).unwrap_err();
    assert!(matches!(err, crate::error::CutError::SolverFailure(_)));
}
