//! Property-based tests for the Held-Karp solver.
//!
//! # Invariants tested
//!
//! - **Closed tour:** starts and ends at the Hotel and visits every other
//!   landmark exactly once.
//! - **Determinism:** solving the same graph twice yields identical output.
//! - **Optimality:** totals and order agree with a brute-force oracle,
//!   including the time and canonical-order tie-breaks.
//! - **Closing leg:** dropping the final return edge removes exactly its
//!   weight from the totals.


use std::collections::HashSet;

use proptest::prelude::*;
use tour_core::test_support::{raw_graph, without_edge};
use tour_core::{Landmark, SolveRequest, Solver};
use tour_solver_dp::HeldKarpSolver;

use proptest_support::{brute_force, complete_graph_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every landmark appears once between two Hotel visits.
    #[test]
    fn tour_visits_every_landmark_once(records in complete_graph_strategy(2, 8)) {
        let graph = raw_graph(&records).expect("generated graphs are valid");
        let expected: HashSet<Landmark> = graph.landmarks().iter().cloned().collect();
        let response = HeldKarpSolver::new(graph)
            .solve(&SolveRequest::default())
            .expect("complete graphs always solve");

        let tour = &response.tour.landmarks;
        prop_assert_eq!(tour.first(), Some(&Landmark::hotel()));
        prop_assert_eq!(tour.last(), Some(&Landmark::hotel()));
        prop_assert_eq!(tour.len(), expected.len() + 1);
        let inner = tour.get(..tour.len() - 1).unwrap_or_default();
        let visited: HashSet<Landmark> = inner.iter().cloned().collect();
        prop_assert_eq!(visited.len(), inner.len());
        prop_assert_eq!(visited, expected);
    }

    /// Property: identical inputs give bit-identical tours and totals.
    #[test]
    fn solving_is_deterministic(records in complete_graph_strategy(2, 7)) {
        let solver = HeldKarpSolver::new(raw_graph(&records).expect("generated graphs are valid"));
        let first = solver.solve(&SolveRequest::default()).expect("first solve");
        let second = solver.solve(&SolveRequest::default()).expect("second solve");
        prop_assert_eq!(&first.tour.landmarks, &second.tour.landmarks);
        prop_assert_eq!(first.tour.total_score.to_bits(), second.tour.total_score.to_bits());
        prop_assert_eq!(first.tour.total_time.to_bits(), second.tour.total_time.to_bits());
    }

    /// Property: the solver agrees with exhaustive permutation search.
    #[test]
    fn solver_matches_brute_force(records in complete_graph_strategy(2, 6)) {
        let graph = raw_graph(&records).expect("generated graphs are valid");
        let oracle = brute_force(&records, graph.landmarks());
        let response = HeldKarpSolver::new(graph)
            .solve(&SolveRequest::default())
            .expect("complete graphs always solve");

        prop_assert_eq!(response.tour.total_score, oracle.total_score);
        prop_assert_eq!(response.tour.total_time, oracle.total_time);
        prop_assert_eq!(response.tour.landmarks, oracle.landmarks);
    }

    /// Property: a missing closing leg contributes exactly `(0.0, 0.0)`.
    #[test]
    fn missing_return_edges_count_as_zero(records in complete_graph_strategy(2, 6)) {
        let graph = raw_graph(&records).expect("generated graphs are valid");
        let solver = HeldKarpSolver::new(graph);
        let full = solver.solve(&SolveRequest::default()).expect("complete graph");
        let tour = &full.tour.landmarks;
        let last = tour.get(tour.len() - 2).cloned().expect("tour has a final sight");

        let trimmed = without_edge(&records, last.as_str(), "Hotel");
        let trimmed_graph = raw_graph(&trimmed).expect("trimmed graph is valid");
        let closing = records
            .iter()
            .find(|record| record.from == last && record.to == Landmark::hotel())
            .map(|record| (record.base_score, record.base_travel_time))
            .expect("complete graph has a return edge");
        let without_return = HeldKarpSolver::new(trimmed_graph.clone())
            .solve(&SolveRequest::default())
            .expect("return edges are optional");

        // The same order is at least as good once its closing leg is free,
        // so the optimum can only rise in score or fall in time.
        prop_assert!(without_return.tour.total_score >= full.tour.total_score - closing.0);
        if without_return.tour.landmarks == full.tour.landmarks {
            prop_assert_eq!(without_return.tour.total_score, full.tour.total_score - closing.0);
            prop_assert_eq!(without_return.tour.total_time, full.tour.total_time - closing.1);
        }
        let oracle = brute_force(&trimmed, trimmed_graph.landmarks());
        prop_assert_eq!(without_return.tour.total_score, oracle.total_score);
        prop_assert_eq!(without_return.tour.total_time, oracle.total_time);
    }
}
