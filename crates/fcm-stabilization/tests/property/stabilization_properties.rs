//! Property tests for the stabilization controller.
//!
//! Termination within the initial edge count, monotone edge removal, and a
//! stable terminal state for arbitrary small signed maps.

use fcm_core::config::FcmConfig;
use fcm_core::models::ControllerState;
use fcm_core::AdjacencyMatrix;
use fcm_stabilization::StabilizationController;
use proptest::prelude::*;

/// Square matrices up to 5x5, half the entries zero, with unit weights mixed in.
fn signed_matrix() -> impl Strategy<Value = AdjacencyMatrix> {
    (0usize..=5).prop_flat_map(|n| {
        let weight = prop_oneof![
            4 => Just(0.0),
            1 => Just(-1.0),
            1 => Just(1.0),
            1 => -1.0f64..-0.05,
            1 => 0.05f64..1.0,
        ];
        prop::collection::vec(weight, n * n).prop_map(move |data| {
            let rows: Vec<Vec<f64>> = data.chunks(n.max(1)).map(<[f64]>::to_vec).collect();
            if n == 0 {
                AdjacencyMatrix::zeros(0)
            } else {
                AdjacencyMatrix::from_rows(rows).unwrap()
            }
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_terminates_stable_within_edge_count(m in signed_matrix()) {
        let edges = m.nonzero_count();
        let outcome = StabilizationController::new(m, &FcmConfig::default())
            .unwrap()
            .run()
            .unwrap();

        prop_assert_eq!(outcome.state, ControllerState::Stable);
        prop_assert!(outcome.mutation_rounds() <= edges);
        prop_assert_eq!(outcome.reports.len(), outcome.mutation_rounds() + 1);
        let last = outcome.reports.last().unwrap();
        prop_assert!(last.structurally_stable);
        prop_assert!(last.even_cycles.is_empty());
    }

    #[test]
    fn prop_every_round_removes_a_live_edge(m in signed_matrix()) {
        let n = m.size();
        let mut current = m.clone();
        let outcome = StabilizationController::new(m, &FcmConfig::default())
            .unwrap()
            .run()
            .unwrap();

        for record in &outcome.history {
            prop_assert!(!record.removed_edges.is_empty());
            prop_assert!(record
                .removed_edges
                .iter()
                .any(|e| current.get(e.source, e.target).is_some_and(|w| w != 0.0)));
            let before = current.nonzero_count();
            current = current.with_edges_zeroed(&record.removed_edges);
            prop_assert!(current.nonzero_count() < before);
        }
        prop_assert_eq!(&current, &outcome.final_matrix);
        prop_assert_eq!(outcome.final_matrix.size(), n);
    }

    #[test]
    fn prop_removal_never_adds_edges(m in signed_matrix()) {
        let outcome = StabilizationController::new(m.clone(), &FcmConfig::default())
            .unwrap()
            .run()
            .unwrap();
        for (i, j) in (0..m.size()).flat_map(|i| (0..m.size()).map(move |j| (i, j))) {
            let final_weight = outcome.final_matrix.get(i, j).unwrap();
            prop_assert!(final_weight == 0.0 || Some(final_weight) == m.get(i, j));
        }
    }

    #[test]
    fn prop_zero_matrix_needs_no_mutation(n in 0usize..8) {
        let outcome = StabilizationController::new(AdjacencyMatrix::zeros(n), &FcmConfig::default())
            .unwrap()
            .run()
            .unwrap();
        prop_assert!(outcome.is_stable());
        prop_assert_eq!(outcome.mutation_rounds(), 0);
        prop_assert_eq!(outcome.reports.len(), 1);
    }

    #[test]
    fn prop_round_cap_bounds_report_count(m in signed_matrix(), cap in 0usize..4) {
        let outcome = StabilizationController::new(m, &FcmConfig::default())
            .unwrap()
            .with_max_rounds(Some(cap))
            .run()
            .unwrap();
        prop_assert!(outcome.reports.len() <= cap);
        if outcome.state == ControllerState::BoundedStop {
            prop_assert_eq!(outcome.reports.len(), cap);
        }
    }
}
