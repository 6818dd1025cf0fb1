mod common;

use common::synthetic_edges::parallel_edges;
use edge_bundler::compatibility::compute_compatibility;
use edge_bundler::stages::compute_compatibility_with_stats;
use edge_bundler::{BundleParams, Edge, EdgeBundler, Tolerances};
use proptest::prelude::*;

fn edge_strategy() -> impl Strategy<Value = Edge> {
    (
        -100.0f64..100.0,
        -100.0f64..100.0,
        -100.0f64..100.0,
        -100.0f64..100.0,
    )
        .prop_map(Edge::from)
}

#[test]
fn filter_statistics_are_consistent() {
    let edges = parallel_edges(6, 1.0, 10.0);
    let (matrix, stats) = compute_compatibility_with_stats(&edges, 0.6, &Tolerances::default());
    assert_eq!(stats.total_pairs, 15);
    assert!(stats.compatible_pairs <= stats.candidate_pairs);
    assert!(stats.candidate_pairs <= stats.total_pairs);
    assert_eq!(stats.compatible_pairs, matrix.pair_count());
    assert_eq!(matrix.nnz(), 2 * matrix.pair_count());
}

proptest! {
    #[test]
    fn matrix_is_symmetric_with_zero_diagonal(
        edges in proptest::collection::vec(edge_strategy(), 0..24),
        threshold in 0.0f64..1.0,
    ) {
        let m = compute_compatibility(&edges, threshold, &Tolerances::default());
        prop_assert_eq!(m.len(), edges.len());
        for i in 0..edges.len() {
            prop_assert_eq!(m.get(i, i), 0.0);
            prop_assert!(!m.neighbors(i).contains(&i));
            for j in 0..edges.len() {
                prop_assert_eq!(m.get(i, j), m.get(j, i));
            }
            for &s in m.scores(i) {
                prop_assert!(s >= threshold);
                prop_assert!(s <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn edge_order_does_not_change_scores(
        edges in proptest::collection::vec(edge_strategy(), 2..16),
    ) {
        let tol = Tolerances::default();
        let forward = compute_compatibility(&edges, 0.3, &tol);
        let reversed: Vec<Edge> = edges.iter().rev().cloned().collect();
        let backward = compute_compatibility(&reversed, 0.3, &tol);
        let n = edges.len();
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(forward.get(i, j), backward.get(n - 1 - i, n - 1 - j));
            }
        }
    }

    #[test]
    fn endpoints_never_move(
        edges in proptest::collection::vec(edge_strategy(), 1..10),
    ) {
        let params = BundleParams::default().with_threshold(0.2).with_schedule(3, 6);
        let bundled = EdgeBundler::new(params).bundle(&edges).unwrap();
        for (group, edge) in bundled.groups().zip(&edges) {
            let first = group[0];
            let last = group[group.len() - 1];
            prop_assert_eq!((first.x, first.y), (edge.source.x, edge.source.y));
            prop_assert_eq!((last.x, last.y), (edge.target.x, edge.target.y));
            prop_assert!(group.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }
}
