//! Property-based tests for citylink-graph using proptest.
//!
//! Closures have strong algebraic properties (superset of the input, closed
//! under composition, duplicate free, idempotent), which makes them a good fit
//! for randomized checking against an independent breadth-first oracle.

use crate::{
    AdjacencyMatrix, Closure, ClosureOptions, PathOutcome, PathStrategy, ReachError, SelfPairs,
    build_edge_list, close,
};
use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

/// Strategy for generating small matrices (0-7 nodes, arbitrary 0/1 cells).
fn matrix_strategy() -> impl Strategy<Value = AdjacencyMatrix> {
    (0usize..=7).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec(0u8..=1, size), size)
            .prop_map(|rows| AdjacencyMatrix::from_rows(rows).unwrap())
    })
}

/// Nodes reachable from `start` through one or more direct edges.
fn reachable_from(matrix: &AdjacencyMatrix, start: usize) -> HashSet<usize> {
    let mut reached = HashSet::new();
    let mut queue: VecDeque<usize> = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for next in 0..matrix.size() {
            if matrix.get(node, next) && reached.insert(next) {
                queue.push_back(next);
            }
        }
    }
    reached
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every direct edge survives, in order, as the closure prefix.
    #[test]
    fn prop_closure_is_superset(matrix in matrix_strategy()) {
        let edges = build_edge_list(&matrix).unwrap();
        let closure = close(edges.clone()).unwrap();
        prop_assert_eq!(closure.direct_edges(), edges.as_slice());
    }

    /// Property: (a,b) ∈ R* ∧ (b,c) ∈ R* ⟹ (a,c) ∈ R*
    #[test]
    fn prop_closure_is_transitive(matrix in matrix_strategy()) {
        let closure = Closure::from_matrix(&matrix).unwrap();
        for first in closure.iter() {
            for second in closure.iter().filter(|e| e.from == first.to) {
                prop_assert!(
                    closure.contains(first.from, second.to),
                    "missing ({}, {}) from {} and {}", first.from, second.to, first, second
                );
            }
        }
    }

    /// Property: excluding self pairs keeps transitivity for a ≠ c.
    #[test]
    fn prop_exclude_is_transitive_off_diagonal(matrix in matrix_strategy()) {
        let options = ClosureOptions::new().with_self_pairs(SelfPairs::Exclude);
        let closure = Closure::from_matrix_with(&matrix, &options).unwrap();
        for first in closure.iter() {
            for second in closure.iter().filter(|e| e.from == first.to) {
                if first.from != second.to {
                    prop_assert!(closure.contains(first.from, second.to));
                }
            }
        }
        for edge in closure.derived_edges() {
            prop_assert!(!edge.is_self_loop());
        }
    }

    /// Property: no (from, to) pair appears twice.
    #[test]
    fn prop_closure_has_no_duplicates(matrix in matrix_strategy()) {
        let closure = Closure::from_matrix(&matrix).unwrap();
        let unique: HashSet<_> = closure.iter().copied().collect();
        prop_assert_eq!(unique.len(), closure.len());
    }

    /// Property: closing a closed set changes nothing.
    #[test]
    fn prop_closure_is_idempotent(matrix in matrix_strategy()) {
        let closure = Closure::from_matrix(&matrix).unwrap();
        let again = close(closure.edges().to_vec()).unwrap();
        prop_assert_eq!(again.edges(), closure.edges());
    }

    /// Property: the closure is exactly the reachability relation.
    #[test]
    fn prop_closure_matches_bfs_oracle(matrix in matrix_strategy()) {
        let closure = Closure::from_matrix(&matrix).unwrap();
        for a in 0..matrix.size() {
            let reached = reachable_from(&matrix, a);
            for b in 0..matrix.size() {
                prop_assert_eq!(closure.contains(a, b), reached.contains(&b), "({}, {})", a, b);
            }
        }
    }

    /// Property: found paths are well formed; unreachable iff no closure edge.
    #[test]
    fn prop_paths_are_valid(matrix in matrix_strategy()) {
        let closure = Closure::from_matrix(&matrix).unwrap();

        for start in 0..matrix.size() {
            for target in 0..matrix.size() {
                for strategy in [PathStrategy::Greedy, PathStrategy::Shortest] {
                    let outcome = match closure.find_path_with(start, target, strategy) {
                        Ok(outcome) => outcome,
                        // The greedy walk may dead-end; it must say so instead of looping.
                        Err(ReachError::PathStalled { .. }) if strategy == PathStrategy::Greedy => {
                            prop_assert!(closure.contains(start, target));
                            continue;
                        }
                        Err(err) => return Err(TestCaseError::fail(err.to_string())),
                    };

                    match outcome {
                        PathOutcome::Unreachable { .. } => {
                            prop_assert!(!closure.contains(start, target));
                        }
                        PathOutcome::Found { path } => {
                            prop_assert!(closure.contains(start, target));
                            prop_assert!(path.len() >= 2);
                            prop_assert_eq!(path.start(), start);
                            prop_assert_eq!(path.target(), target);
                            for hop in path.hops() {
                                prop_assert!(closure.contains(hop.from, hop.to));
                                if strategy == PathStrategy::Shortest {
                                    prop_assert!(closure.direct_edges().contains(&hop));
                                }
                            }

                            let inner = &path.nodes()[..path.len() - 1];
                            let unique: HashSet<_> = inner.iter().collect();
                            prop_assert_eq!(unique.len(), inner.len());
                            if start != target {
                                prop_assert!(!inner.contains(&target));
                            }
                        }
                    }
                }
            }
        }
    }
}
