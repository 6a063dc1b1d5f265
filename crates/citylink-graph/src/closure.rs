//! Transitive closure by fixed-point propagation.
//!
//! The closure starts as the direct edge list and is grown in passes. Each pass
//! composes every pair of edges that existed when the pass began; edges added
//! during a pass only take part in composition from the next pass on. The loop
//! stops after the first pass that adds nothing.
//!
//! ```rust
//! use citylink_graph::{AdjacencyMatrix, Closure, Edge};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = AdjacencyMatrix::from_edges(3, &[(0, 1), (1, 2)]);
//! let closure = Closure::from_matrix(&matrix)?;
//!
//! assert_eq!(
//!     closure.edges(),
//!     &[Edge::new(0, 1), Edge::new(1, 2), Edge::new(0, 2)]
//! );
//! assert!(closure.contains(0, 2));
//! # Ok(())
//! # }
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, build_edge_list};
use crate::matrix::AdjacencyMatrix;
use crate::{ReachError, Result, Stage};

/// How compositions that lead back to their own start are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfPairs {
    /// Cycles derive `(a, a)` like any other composed pair.
    #[default]
    Derive,
    /// Composition never produces `(a, a)`. Self loops already present in
    /// the direct edges are kept.
    Exclude,
}

/// Tuning knobs for [`close_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureOptions {
    pub self_pairs: SelfPairs,
    /// Abort with [`ReachError::PassLimit`] instead of running more passes.
    pub max_passes: Option<usize>,
}

impl ClosureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_pairs(mut self, self_pairs: SelfPairs) -> Self {
        self.self_pairs = self_pairs;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }
}

/// The transitive closure of a direct edge list.
///
/// Edge order is meaningful: the first [`direct_edges`](Self::direct_edges)
/// are the input edges in their original order, followed by derived edges in
/// the order they were discovered. Path reconstruction depends on this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Closure {
    edges: Vec<Edge>,
    direct_count: usize,
    passes: usize,
    #[serde(skip)]
    index: FxHashSet<Edge>,
}

impl Closure {
    /// Build the direct edge list of `matrix` and close it with default options.
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Result<Self> {
        Self::from_matrix_with(matrix, &ClosureOptions::default())
    }

    pub fn from_matrix_with(matrix: &AdjacencyMatrix, options: &ClosureOptions) -> Result<Self> {
        close_with(build_edge_list(matrix)?, options)
    }

    /// All edges, direct first, then derived in discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The input edges.
    pub fn direct_edges(&self) -> &[Edge] {
        &self.edges[..self.direct_count]
    }

    /// Edges produced by composition.
    pub fn derived_edges(&self) -> &[Edge] {
        &self.edges[self.direct_count..]
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of passes the fixed-point loop ran, including the final
    /// pass that added nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether `to` is reachable from `from`.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.index.contains(&Edge::new(from, to))
    }

    /// Nodes reachable from `node`, in closure order.
    pub fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .filter(move |edge| edge.from == node)
            .map(|edge| edge.to)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

impl<'a> IntoIterator for &'a Closure {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Close `edges` with default options.
pub fn close(edges: Vec<Edge>) -> Result<Closure> {
    close_with(edges, &ClosureOptions::default())
}

/// Compute the transitive closure of `edges`.
///
/// For every pair of edges `(u, v)` and `(y, w)` present at the start of a
/// pass with `v == y`, the pair `(u, w)` is appended unless it is already in
/// the closure or the composition is an edge with itself (`u == y` and
/// `v == w`). Repeated input edges keep their first occurrence only.
///
/// # Errors
///
/// - [`ReachError::Allocation`] with [`Stage::Closure`] when the closure cannot
///   grow. The partial closure is dropped.
/// - [`ReachError::PassLimit`] when `options.max_passes` is exceeded.
pub fn close_with(mut edges: Vec<Edge>, options: &ClosureOptions) -> Result<Closure> {
    let _span = tracing::debug_span!("close", direct = edges.len()).entered();

    let mut index = FxHashSet::default();
    index.try_reserve(edges.len()).map_err(closure_alloc)?;
    edges.retain(|edge| index.insert(*edge));
    let direct_count = edges.len();

    let mut passes = 0;
    let mut changed = true;

    while changed {
        if let Some(limit) = options.max_passes {
            if passes >= limit {
                return Err(ReachError::PassLimit { limit });
            }
        }

        changed = false;
        passes += 1;
        let limit = edges.len();

        for i in 0..limit {
            let Edge { from: u, to: v } = edges[i];
            for j in 0..limit {
                let Edge { from: y, to: w } = edges[j];

                if v != y || (u == y && v == w) {
                    continue;
                }
                if u == w && options.self_pairs == SelfPairs::Exclude {
                    continue;
                }

                let derived = Edge::new(u, w);
                if index.contains(&derived) {
                    continue;
                }

                edges.try_reserve(1).map_err(closure_alloc)?;
                index.try_reserve(1).map_err(closure_alloc)?;
                edges.push(derived);
                index.insert(derived);
                changed = true;
            }
        }

        tracing::trace!(pass = passes, added = edges.len() - limit, total = edges.len());
    }

    tracing::debug!(
        direct = direct_count,
        derived = edges.len() - direct_count,
        passes,
        "closure reached fixed point"
    );

    Ok(Closure {
        edges,
        direct_count,
        passes,
        index,
    })
}

fn closure_alloc(source: std::collections::TryReserveError) -> ReachError {
    ReachError::Allocation {
        stage: Stage::Closure,
        source,
    }
}
