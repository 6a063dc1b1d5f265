//! Directed edges and the edge-list builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matrix::AdjacencyMatrix;
use crate::{ReachError, Result, Stage};

/// An ordered `(from, to)` pair of node indices.
///
/// Self loops (`from == to`) are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.from, edge.to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Convert a neighbor table into its list of direct edges.
///
/// Cells are scanned in row-major order and each 1-cell contributes exactly one
/// edge, so the result carries no duplicates and its order follows the scan.
/// Storage is reserved for the exact number of 1-cells.
///
/// # Errors
///
/// Returns [`ReachError::Allocation`] with [`Stage::EdgeList`] if the edge
/// storage cannot be obtained. Malformed data cannot reach this function.
pub fn build_edge_list(matrix: &AdjacencyMatrix) -> Result<Vec<Edge>> {
    let count = matrix.edge_count();

    let mut edges = Vec::new();
    edges
        .try_reserve_exact(count)
        .map_err(|source| ReachError::Allocation {
            stage: Stage::EdgeList,
            source,
        })?;

    edges.extend(matrix.ones().map(Edge::from));

    tracing::debug!(nodes = matrix.size(), edges = edges.len(), "built edge list");
    Ok(edges)
}
