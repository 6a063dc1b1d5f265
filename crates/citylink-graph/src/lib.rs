//! # citylink-graph
//!
//! Reachability engine for directed graphs given as adjacency matrices.
//!
//! This crate holds the pure data structures and algorithms behind CityLink,
//! without any file or console I/O. It provides:
//!
//! - **Edge lists**: row-major conversion of an [`AdjacencyMatrix`] into [`Edge`]s
//! - **Transitive closure**: fixed-point propagation with duplicate suppression
//! - **Route queries**: one concrete [`Path`] between two nodes, or a clean
//!   "unreachable" answer
//!
//! ## Pipeline
//!
//! ```text
//!  AdjacencyMatrix ──► build_edge_list ──► Vec<Edge>
//!                                              │
//!                                              ▼
//!                                    close / close_with
//!                                              │
//!                                              ▼
//!                                           Closure ──► find_path ──► PathOutcome
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use citylink_graph::{AdjacencyMatrix, Closure, PathOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = AdjacencyMatrix::from_rows(vec![
//!     vec![0, 1, 0],
//!     vec![0, 0, 1],
//!     vec![0, 0, 0],
//! ])?;
//!
//! let closure = Closure::from_matrix(&matrix)?;
//! assert_eq!(closure.len(), 3);
//!
//! match closure.find_path(0, 2)? {
//!     PathOutcome::Found { path } => assert_eq!(path.to_string(), "0 => 1 => 2"),
//!     PathOutcome::Unreachable { .. } => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Running out of storage is reported as [`ReachError::Allocation`] tagged with
//! the [`Stage`] that failed. An unreachable target is not an error; it is the
//! [`PathOutcome::Unreachable`] value.

use std::collections::TryReserveError;
use std::fmt;

pub mod closure;
pub mod edge;
pub mod matrix;
pub mod path;

pub use closure::{Closure, ClosureOptions, SelfPairs, close, close_with};
pub use edge::{Edge, build_edge_list};
pub use matrix::{AdjacencyMatrix, MatrixError};
pub use path::{Path, PathOutcome, PathStrategy};

/// Pipeline stage that failed to obtain storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    EdgeList,
    Closure,
    Path,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::EdgeList => "edge-list construction",
            Stage::Closure => "closure growth",
            Stage::Path => "path storage growth",
        })
    }
}

/// Error types for reachability operations.
#[derive(Debug, thiserror::Error)]
pub enum ReachError {
    /// Storage could not grow. Fatal for the whole pipeline.
    #[error("allocation failed during {stage}: {source}")]
    Allocation {
        stage: Stage,
        #[source]
        source: TryReserveError,
    },

    /// The closure says `target` is reachable but no route could be rebuilt.
    #[error("route reconstruction from {start} to {target} stalled after {partial:?}")]
    PathStalled {
        start: usize,
        target: usize,
        partial: Vec<usize>,
    },

    /// The fixed-point loop hit the configured pass cap.
    #[error("closure did not reach a fixed point within {limit} passes")]
    PassLimit { limit: usize },
}

/// Result type alias for reachability operations.
pub type Result<T> = std::result::Result<T, ReachError>;

#[cfg(test)]
mod tests;
