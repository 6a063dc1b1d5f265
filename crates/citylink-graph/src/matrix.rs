//! Square 0/1 adjacency matrix.
//!
//! Cell `(i, j) == 1` records a direct connection from node `i` to node `j`.
//! The matrix is validated once at construction; everything downstream trusts it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building an [`AdjacencyMatrix`] from raw rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row does not have exactly N cells.
    #[error("row {row} has {actual} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

/// An N×N neighbor table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Create an N×N matrix with no connections.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Build a matrix from rows of `0`/`1` values.
    ///
    /// The number of rows fixes N; every row must have exactly N cells.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    value => return Err(MatrixError::InvalidCell { row, col, value }),
                }
            }
        }

        Ok(Self { size, cells })
    }

    /// Build a matrix of the given size with a 1 at every listed `(from, to)`.
    ///
    /// Pairs outside `[0, size)` are ignored.
    pub fn from_edges(size: usize, edges: &[(usize, usize)]) -> Self {
        let mut matrix = Self::empty(size);
        for &(from, to) in edges {
            matrix.set(from, to, true);
        }
        matrix
    }

    /// Number of nodes (N).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether cell `(row, col)` is set. Out-of-range cells read as unset.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }

    /// Set or clear cell `(row, col)`. Out-of-range cells are ignored.
    pub fn set(&mut self, row: usize, col: usize, connected: bool) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = connected;
        }
    }

    /// Iterate over rows as slices of booleans.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; take(0) keeps an empty matrix rowless
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Row-major iterator over the `(row, col)` of every 1-cell.
    pub fn ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(index, _)| (index / self.size, index % self.size))
    }

    /// Count of 1-cells, i.e. the number of direct edges.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|set| **set).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_valid() {
        let matrix = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(matrix.size(), 2);
        assert!(matrix.get(0, 1));
        assert!(matrix.get(1, 0));
        assert!(!matrix.get(0, 0));
        assert_eq!(matrix.edge_count(), 2);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_rows_invalid_cell() {
        let err = AdjacencyMatrix::from_rows(vec![vec![0, 2], vec![1, 0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            }
        );
        assert!(err.to_string().contains("expected 0 or 1"));
    }

    #[test]
    fn test_ones_row_major() {
        let matrix = AdjacencyMatrix::from_edges(3, &[(2, 0), (0, 2), (0, 1), (1, 1)]);
        let ones: Vec<_> = matrix.ones().collect();
        assert_eq!(ones, vec![(0, 1), (0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut matrix = AdjacencyMatrix::empty(2);
        matrix.set(5, 0, true);
        assert!(!matrix.get(5, 0));
        assert_eq!(matrix.edge_count(), 0);
    }

    #[test]
    fn test_rows() {
        let matrix = AdjacencyMatrix::from_edges(2, &[(0, 1)]);
        let rows: Vec<_> = matrix.rows().collect();
        assert_eq!(rows, vec![&[false, true][..], &[false, false][..]]);

        assert_eq!(AdjacencyMatrix::empty(0).rows().count(), 0);
    }
}
