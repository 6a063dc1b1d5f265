//! Neighbor table reader.
//!
//! The file holds the number of cities N followed by N rows of N cells, each
//! `0` or `1`. Any whitespace separates tokens, so the row layout is a
//! convention rather than a requirement.

use crate::error::{InputError, Result, ResultExt};
use citylink_graph::AdjacencyMatrix;
use std::path::Path;

/// Read and parse a neighbor table file.
pub fn read_matrix(path: &Path) -> Result<AdjacencyMatrix> {
    let text = std::fs::read_to_string(path).with_path(path)?;
    let matrix = parse_matrix(&text)?;
    tracing::debug!(
        path = %path.display(),
        cities = matrix.size(),
        connections = matrix.edge_count(),
        "Read neighbor table"
    );
    Ok(matrix)
}

/// Parse neighbor table text.
///
/// ```
/// use citylink_cli::input::parse_matrix;
///
/// let matrix = parse_matrix("2\n0 1\n1 0\n").unwrap();
/// assert!(matrix.get(0, 1));
/// assert!(!matrix.get(0, 0));
/// ```
pub fn parse_matrix(text: &str) -> Result<AdjacencyMatrix> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| line.split_whitespace().map(move |token| (idx + 1, token)));

    let (line, token) = tokens.next().ok_or(InputError::Empty)?;
    let size = match token.parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => {
            return Err(InputError::InvalidSize {
                line,
                token: token.to_string(),
            }
            .into());
        }
    };
    let expected = size.checked_mul(size).ok_or_else(|| InputError::InvalidSize {
        line,
        token: token.to_string(),
    })?;

    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut found = 0;
    for (line, token) in tokens.by_ref().take(expected) {
        let cell = match token {
            "0" => 0,
            "1" => 1,
            _ => {
                return Err(InputError::InvalidCell {
                    line,
                    token: token.to_string(),
                }
                .into());
            }
        };
        if found % size == 0 {
            rows.push(Vec::with_capacity(size));
        }
        if let Some(row) = rows.last_mut() {
            row.push(cell);
        }
        found += 1;
    }

    if found < expected {
        return Err(InputError::TooFewCells { expected, found }.into());
    }

    if let Some((line, token)) = tokens.next() {
        return Err(InputError::TrailingData {
            line,
            token: token.to_string(),
        }
        .into());
    }

    Ok(AdjacencyMatrix::from_rows(rows)?)
}
