//! Rendering of neighbor tables, closures, and route answers.

use citylink_graph::{AdjacencyMatrix, Closure, PathOutcome};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// `Neighbor table` header, one row per city, then a blank line.
///
/// ```
/// use citylink_cli::ui::neighbor_table;
/// use citylink_graph::AdjacencyMatrix;
///
/// let matrix = AdjacencyMatrix::from_edges(2, &[(0, 1)]);
/// assert_eq!(neighbor_table(&matrix), "Neighbor table\n0 1 \n0 0 \n\n");
/// ```
pub fn neighbor_table(matrix: &AdjacencyMatrix) -> String {
    let mut out = String::from("Neighbor table\n");
    for row in matrix.rows() {
        for &cell in row {
            out.push(if cell { '1' } else { '0' });
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// `R* Table` header followed by one `from -> to` line per closure pair.
pub fn closure_table(closure: &Closure) -> String {
    let mut out = String::from("R* Table\n");
    for edge in closure {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{edge}");
    }
    out
}

/// Answer to a route query in the classic wording.
pub fn route_report(outcome: &PathOutcome) -> String {
    match outcome {
        PathOutcome::Found { path } => format!("Yes path exists!\n{path}\n"),
        PathOutcome::Unreachable { .. } => "No Path Exists!\n".to_string(),
    }
}

/// Everything a run produced, as one JSON document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub cities: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closure: Option<ClosureSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<&'a PathOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a Path>,
}

/// Closure counts plus the ordered pair list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureSummary<'a> {
    pub direct_edges: usize,
    pub derived_edges: usize,
    pub passes: usize,
    pub edges: &'a [citylink_graph::Edge],
}

impl<'a> From<&'a Closure> for ClosureSummary<'a> {
    fn from(closure: &'a Closure) -> Self {
        Self {
            direct_edges: closure.direct_edges().len(),
            derived_edges: closure.derived_edges().len(),
            passes: closure.passes(),
            edges: closure.edges(),
        }
    }
}
