//! Run command implementation.
//!
//! Reads the neighbor table, computes the closure, and reports.

use crate::cli::{OutputFormat, RouteQuery};
use crate::config::CityLinkConfig;
use crate::error::Result;
use crate::{input, output, ui};
use citylink_graph::{Closure, PathOutcome, PathStrategy, ReachError};
use std::io::Write;

/// Execute a run.
///
/// # Steps
///
/// 1. Read the neighbor table and check the route against its size
/// 2. Print the neighbor table (text format)
/// 3. Compute the closure and print it if requested
/// 4. Answer the route query
/// 5. Write `out-<input>` if requested
///
/// In JSON format nothing is printed until the end, when a single report
/// document goes to stdout.
///
/// # Errors
///
/// Returns errors for unreadable input, out-of-range routes, engine
/// failures, and write failures.
pub fn execute(config: &CityLinkConfig) -> Result<()> {
    let input_path = config.input_path()?;
    let matrix = input::read_matrix(input_path)?;
    config.validate_route(matrix.size())?;

    let text = config.format == OutputFormat::Text;
    let mut stdout = std::io::stdout().lock();

    if text {
        write!(stdout, "{}", ui::neighbor_table(&matrix))?;
    }

    let closure = Closure::from_matrix_with(&matrix, &config.closure_options())?;
    tracing::info!(
        cities = matrix.size(),
        direct = closure.direct_edges().len(),
        derived = closure.derived_edges().len(),
        passes = closure.passes(),
        "Closure computed"
    );

    if text && config.print_closure {
        writeln!(stdout)?;
        write!(stdout, "{}", ui::closure_table(&closure))?;
    }

    let route = config
        .route
        .map(|query| find_route(&closure, query, config.path_strategy()))
        .transpose()?;

    if text {
        if let Some(outcome) = &route {
            write!(stdout, "{}", ui::route_report(outcome))?;
        }
    }

    let written = if config.write_output {
        let path = output::output_path(input_path, config.output_dir.as_deref())?;
        output::write_closure(&closure, &path)?;
        Some(path)
    } else {
        None
    };

    if !text {
        let report = ui::JsonReport {
            cities: matrix.size(),
            closure: config.print_closure.then(|| (&closure).into()),
            route: route.as_ref(),
            output: written.as_deref(),
        };
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    }

    stdout.flush()?;
    Ok(())
}

/// Answer a route query, retrying a stalled greedy walk with BFS.
fn find_route(closure: &Closure, query: RouteQuery, strategy: PathStrategy) -> Result<PathOutcome> {
    match closure.find_path_with(query.source, query.target, strategy) {
        Err(ReachError::PathStalled { partial, .. }) if strategy == PathStrategy::Greedy => {
            tracing::debug!(?partial, "Greedy walk stalled");
            ui::warning(&format!(
                "Greedy walk from {} to {} hit a dead end; using the shortest route instead",
                query.source, query.target
            ));
            Ok(closure.find_path_with(query.source, query.target, PathStrategy::Shortest)?)
        }
        other => Ok(other?),
    }
}
