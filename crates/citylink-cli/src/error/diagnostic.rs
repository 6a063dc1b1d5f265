//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use citylink_graph::ReachError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Graph(e) => reach_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Input(e) => miette::miette!("Could not read neighbor table: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ReachError to miette Report
pub fn reach_error_to_miette(err: ReachError) -> Report {
    match err {
        ReachError::Allocation { stage, source } => miette::miette!(
            "Out of memory during {}: {}\n\nHint: The neighbor table is too large for this machine",
            stage,
            source
        ),
        ReachError::PathStalled {
            start,
            target,
            partial,
        } => miette::miette!(
            "Could not rebuild the route {} -> {} (stopped at {:?})\n\nHint: The closure reports this route as reachable, so this is an internal inconsistency",
            start,
            target,
            partial
        ),
        ReachError::PassLimit { limit } => {
            miette::miette!("Closure did not settle within {} passes", limit)
        }
    }
}
