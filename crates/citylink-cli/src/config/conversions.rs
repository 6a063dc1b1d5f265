use crate::cli::{Cli, OutputFormat, RouteQuery, SelfPairsMode, Strategy};
use crate::config::CityLinkConfig;
use citylink_graph::{ClosureOptions, PathStrategy, SelfPairs};
use serde::Serialize;
use std::path::PathBuf;

// Conversion implementations: CLI enums -> engine enums

impl From<Strategy> for PathStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Greedy => PathStrategy::Greedy,
            Strategy::Shortest => PathStrategy::Shortest,
        }
    }
}

impl From<SelfPairsMode> for SelfPairs {
    fn from(m: SelfPairsMode) -> Self {
        match m {
            SelfPairsMode::Derive => SelfPairs::Derive,
            SelfPairsMode::Exclude => SelfPairs::Exclude,
        }
    }
}

impl CityLinkConfig {
    /// Closure engine options for this run.
    pub fn closure_options(&self) -> ClosureOptions {
        ClosureOptions::new().with_self_pairs(self.self_pairs.into())
    }

    /// Path strategy for this run.
    pub fn path_strategy(&self) -> PathStrategy {
        self.strategy.into()
    }
}

/// The subset of config fields given on the command line.
///
/// Unset flags serialize to nothing so lower layers keep their values.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<RouteQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    print_closure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    write_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    self_pairs: Option<SelfPairsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,
}

impl From<&Cli> for CliOverrides {
    fn from(args: &Cli) -> Self {
        Self {
            input: args.input.clone(),
            route: args.route,
            print_closure: args.print.then_some(true),
            write_output: args.output.then_some(true),
            output_dir: args.out_dir.clone(),
            strategy: args.strategy,
            self_pairs: args.self_pairs,
            format: args.format,
        }
    }
}
