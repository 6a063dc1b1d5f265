//! Run configuration with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::{OutputFormat, RouteQuery, SelfPairsMode, Strategy};

pub use defaults::*;
pub use loading::DEFAULT_CONFIG_FILE;

/// CityLink configuration - loaded from citylink.json, env, or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CityLinkConfig {
    /// Neighbor table file (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Route query as "SOURCE,TARGET"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteQuery>,

    /// Print the R* table to the console
    #[serde(default)]
    pub print_closure: bool,

    /// Write the R* table to out-<input file name>
    #[serde(default)]
    pub write_output: bool,

    /// Directory for the output file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Route reconstruction strategy
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,

    /// Treatment of (a, a) pairs derived from cycles
    #[serde(default = "default_self_pairs")]
    pub self_pairs: SelfPairsMode,

    /// Console output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}
