//! Command-line interface definition for CityLink.
//!
//! This module defines the CLI using clap v4's derive macros. Short flags keep
//! the classic single-letter spelling so they can be bundled:
//!
//! - `citylink -i cities.txt -r 0,1 -p`
//! - `citylink -i cities.txt -opr 0,1`
//!
//! Every option is optional at the clap level; values may also come from a
//! `citylink.json` file or `CITYLINK_*` environment variables, and required
//! settings are enforced after merging (see [`crate::config`]).

pub mod enums;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use enums::*;
pub use validation::{RouteQuery, parse_route};

/// CityLink - reachability between cities from a neighbor table
#[derive(Parser, Debug, Default)]
#[command(
    name = "citylink",
    version,
    about = "Transitive closure and route queries over a city neighbor table",
    long_about = "CityLink reads a neighbor table (adjacency matrix) of directly connected cities,\n\
                  computes the transitive closure R* of the connection relation, and answers\n\
                  route queries by rebuilding one concrete path between two cities."
)]
pub struct Cli {
    /// Neighbor table file
    ///
    /// First token is the number of cities N, followed by N rows of N
    /// values (0 or 1) separated by whitespace.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Find a route between two cities
    ///
    /// Cities are numbered from 0. Example: -r 0,3
    #[arg(short = 'r', long, value_name = "SOURCE,TARGET", value_parser = parse_route)]
    pub route: Option<RouteQuery>,

    /// Print the transitive closure (R* table) to the console
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Write the transitive closure to out-<input file name>
    #[arg(short = 'o', long = "output")]
    pub output: bool,

    /// Directory for the output file (defaults to the input file's directory)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Route reconstruction strategy
    ///
    /// - greedy: first matching hop in closure order (classic behaviour)
    /// - shortest: fewest hops over direct connections
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Whether cycles derive (a, a) pairs in the closure
    #[arg(long, value_enum, value_name = "MODE")]
    pub self_pairs: Option<SelfPairsMode>,

    /// Console output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to a citylink.json config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
