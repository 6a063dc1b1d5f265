//! CityLink CLI - reachability between cities from a neighbor table.
//!
//! This crate wraps the `citylink-graph` engine in a command-line tool: it
//! reads a neighbor table file, computes the transitive closure R*, answers a
//! route query, and optionally saves the closure next to the input.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration: defaults, `citylink.json`, `CITYLINK_*`, flags
//! - [`input`] - Neighbor table reader
//! - [`output`] - `out-<input>` writer
//! - [`commands`] - The run pipeline
//! - [`ui`] - Table rendering and status messages
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use citylink_cli::{cli::Cli, commands, config::CityLinkConfig, error::Result, logger};
//! use clap::Parser;
//!
//! fn main() -> Result<()> {
//!     let args = Cli::parse();
//!     logger::init_logger(args.verbose, args.quiet, args.no_color);
//!
//!     let config = CityLinkConfig::load(&args)?;
//!     config.validate()?;
//!     commands::run_execute(&config)
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod output;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, InputError, Result, ResultExt};
