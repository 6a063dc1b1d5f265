//! CityLink CLI entry point.
//!
//! Parses arguments, initializes logging, merges configuration, and runs.

use citylink_cli::{cli, commands, config::CityLinkConfig, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = CityLinkConfig::load(&args).and_then(|config| {
        config.validate()?;
        commands::run_execute(&config)
    });

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
