//! Command implementations for the CityLink CLI.
//!
//! CityLink has a single command, [`run`]: read a neighbor table, close it,
//! and report whatever the configuration asks for. It provides an `execute`
//! function that takes the merged configuration and returns a Result.

pub mod run;

pub use run::execute as run_execute;
