use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Route reconstruction strategy
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// First matching hop in closure order
    ///
    /// Walks from the source, always taking the first closure edge that leads
    /// to a city not yet on the route. Output depends on closure order.
    #[default]
    #[value(name = "greedy")]
    Greedy,

    /// Fewest hops over direct connections
    ///
    /// Breadth-first search over the neighbor table itself.
    #[value(name = "shortest")]
    Shortest,
}

/// Treatment of (a, a) pairs derived from cycles
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfPairsMode {
    /// A cycle through `a` adds (a, a) to the closure
    #[default]
    #[value(name = "derive")]
    Derive,

    /// Never derive (a, a); direct self connections are still kept
    #[value(name = "exclude")]
    Exclude,
}

/// Console output format
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    #[value(name = "text")]
    Text,

    /// A single JSON document on stdout
    #[value(name = "json")]
    Json,
}
