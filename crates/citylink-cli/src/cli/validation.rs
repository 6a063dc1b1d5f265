use serde::{Deserialize, Serialize};
use std::fmt;

/// A `SOURCE,TARGET` pair of city indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteQuery {
    pub source: usize,
    pub target: usize,
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.source, self.target)
    }
}

impl TryFrom<String> for RouteQuery {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_route(&value)
    }
}

impl From<RouteQuery> for String {
    fn from(route: RouteQuery) -> Self {
        route.to_string()
    }
}

/// Parse and validate a route specification.
///
/// Accepts two non-negative city indices separated by a comma, with optional
/// surrounding whitespace.
///
/// # Examples
///
/// Valid: `0,1`, `12,3`, ` 4 , 5 `
/// Invalid: `0`, `0,1,2`, `a,b`, `-1,2`, `""`
///
/// # Errors
///
/// Returns an error message if the route is malformed.
pub fn parse_route(s: &str) -> Result<RouteQuery, String> {
    if s.trim().is_empty() {
        return Err("Route cannot be empty".to_string());
    }

    let mut parts = s.split(',');
    let (Some(source), Some(target), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!(
            "Route must be two cities separated by a comma, e.g. 0,1 (got '{}')",
            s
        ));
    };

    let parse_city = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a city index (expected 0, 1, 2, ...)", part.trim()))
    };

    Ok(RouteQuery {
        source: parse_city(source)?,
        target: parse_city(target)?,
    })
}
