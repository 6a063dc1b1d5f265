//! Route reconstruction over a computed [`Closure`].
//!
//! A query first checks the closure for a `(start, target)` edge; only then is a
//! concrete node sequence rebuilt. Two strategies are available:
//!
//! - [`PathStrategy::Greedy`] walks hop by hop, always taking the first edge in
//!   closure order that leaves the current node towards an unvisited node. The
//!   result depends on the order edges were appended during closure
//!   construction and may use derived edges as single hops.
//! - [`PathStrategy::Shortest`] runs a breadth-first search over the direct
//!   edges only and returns a fewest-hops route through real connections.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::closure::Closure;
use crate::edge::Edge;
use crate::{ReachError, Result, Stage};

/// A route from `start` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<usize>,
}

impl Path {
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn start(&self) -> usize {
        self.nodes[0]
    }

    pub fn target(&self) -> usize {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes on the route, endpoints included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a route holds at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The consecutive `(p[i], p[i + 1])` pairs.
    pub fn hops(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
    }

    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" => ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// How a route is rebuilt once reachability is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStrategy {
    #[default]
    Greedy,
    Shortest,
}

/// Result of a reachability query.
///
/// `Unreachable` is an ordinary answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum PathOutcome {
    Found { path: Path },
    Unreachable { start: usize, target: usize },
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found { path } => Some(path),
            Self::Unreachable { .. } => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found { path } => Some(path),
            Self::Unreachable { .. } => None,
        }
    }
}

impl Closure {
    /// Find a route with the default greedy strategy.
    pub fn find_path(&self, start: usize, target: usize) -> Result<PathOutcome> {
        self.find_path_with(start, target, PathStrategy::default())
    }

    /// Find a route from `start` to `target`.
    ///
    /// Indices are not range-checked; a node the closure never mentions is
    /// simply unreachable.
    ///
    /// # Errors
    ///
    /// - [`ReachError::Allocation`] with [`Stage::Path`] if path storage cannot grow.
    /// - [`ReachError::PathStalled`] if the closure claims reachability but no
    ///   route can be rebuilt from its edges.
    pub fn find_path_with(
        &self,
        start: usize,
        target: usize,
        strategy: PathStrategy,
    ) -> Result<PathOutcome> {
        if !self.contains(start, target) {
            tracing::debug!(start, target, "no closure edge, unreachable");
            return Ok(PathOutcome::Unreachable { start, target });
        }

        let path = match strategy {
            PathStrategy::Greedy => greedy_walk(self, start, target)?,
            PathStrategy::Shortest => shortest_walk(self, start, target)?,
        };

        tracing::debug!(start, target, ?strategy, hops = path.len() - 1, "route found");
        Ok(PathOutcome::Found { path })
    }
}

fn push_node(nodes: &mut Vec<usize>, node: usize) -> Result<()> {
    nodes.try_reserve(1).map_err(|source| ReachError::Allocation {
        stage: Stage::Path,
        source,
    })?;
    nodes.push(node);
    Ok(())
}

/// First-match walk in closure order. The target stays eligible even when it
/// is already on the path, which only happens for `start == target`.
fn greedy_walk(closure: &Closure, start: usize, target: usize) -> Result<Path> {
    let mut nodes = Vec::new();
    push_node(&mut nodes, start)?;
    let mut current = start;

    loop {
        let next = closure
            .iter()
            .find(|edge| {
                edge.from == current && (edge.to == target || !nodes.contains(&edge.to))
            })
            .map(|edge| edge.to);

        let Some(next) = next else {
            tracing::debug!(start, target, partial = ?nodes, "greedy walk stalled");
            return Err(ReachError::PathStalled {
                start,
                target,
                partial: nodes,
            });
        };

        push_node(&mut nodes, next)?;
        if next == target {
            return Ok(Path { nodes });
        }
        current = next;
    }
}

/// Breadth-first search over the direct edges, neighbours visited in closure order.
fn shortest_walk(closure: &Closure, start: usize, target: usize) -> Result<Path> {
    let direct = closure.direct_edges();
    let mut parent: FxHashMap<usize, usize> = FxHashMap::default();
    let mut seen: FxHashSet<usize> = FxHashSet::default();
    let mut queue = VecDeque::new();

    seen.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in direct.iter().filter(|edge| edge.from == current) {
            if edge.to == target {
                return rebuild(&parent, start, current, target);
            }
            if seen.insert(edge.to) {
                parent.insert(edge.to, current);
                queue.push_back(edge.to);
            }
        }
    }

    Err(ReachError::PathStalled {
        start,
        target,
        partial: vec![start],
    })
}

fn rebuild(
    parent: &FxHashMap<usize, usize>,
    start: usize,
    last: usize,
    target: usize,
) -> Result<Path> {
    let mut nodes = Vec::new();
    push_node(&mut nodes, target)?;

    let mut node = last;
    while node != start {
        push_node(&mut nodes, node)?;
        node = parent[&node];
    }
    push_node(&mut nodes, start)?;

    nodes.reverse();
    Ok(Path { nodes })
}
