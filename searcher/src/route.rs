//! Results reported by the search engines.

use std::fmt;

use crate::algorithm::Found;

/// Total cost of a route.
///
/// `Infinite` sorts after every finite cost and marks a goal
/// that could not be reached, which keeps "no path" apart from
/// a path which costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    Finite(usize),
    Infinite,
}

impl Cost {
    pub fn finite(self) -> Option<usize> {
        match self {
            Cost::Finite(c) => Some(c),
            Cost::Infinite => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        self == Cost::Infinite
    }
}

impl From<usize> for Cost {
    fn from(cost: usize) -> Self {
        Cost::Finite(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(c) => write!(f, "{}", c),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

/// A path from the start to a goal, and what it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<N> {
    pub path: Vec<N>,
    pub cost: Cost,
}

impl<N> Route<N> {
    /// The route to a goal which can't be reached.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: Cost::Infinite,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the route.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<N> From<Found<N>> for Route<N> {
    fn from(found: Found<N>) -> Self {
        Self {
            path: found.path,
            cost: Cost::Finite(found.cost),
        }
    }
}

/// Result of an uninformed search.
///
/// `extent` is the greatest depth of any candidate taken off the
/// frontier during the search. It is not the length of `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration<N> {
    pub path: Vec<N>,
    pub extent: usize,
}

impl<N> Exploration<N> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// One edge of a route, with its cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<N> {
    pub from: N,
    pub to: N,
    pub cost: usize,
}

/// Edge by edge costs of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown<N> {
    pub steps: Vec<Step<N>>,
    pub total: usize,
}

impl<N> fmt::Display for Breakdown<N>
where
    N: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{} -> {} (Cost: {})", step.from, step.to, step.cost)?;
        }
        write!(f, "Total Cost: {}", self.total)
    }
}
