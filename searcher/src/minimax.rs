//! Minimax over a small game tree.
//!
//! Values are backed up with an explicit work list rather than
//! recursion, so very deep trees don't grow the call stack.

use std::fmt::{self, Debug};

use tracing::debug;

use crate::errors::{Result, SearchError};

/// Plies examined below each of the root's children by [best_move].
pub const LOOKAHEAD: usize = 3;

/// A node in a game tree, which owns its children.
///
/// Only leaves (and nodes where the depth limit runs out) have
/// their utility read.
///
/// Nothing here walks the tree recursively: `Debug` shows a single
/// node with its child count, and the tree is not `Clone`.
pub struct GameNode<N> {
    name: N,
    utility: i64,
    children: Vec<GameNode<N>>,
}

impl<N> GameNode<N> {
    pub fn new(name: N, utility: i64) -> Self {
        Self {
            name,
            utility,
            children: Vec::new(),
        }
    }

    /// A node whose own utility is never read while it has children.
    pub fn branch(name: N, children: Vec<GameNode<N>>) -> Self {
        Self {
            name,
            utility: 0,
            children,
        }
    }

    pub fn with_child(mut self, child: GameNode<N>) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: GameNode<N>) {
        self.children.push(child);
    }

    pub fn name(&self) -> &N {
        &self.name
    }

    pub fn utility(&self) -> i64 {
        self.utility
    }

    pub fn children(&self) -> &[GameNode<N>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<GameNode<N>> {
        &mut self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<N: Debug> Debug for GameNode<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameNode")
            .field("name", &self.name)
            .field("utility", &self.utility)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<N> Drop for GameNode<N> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

enum Visit<'t, N> {
    Enter {
        node: &'t GameNode<N>,
        depth: usize,
        maximizing: bool,
    },
    Combine {
        count: usize,
        maximizing: bool,
    },
}

/// Back up the minimax value of `node`, looking at most `depth` plies ahead.
///
/// Levels alternate between maximizing and minimizing, starting
/// with `maximizing` at `node`. A childless node is a leaf no matter
/// how much depth remains.
pub fn evaluate<N>(node: &GameNode<N>, depth: usize, maximizing: bool) -> i64 {
    let mut work = vec![Visit::Enter {
        node,
        depth,
        maximizing,
    }];
    let mut values: Vec<i64> = Vec::new();

    while let Some(visit) = work.pop() {
        match visit {
            Visit::Enter {
                node,
                depth,
                maximizing,
            } => {
                if depth == 0 || node.is_leaf() {
                    values.push(node.utility);
                    continue;
                }

                work.push(Visit::Combine {
                    count: node.children.len(),
                    maximizing,
                });
                for child in node.children.iter().rev() {
                    work.push(Visit::Enter {
                        node: child,
                        depth: depth - 1,
                        maximizing: !maximizing,
                    });
                }
            }
            Visit::Combine { count, maximizing } => {
                let split = values.len() - count;
                let value = if maximizing {
                    values.drain(split..).fold(i64::MIN, i64::max)
                } else {
                    values.drain(split..).fold(i64::MAX, i64::min)
                };
                values.push(value);
            }
        }
    }

    values.pop().unwrap_or(node.utility)
}

/// Pick the root's child with the greatest value, looking `depth` plies
/// below it with the opponent (minimizing) to move.
///
/// The first child wins ties. Returns the child and its value.
pub fn evaluate_root<N>(root: &GameNode<N>, depth: usize) -> Result<(&GameNode<N>, i64)>
where
    N: Debug,
{
    let mut best: Option<(&GameNode<N>, i64)> = None;

    for child in root.children() {
        let value = evaluate(child, depth, false);
        debug!(child = ?child.name(), value, "minimax");

        if best.map_or(true, |(_, b)| value > b) {
            best = Some((child, value));
        }
    }

    best.ok_or(SearchError::EmptyTree)
}

/// Name of the best move from `root`, looking [LOOKAHEAD] plies ahead.
pub fn best_move<N>(root: &GameNode<N>) -> Result<&N>
where
    N: Debug,
{
    evaluate_root(root, LOOKAHEAD).map(|(child, _)| child.name())
}
