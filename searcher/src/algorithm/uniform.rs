//! Uniform-cost search
//!
//! Uniform-cost search behaves like a breadth first search, but always
//! expands the cheapest path found so far, even when paths end up with
//! varying lengths. A state may be queued several times with different
//! costs; only its first (cheapest) dequeue expands it, which makes
//! the reported cost optimal for non-negative edge costs.

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::default::Default;

use super::score::Score;
use super::{Candidate, Lineage, SearchAlgorithm, SearchQueue, Uninformed};
use crate::errors::Result;
use crate::graph::Graphable;
use crate::route::Route;

/// A priority queue to always search the next cheapest candidate.
///
/// Candidates with equal priority are popped in the order they
/// were pushed.
#[derive(Debug)]
pub struct PriorityQueue<N> {
    queue: BinaryHeap<Score<Candidate<N>>>,
    pushed: usize,
}

impl<N> Default for PriorityQueue<N> {
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<N> SearchQueue for PriorityQueue<N> {
    type Candidate = Candidate<N>;

    const LINEAGE: Lineage = Lineage::Carried;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(Score::unwrap)
    }

    fn push(&mut self, item: Self::Candidate) {
        let priority = item.priority;
        self.queue.push(Score::new(priority, self.pushed, item));
        self.pushed += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Search algorithm which expands candidates in order of accumulated cost.
pub type UniformCostSearch<'g, G> =
    SearchAlgorithm<'g, G, PriorityQueue<<G as Graphable>::Node>, Uninformed>;

/// Find the cheapest route from `start` to `goal`.
///
/// When `goal` can't be reached, the route is empty and
/// its cost is infinite.
pub fn ucs<G>(graph: &G, start: G::Node, goal: &G::Node) -> Result<Route<G::Node>>
where
    G: Graphable,
{
    let estimate = Uninformed;
    let mut search: UniformCostSearch<'_, G> = SearchAlgorithm::new(graph, &estimate, start)?;

    Ok(search
        .next_goal(|node| node == goal)?
        .map(Route::from)
        .unwrap_or_else(Route::unreachable))
}

/// Find the cheapest route from `start` to each of `goals` in one search.
///
/// The search stops as soon as every goal has been reached. Goals
/// which can't be reached are left out of the result.
pub fn ucs_multi<G, I>(graph: &G, start: G::Node, goals: I) -> Result<HashMap<G::Node, Route<G::Node>>>
where
    G: Graphable,
    I: IntoIterator<Item = G::Node>,
{
    let mut outstanding: HashSet<G::Node> = goals.into_iter().collect();
    let mut solutions = HashMap::new();

    let estimate = Uninformed;
    let mut search: UniformCostSearch<'_, G> = SearchAlgorithm::new(graph, &estimate, start)?;

    while !outstanding.is_empty() {
        match search.next_goal(|node| outstanding.contains(node))? {
            Some(found) => {
                outstanding.remove(&found.goal);
                solutions.insert(found.goal.clone(), Route::from(found));
            }
            None => break,
        }
    }

    Ok(solutions)
}
