//! Provides the building blocks for search algorithms
//!
//! Every path search in this crate runs the same loop: pop a
//! candidate from a frontier, seal its state as visited, and push
//! its unvisited neighbors. The searches differ only in the order
//! the frontier hands candidates back ([SearchQueue]) and in the
//! estimate added to each candidate's cost ([Estimate]).

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};

use tracing::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::graph::{GraphPath, Graphable};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod score;
pub(crate) mod uniform;

/// How a search reports the path to a goal once it is dequeued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lineage {
    /// Follow the parent recorded when each state was first reached.
    Parents,

    /// Use the path carried by the candidate which reached the goal.
    Carried,
}

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    /// How paths are reconstructed for candidates from this queue.
    const LINEAGE: Lineage;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Estimate of the remaining cost from a state to the goal.
pub trait Estimate<N> {
    fn estimate(&self, node: &N) -> Result<usize>;
}

/// No estimate at all: every state is zero away from the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uninformed;

impl<N> Estimate<N> for Uninformed {
    fn estimate(&self, _node: &N) -> Result<usize> {
        Ok(0)
    }
}

/// A frontier entry: the path so far, and the priority it was queued with.
#[derive(Debug, Clone)]
pub struct Candidate<N> {
    path: GraphPath<N>,
    priority: usize,
}

impl<N> Candidate<N>
where
    N: Debug + Clone,
{
    fn new(path: GraphPath<N>, priority: usize) -> Self {
        Self { path, priority }
    }

    pub fn node(&self) -> &N {
        self.path.destination()
    }

    /// Number of edges between the search origin and this candidate.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Accumulated edge cost from the search origin.
    pub fn cost(&self) -> usize {
        self.path.weight()
    }

    /// Key used by priority frontiers (cost plus estimate).
    pub fn priority(&self) -> usize {
        self.priority
    }
}

/// A goal reached by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<N> {
    pub goal: N,
    pub path: Vec<N>,
    pub cost: usize,
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic estimate (E) to provide
/// a single foundation for BFS, DFS, uniform-cost search and A*.
///
/// States are sealed when they are dequeued, not when they are queued,
/// so a state may sit in the frontier several times but is expanded at
/// most once.
pub struct SearchAlgorithm<'g, G, Q, E>
where
    G: Graphable,
    Q: SearchQueue<Candidate = Candidate<G::Node>>,
    E: Estimate<G::Node>,
{
    graph: &'g G,
    estimate: &'g E,
    queue: Q,
    visited: HashSet<G::Node>,
    parents: HashMap<G::Node, Option<G::Node>>,
    pending: Option<Candidate<G::Node>>,
    extent: usize,
    steps: usize,
}

impl<'g, G, Q, E> fmt::Debug for SearchAlgorithm<'g, G, Q, E>
where
    G: Graphable,
    Q: SearchQueue<Candidate = Candidate<G::Node>>,
    E: Estimate<G::Node>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchAlgorithm")
            .field("queued", &self.queue.len())
            .field("visited", &self.visited.len())
            .field("extent", &self.extent)
            .field("steps", &self.steps)
            .finish()
    }
}

impl<'g, G, Q, E> SearchAlgorithm<'g, G, Q, E>
where
    G: Graphable,
    Q: SearchQueue<Candidate = Candidate<G::Node>> + Default,
    E: Estimate<G::Node>,
{
    pub(crate) fn new(graph: &'g G, estimate: &'g E, origin: G::Node) -> Result<Self> {
        let priority = estimate.estimate(&origin)?;

        let mut parents = HashMap::new();
        parents.insert(origin.clone(), None);

        let mut queue = Q::default();
        queue.push(Candidate::new(GraphPath::new(origin), priority));

        Ok(Self {
            graph,
            estimate,
            queue,
            visited: HashSet::new(),
            parents,
            pending: None,
            extent: 0,
            steps: 0,
        })
    }

    /// Deepest candidate dequeued so far, whether or not it was expanded.
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Run the search until it dequeues an unvisited state in `goals`.
    ///
    /// The goal is sealed but only expanded when the search is resumed,
    /// so calling this again continues toward the next closest goal.
    /// Returns `None` once the frontier is exhausted.
    pub fn next_goal<F>(&mut self, is_goal: F) -> Result<Option<Found<G::Node>>>
    where
        F: Fn(&G::Node) -> bool,
    {
        if let Some(candidate) = self.pending.take() {
            self.expand(&candidate)?;
        }

        while let Some(candidate) = self.queue.pop() {
            self.steps += 1;
            self.extent = self.extent.max(candidate.depth());

            if self.steps % 10_000 == 0 {
                debug!(
                    queued = self.queue.len(),
                    visited = self.visited.len(),
                    extent = self.extent,
                    steps = self.steps,
                    "search progress"
                );
            }

            if !self.visited.insert(candidate.node().clone()) {
                continue;
            }

            if is_goal(candidate.node()) {
                let found = self.resolve(&candidate);
                debug!(goal = ?candidate.node(), cost = found.cost, steps = self.steps, "goal reached");
                self.pending = Some(candidate);
                return Ok(Some(found));
            }

            self.expand(&candidate)?;
        }

        debug!(steps = self.steps, extent = self.extent, "frontier exhausted");
        Ok(None)
    }

    fn expand(&mut self, candidate: &Candidate<G::Node>) -> Result<()> {
        let node = candidate.node();
        trace!(
            node = ?node,
            depth = candidate.depth(),
            g = candidate.cost(),
            f = candidate.priority(),
            "expand"
        );

        for (neighbor, weight) in self.graph.neighbors(node) {
            if self.visited.contains(neighbor) {
                continue;
            }

            self.parents
                .entry(neighbor.clone())
                .or_insert_with(|| Some(node.clone()));

            let overflow = || SearchError::CostOverflow(format!("{:?}", neighbor));
            let path = candidate
                .path
                .step(neighbor.clone(), weight)
                .ok_or_else(overflow)?;
            let priority = path
                .weight()
                .checked_add(self.estimate.estimate(neighbor)?)
                .ok_or_else(overflow)?;
            self.queue.push(Candidate::new(path, priority));
        }
        Ok(())
    }

    fn resolve(&self, candidate: &Candidate<G::Node>) -> Found<G::Node> {
        let path = match Q::LINEAGE {
            Lineage::Carried => candidate.path.nodes().to_vec(),
            Lineage::Parents => self.ancestry(candidate.node()),
        };

        Found {
            goal: candidate.node().clone(),
            path,
            cost: candidate.cost(),
        }
    }

    /// Walk parent links back to the origin.
    fn ancestry(&self, node: &G::Node) -> Vec<G::Node> {
        let mut path = vec![node.clone()];
        let mut current = node;
        while let Some(Some(parent)) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        path
    }
}
