//! Graph model and datastructures.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

mod edge;
mod path;
mod traits;
mod unweighted;

pub use edge::Edge;
pub use path::GraphPath;
pub use traits::{Graphable, Neighbors};
pub use unweighted::UnweightedGraph;

type Nodes<N> = HashMap<N, Vec<Edge<N>>>;

/// A directed graph with non-negative edge costs.
///
/// Outgoing edges keep the order in which they were inserted,
/// and that order is the order in which searches expand them.
/// The graph is neither required to be symmetric nor acyclic.
#[derive(Debug, Clone)]
pub struct Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    nodes: Nodes<N>,
}

impl<N> Default for Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Add a directed edge from `origin` to `destination`.
    ///
    /// Both endpoints become nodes of the graph. Parallel edges
    /// are kept, in insertion order.
    pub fn insert(&mut self, origin: N, destination: N, weight: usize) {
        self.nodes
            .entry(destination.clone())
            .or_insert_with(Vec::new);
        self.nodes
            .entry(origin)
            .or_insert_with(Vec::new)
            .push(Edge::new(destination, weight));
    }

    /// Add an edge in both directions with the same cost.
    pub fn insert_undirected(&mut self, left: N, right: N, weight: usize) {
        self.insert(left.clone(), right.clone(), weight);
        self.insert(right, left, weight);
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// Iterate through the edges leaving this node.
    ///
    /// Nodes which are not part of the graph have no edges.
    pub fn edges(&self, node: &N) -> impl Iterator<Item = &Edge<N>> {
        self.nodes.get(node).into_iter().flatten()
    }
}

impl<N> Graphable for Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    type Node = N;

    fn neighbors<'g>(&'g self, node: &N) -> Neighbors<'g, N> {
        Box::new(self.edges(node).map(|e| (e.destination(), e.weight())))
    }
}

impl<N> FromIterator<(N, N, usize)> for Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (N, N, usize)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (origin, destination, weight) in iter {
            graph.insert(origin, destination, weight);
        }
        graph
    }
}
