use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

use super::traits::{Graphable, Neighbors};

/// A directed graph whose edges carry no cost.
///
/// Each edge counts as a single step (cost 1) when searched.
#[derive(Debug, Clone)]
pub struct UnweightedGraph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    nodes: HashMap<N, Vec<N>>,
}

impl<N> Default for UnweightedGraph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> UnweightedGraph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, origin: N, destination: N) {
        self.nodes
            .entry(destination.clone())
            .or_insert_with(Vec::new);
        self.nodes
            .entry(origin)
            .or_insert_with(Vec::new)
            .push(destination);
    }

    pub fn insert_undirected(&mut self, left: N, right: N) {
        self.insert(left.clone(), right.clone());
        self.insert(right, left);
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }
}

impl<N> Graphable for UnweightedGraph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    type Node = N;

    fn neighbors<'g>(&'g self, node: &N) -> Neighbors<'g, N> {
        Box::new(self.nodes.get(node).into_iter().flatten().map(|n| (n, 1)))
    }
}

impl<N> FromIterator<(N, N)> for UnweightedGraph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut graph = UnweightedGraph::new();
        for (origin, destination) in iter {
            graph.insert(origin, destination);
        }
        graph
    }
}
