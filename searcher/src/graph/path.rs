use std::fmt::Debug;

/// A path through a graph, carried along by a search candidate.
///
/// A path always holds at least its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath<N> {
    nodes: Vec<N>,
    weight: usize,
}

impl<N> GraphPath<N>
where
    N: Debug + Clone,
{
    pub fn new(origin: N) -> Self {
        Self {
            nodes: vec![origin],
            weight: 0,
        }
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total cost of the edges taken so far.
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Extend a copy of this path by one edge.
    ///
    /// Returns `None` if the total weight would overflow.
    pub fn step(&self, node: N, weight: usize) -> Option<Self> {
        let weight = self.weight.checked_add(weight)?;
        let mut nextpath = self.clone();
        nextpath.nodes.push(node);
        nextpath.weight = weight;
        Some(nextpath)
    }

    pub fn origin(&self) -> &N {
        &self.nodes[0]
    }

    pub fn destination(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}
