use std::fmt::Debug;
use std::hash::Hash;

/// Outgoing edges of a node, as `(neighbor, cost)` pairs.
pub type Neighbors<'g, N> = Box<dyn Iterator<Item = (&'g N, usize)> + 'g>;

/// Read-only access to a graph, which is all the search
/// engines need.
pub trait Graphable {
    type Node: Debug + Clone + Hash + Eq;

    /// Edges leaving `node`, in the order they are listed.
    ///
    /// A node the graph does not know about has no neighbors.
    fn neighbors<'g>(&'g self, node: &Self::Node) -> Neighbors<'g, Self::Node>;

    /// Cost of the first listed edge from `origin` to `destination`.
    fn edge_cost(&self, origin: &Self::Node, destination: &Self::Node) -> Option<usize> {
        self.neighbors(origin)
            .find(|(n, _)| *n == destination)
            .map(|(_, weight)| weight)
    }
}
