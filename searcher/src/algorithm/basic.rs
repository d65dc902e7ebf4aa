//! Uninformed searches: breadth-first and depth-first.
//!
//! Both report the path by following the parent each state was
//! first reached from, and the deepest candidate they dequeued.

pub use bfs::bfs;
pub use dfs::dfs;

use crate::algorithm::{Candidate, SearchAlgorithm, SearchQueue, Uninformed};
use crate::errors::Result;
use crate::graph::Graphable;
use crate::route::Exploration;

fn explore<G, Q>(graph: &G, start: G::Node, goal: &G::Node) -> Result<Exploration<G::Node>>
where
    G: Graphable,
    Q: SearchQueue<Candidate = Candidate<G::Node>> + Default,
{
    let estimate = Uninformed;
    let mut search: SearchAlgorithm<'_, G, Q, Uninformed> =
        SearchAlgorithm::new(graph, &estimate, start)?;

    let found = search.next_goal(|node| node == goal)?;
    Ok(Exploration {
        path: found.map(|f| f.path).unwrap_or_default(),
        extent: search.extent(),
    })
}

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use super::explore;
    use crate::algorithm::{Lineage, SearchQueue};
    use crate::errors::Result;
    use crate::graph::Graphable;
    use crate::route::Exploration;

    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;

        const LINEAGE: Lineage = Lineage::Parents;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    /// Breadth-first search, where ties are broken by the order
    /// edges are listed in the graph.
    ///
    /// The path found has the fewest edges of any path to `goal`.
    pub fn bfs<G>(graph: &G, start: G::Node, goal: &G::Node) -> Result<Exploration<G::Node>>
    where
        G: Graphable,
    {
        explore::<G, BreadthQueue<_>>(graph, start, goal)
    }
}

mod dfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use super::explore;
    use crate::algorithm::{Lineage, SearchQueue};
    use crate::errors::Result;
    use crate::graph::Graphable;
    use crate::route::Exploration;

    #[derive(Debug)]
    pub struct DepthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> Default for DepthQueue<S> {
        fn default() -> Self {
            DepthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    impl<S> SearchQueue for DepthQueue<S> {
        type Candidate = S;

        const LINEAGE: Lineage = Lineage::Parents;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_front(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    /// Depth-first search, where the last edge listed for a
    /// state is the first one followed.
    pub fn dfs<G>(graph: &G, start: G::Node, goal: &G::Node) -> Result<Exploration<G::Node>>
    where
        G: Graphable,
    {
        explore::<G, DepthQueue<_>>(graph, start, goal)
    }
}
