//! A* search
//!
//! Candidates are ordered by their accumulated cost plus an estimate
//! of the cost remaining. The route is optimal when the estimate is
//! admissible and consistent; that is not checked, and a bad estimate
//! quietly produces a valid but more expensive route.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::FromIterator;

use super::uniform::PriorityQueue;
use super::{Estimate, SearchAlgorithm};
use crate::errors::{Result, SearchError};
use crate::graph::Graphable;
use crate::route::{Breakdown, Route, Step};

/// Estimated remaining cost from each state to a goal.
///
/// Looking up a state the table doesn't know about is an error,
/// never a zero estimate.
#[derive(Debug, Clone)]
pub struct HeuristicTable<N>
where
    N: Debug + Hash + Eq,
{
    estimates: HashMap<N, usize>,
}

impl<N> Default for HeuristicTable<N>
where
    N: Debug + Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> HeuristicTable<N>
where
    N: Debug + Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            estimates: HashMap::new(),
        }
    }

    pub fn insert(&mut self, node: N, estimate: usize) -> Option<usize> {
        self.estimates.insert(node, estimate)
    }

    pub fn get(&self, node: &N) -> Option<usize> {
        self.estimates.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

impl<N> Estimate<N> for HeuristicTable<N>
where
    N: Debug + Hash + Eq,
{
    fn estimate(&self, node: &N) -> Result<usize> {
        self.get(node)
            .ok_or_else(|| SearchError::MissingHeuristic(format!("{:?}", node)))
    }
}

impl<N> FromIterator<(N, usize)> for HeuristicTable<N>
where
    N: Debug + Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (N, usize)>>(iter: I) -> Self {
        Self {
            estimates: iter.into_iter().collect(),
        }
    }
}

/// Search algorithm which expands candidates in order of cost plus estimate.
pub type AStarSearcher<'g, G, E> =
    SearchAlgorithm<'g, G, PriorityQueue<<G as Graphable>::Node>, E>;

/// Find a route from `start` to `goal`, guided by `heuristics`.
///
/// Fails if the search needs an estimate for a state which
/// `heuristics` can't provide, including `start` itself.
pub fn astar<G, E>(
    graph: &G,
    heuristics: &E,
    start: G::Node,
    goal: &G::Node,
) -> Result<Route<G::Node>>
where
    G: Graphable,
    E: Estimate<G::Node>,
{
    let mut search: AStarSearcher<'_, G, E> = SearchAlgorithm::new(graph, heuristics, start)?;

    Ok(search
        .next_goal(|node| node == goal)?
        .map(Route::from)
        .unwrap_or_else(Route::unreachable))
}

/// Recompute the cost of each edge along `path` from the graph.
///
/// Every consecutive pair must be joined by an edge; the first
/// listed edge between them supplies the cost.
pub fn detailed_path<G>(graph: &G, path: &[G::Node]) -> Result<Breakdown<G::Node>>
where
    G: Graphable,
{
    let steps = path
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            graph
                .edge_cost(from, to)
                .map(|cost| Step {
                    from: from.clone(),
                    to: to.clone(),
                    cost,
                })
                .ok_or_else(|| SearchError::MissingEdge {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut total: usize = 0;
    for step in &steps {
        total = total
            .checked_add(step.cost)
            .ok_or_else(|| SearchError::CostOverflow(format!("{:?}", step.to)))?;
    }
    Ok(Breakdown { steps, total })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::uniform::ucs;
    use crate::graph::Graph;
    use crate::route::Cost;

    fn triangle() -> Graph<&'static str> {
        vec![("A", "C", 5), ("A", "B", 1), ("B", "C", 1)]
            .into_iter()
            .collect()
    }

    fn grid() -> Graph<(i32, i32)> {
        // A 4x4 grid with a costly middle row.
        let mut graph = Graph::new();
        for x in 0..4 {
            for y in 0..4 {
                let cost = if y == 1 && x > 0 { 4 } else { 1 };
                if x < 3 {
                    graph.insert_undirected((x, y), (x + 1, y), cost);
                }
                if y < 3 {
                    graph.insert_undirected((x, y), (x, y + 1), cost);
                }
            }
        }
        graph
    }

    fn manhattan(goal: (i32, i32)) -> HeuristicTable<(i32, i32)> {
        (0..4)
            .flat_map(|x| (0..4).map(move |y| (x, y)))
            .map(|(x, y)| ((x, y), ((goal.0 - x).abs() + (goal.1 - y).abs()) as usize))
            .collect()
    }

    #[test]
    fn cheapest_route() {
        let heuristics: HeuristicTable<_> = vec![("A", 2), ("B", 1), ("C", 0)].into_iter().collect();
        let route = astar(&triangle(), &heuristics, "A", &"C").unwrap();

        assert_eq!(route.path, vec!["A", "B", "C"]);
        assert_eq!(route.cost, Cost::Finite(2));
    }

    #[test]
    fn agrees_with_ucs() {
        let graph = grid();
        let heuristics = manhattan((3, 3));

        let informed = astar(&graph, &heuristics, (0, 0), &(3, 3)).unwrap();
        let uninformed = ucs(&graph, (0, 0), &(3, 3)).unwrap();

        assert_eq!(informed.cost, uninformed.cost);
        assert_eq!(informed.path.first(), Some(&(0, 0)));
        assert_eq!(informed.path.last(), Some(&(3, 3)));
        assert_eq!(
            detailed_path(&graph, &informed.path).unwrap().total,
            informed.cost.finite().unwrap()
        );
    }

    #[test]
    fn missing_heuristic_is_fatal() {
        let heuristics: HeuristicTable<_> = vec![("A", 2), ("C", 0)].into_iter().collect();
        let result = astar(&triangle(), &heuristics, "A", &"C");
        assert_eq!(
            result,
            Err(SearchError::MissingHeuristic(format!("{:?}", "B")))
        );

        let empty = HeuristicTable::new();
        assert!(astar(&triangle(), &empty, "A", &"A").is_err());
    }

    #[test]
    fn overestimate_is_not_detected() {
        let heuristics: HeuristicTable<_> = vec![("A", 0), ("B", 10), ("C", 0)].into_iter().collect();
        let route = astar(&triangle(), &heuristics, "A", &"C").unwrap();

        assert_eq!(route.path, vec!["A", "C"]);
        assert_eq!(route.cost, Cost::Finite(5));
    }

    #[test]
    fn unreachable() {
        let mut graph = Graph::new();
        graph.insert("B", "A", 3);
        let heuristics: HeuristicTable<_> = vec![("A", 0), ("B", 0)].into_iter().collect();

        let route = astar(&graph, &heuristics, "A", &"B").unwrap();
        assert!(route.path.is_empty());
        assert_eq!(route.cost, Cost::Infinite);
    }

    #[test]
    fn breakdown() {
        let breakdown = detailed_path(&triangle(), &["A", "B", "C"]).unwrap();

        assert_eq!(breakdown.total, 2);
        assert_eq!(
            breakdown.steps,
            vec![
                Step {
                    from: "A",
                    to: "B",
                    cost: 1
                },
                Step {
                    from: "B",
                    to: "C",
                    cost: 1
                }
            ]
        );
        assert_eq!(
            breakdown.to_string(),
            "A -> B (Cost: 1)\nB -> C (Cost: 1)\nTotal Cost: 2"
        );
    }

    #[test]
    fn breakdown_of_trivial_paths() {
        assert_eq!(detailed_path(&triangle(), &["A"]).unwrap().total, 0);
        assert!(detailed_path(&triangle(), &[]).unwrap().steps.is_empty());
    }

    #[test]
    fn breakdown_needs_edges() {
        let result = detailed_path(&triangle(), &["A", "B", "A"]);
        assert_eq!(
            result,
            Err(SearchError::MissingEdge {
                from: format!("{:?}", "B"),
                to: format!("{:?}", "A"),
            })
        );
    }

    #[test]
    fn idempotent() {
        let graph: Graph<_> = vec![
            ("A", "B", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("C", "D", 1),
        ]
        .into_iter()
        .collect();
        let heuristics: HeuristicTable<_> = vec![("A", 2), ("B", 1), ("C", 1), ("D", 0)]
            .into_iter()
            .collect();

        let first = astar(&graph, &heuristics, "A", &"D").unwrap();
        assert_eq!(first.path, vec!["A", "B", "D"]);
        for _ in 0..5 {
            assert_eq!(astar(&graph, &heuristics, "A", &"D").unwrap(), first);
        }
    }

    #[test]
    fn estimate_overflow() {
        let mut graph = Graph::new();
        graph.insert("A", "B", usize::MAX);
        graph.insert("B", "C", 1);
        let heuristics: HeuristicTable<_> = vec![("A", 0), ("B", 1), ("C", 0)].into_iter().collect();

        assert_eq!(
            astar(&graph, &heuristics, "A", &"C"),
            Err(SearchError::CostOverflow(format!("{:?}", "B")))
        );
        assert_eq!(
            detailed_path(&graph, &["A", "B", "C"]),
            Err(SearchError::CostOverflow(format!("{:?}", "C")))
        );
    }
}
