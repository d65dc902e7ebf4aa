//! Generalized state-space search over graphs, and minimax over game trees.
//!
//! To search a graph, implement [Graphable] for it (or use [Graph] or
//! [UnweightedGraph]), then call one of [bfs], [dfs], [ucs], [ucs_multi]
//! or [astar]. All of them share one frontier engine and differ only in
//! the order the frontier is worked through.

pub mod algorithm;
mod errors;
pub mod graph;
pub mod minimax;
mod route;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use graph::{Graph, GraphPath, Graphable, UnweightedGraph};
pub use route::{Breakdown, Cost, Exploration, Route, Step};

pub use algorithm::astar::{astar, detailed_path, HeuristicTable};
pub use algorithm::basic::{bfs, dfs};
pub use algorithm::uniform::{ucs, ucs_multi};
pub use algorithm::{Estimate, Uninformed};
pub use minimax::{best_move, evaluate, evaluate_root, GameNode};
