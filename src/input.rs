//! Text formats for graphs, heuristic tables and game trees.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use searcher::graph::Neighbors;
use searcher::{GameNode, Graph, Graphable, HeuristicTable, UnweightedGraph};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Can't parse line {0}: {1:?}")]
    Malformed(usize, String),

    #[error("Line {0} has no cost, but other edges do")]
    MissingCost(usize),

    #[error("Line {0} is not indented one level below its parent")]
    Indentation(usize),

    #[error("Line {0} starts a second tree root")]
    MultipleRoots(usize),

    #[error("No entries found in input")]
    Empty,
}

type Result<T> = ::std::result::Result<T, InputError>;

/// Lines with content, numbered from one, with comments removed.
fn entries(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim_end()))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// A graph read from a file, weighted when its edges carry costs.
///
/// Unweighted edges are searched as if each cost 1.
#[derive(Debug, Clone)]
pub enum GraphFile {
    Weighted(Graph<String>),
    Unweighted(UnweightedGraph<String>),
}

impl GraphFile {
    pub fn is_weighted(&self) -> bool {
        matches!(self, GraphFile::Weighted(_))
    }

    pub fn contains_node(&self, node: &str) -> bool {
        let node = node.to_owned();
        match self {
            GraphFile::Weighted(g) => g.contains_node(&node),
            GraphFile::Unweighted(g) => g.contains_node(&node),
        }
    }
}

impl Graphable for GraphFile {
    type Node = String;

    fn neighbors<'g>(&'g self, node: &String) -> Neighbors<'g, String> {
        match self {
            GraphFile::Weighted(g) => g.neighbors(node),
            GraphFile::Unweighted(g) => g.neighbors(node),
        }
    }
}

fn parse_edge(number: usize, line: &str) -> Result<(String, String, Option<usize>)> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^\s*(?P<from>[^:>]+?)\s*->\s*(?P<to>[^:>]+?)(?:\s*:\s*(?P<cost>\d+))?\s*$")
                .unwrap();
    }

    let cap = RE
        .captures(line)
        .ok_or_else(|| InputError::Malformed(number, line.to_owned()))?;

    let cost = match cap.name("cost") {
        Some(c) => Some(
            c.as_str()
                .parse()
                .map_err(|_| InputError::Malformed(number, line.to_owned()))?,
        ),
        None => None,
    };

    Ok((cap["from"].to_owned(), cap["to"].to_owned(), cost))
}

impl FromStr for GraphFile {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        let edges = entries(s)
            .map(|(number, line)| parse_edge(number, line).map(|e| (number, e)))
            .collect::<Result<Vec<_>>>()?;

        if edges.is_empty() {
            return Err(InputError::Empty);
        }

        if edges.iter().any(|(_, (_, _, cost))| cost.is_some()) {
            let mut graph = Graph::new();
            for (number, (from, to, cost)) in edges {
                graph.insert(from, to, cost.ok_or(InputError::MissingCost(number))?);
            }
            Ok(GraphFile::Weighted(graph))
        } else {
            Ok(GraphFile::Unweighted(
                edges
                    .into_iter()
                    .map(|(_, (from, to, _))| (from, to))
                    .collect(),
            ))
        }
    }
}

/// Parse `STATE = ESTIMATE` lines into a heuristic table.
pub fn parse_heuristics(s: &str) -> Result<HeuristicTable<String>> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\s*(?P<name>.+?)\s*=\s*(?P<value>\d+)\s*$").unwrap();
    }

    let mut table = HeuristicTable::new();
    for (number, line) in entries(s) {
        let cap = RE
            .captures(line)
            .ok_or_else(|| InputError::Malformed(number, line.to_owned()))?;
        let value = cap["value"]
            .parse()
            .map_err(|_| InputError::Malformed(number, line.to_owned()))?;
        table.insert(cap["name"].to_owned(), value);
    }

    if table.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(table)
}

// Attach every node at `level` or deeper to its parent.
fn collapse(stack: &mut Vec<(usize, GameNode<String>)>, level: usize) {
    while stack.len() > 1 && stack[stack.len() - 1].0 >= level {
        if let Some((_, child)) = stack.pop() {
            if let Some((_, parent)) = stack.last_mut() {
                parent.push(child);
            }
        }
    }
}

/// Parse an indented game tree.
///
/// Each level of nesting is two spaces. Leaves may give their
/// utility as `NAME: UTILITY`; nodes without one have utility 0.
pub fn parse_tree(s: &str) -> Result<GameNode<String>> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(?P<indent> *)(?P<name>[^ :].*?)(?:\s*:\s*(?P<utility>-?\d+))?\s*$")
                .unwrap();
    }

    let mut stack: Vec<(usize, GameNode<String>)> = Vec::new();

    for (number, line) in entries(s) {
        let cap = RE
            .captures(line)
            .ok_or_else(|| InputError::Malformed(number, line.to_owned()))?;

        let indent = cap["indent"].len();
        if indent % 2 != 0 {
            return Err(InputError::Indentation(number));
        }
        let level = indent / 2;

        let utility = match cap.name("utility") {
            Some(u) => u
                .as_str()
                .parse()
                .map_err(|_| InputError::Malformed(number, line.to_owned()))?,
            None => 0,
        };

        collapse(&mut stack, level);
        match stack.last() {
            None if level == 0 => {}
            Some((0, _)) if level == 0 => return Err(InputError::MultipleRoots(number)),
            Some((parent, _)) if *parent + 1 == level => {}
            _ => return Err(InputError::Indentation(number)),
        }

        stack.push((level, GameNode::new(cap["name"].to_owned(), utility)));
    }

    collapse(&mut stack, 1);
    stack.pop().map(|(_, root)| root).ok_or(InputError::Empty)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unweighted_graph() {
        let graph: GraphFile = "
        # comment
        Addis Ababa -> Debre Birhan
        Addis Ababa -> Ambo  # trailing

        Ambo -> Addis Ababa"
            .parse()
            .unwrap();

        assert!(!graph.is_weighted());
        let neighbors: Vec<_> = graph.neighbors(&"Addis Ababa".to_owned()).collect();
        assert_eq!(
            neighbors,
            vec![(&"Debre Birhan".to_owned(), 1), (&"Ambo".to_owned(), 1)]
        );
        assert!(graph.contains_node("Debre Birhan"));
    }

    #[test]
    fn weighted_graph() {
        let graph: GraphFile = "Addis Ababa -> Debre Birhan: 4\nDebre Birhan -> Debre Sina:8"
            .parse()
            .unwrap();

        assert!(graph.is_weighted());
        assert_eq!(
            graph.edge_cost(&"Debre Birhan".to_owned(), &"Debre Sina".to_owned()),
            Some(8)
        );
    }

    #[test]
    fn mixed_weights() {
        let result = "A -> B: 4\nB -> C".parse::<GraphFile>();
        assert_eq!(result.err(), Some(InputError::MissingCost(2)));
    }

    #[test]
    fn malformed_edges() {
        assert_eq!(
            "A -> B\nA to C".parse::<GraphFile>().err(),
            Some(InputError::Malformed(2, "A to C".to_owned()))
        );
        assert_eq!("# nothing\n".parse::<GraphFile>().err(), Some(InputError::Empty));
    }

    #[test]
    fn names_exclude_separators() {
        assert_eq!(
            "A -> B: x".parse::<GraphFile>().err(),
            Some(InputError::Malformed(1, "A -> B: x".to_owned()))
        );
        assert_eq!(
            "A -> B: 1\nA -> B -> C: 2".parse::<GraphFile>().err(),
            Some(InputError::Malformed(2, "A -> B -> C: 2".to_owned()))
        );
        assert_eq!(
            "A:1 -> B".parse::<GraphFile>().err(),
            Some(InputError::Malformed(1, "A:1 -> B".to_owned()))
        );

        let graph: GraphFile = "Arba Minch->Sof-Oumer".parse().unwrap();
        assert!(graph.contains_node("Sof-Oumer"));
    }

    #[test]
    fn example_graphs() {
        let graph: GraphFile = include_str!("../data/ethiopia.txt").parse().unwrap();
        assert!(!graph.is_weighted());
        assert!(graph.contains_node("Gambela"));

        let graph: GraphFile = include_str!("../data/ethiopia_costs.txt").parse().unwrap();
        assert!(graph.is_weighted());
        assert!(graph.contains_node("Asella"));
    }

    #[test]
    fn heuristics() {
        let table = parse_heuristics("Addis Ababa = 10\n  Lalibela=0").unwrap();
        assert_eq!(table.get(&"Addis Ababa".to_owned()), Some(10));
        assert_eq!(table.get(&"Lalibela".to_owned()), Some(0));

        let table = parse_heuristics(include_str!("../data/ethiopia_heuristics.txt")).unwrap();
        assert_eq!(table.len(), 39);
        assert!(parse_heuristics("Lalibela: 0").is_err());
    }

    #[test]
    fn tree() {
        let root = parse_tree(include_str!("../data/destinations.txt")).unwrap();

        assert_eq!(root.name(), "Addis Ababa");
        let names: Vec<_> = root.children().iter().map(|c| c.name().as_str()).collect();
        assert_eq!(names, vec!["Gedo", "Ambo", "Adama"]);
        assert_eq!(root.children()[2].children()[0].utility(), 10);
        assert_eq!(root.children()[1].children()[1].name(), "Durame");
    }

    #[test]
    fn tree_negative_utilities() {
        let root = parse_tree("root\n  a: -3\n  b\n    c: 2").unwrap();
        assert_eq!(root.children()[0].utility(), -3);
        assert_eq!(root.children()[1].utility(), 0);
        assert_eq!(root.children()[1].children()[0].utility(), 2);
    }

    #[test]
    fn tree_errors() {
        assert_eq!(parse_tree("root\n    a").err(), Some(InputError::Indentation(2)));
        assert_eq!(parse_tree("root\n a").err(), Some(InputError::Indentation(2)));
        assert_eq!(parse_tree("root\nother").err(), Some(InputError::MultipleRoots(2)));
        assert_eq!(parse_tree("").err(), Some(InputError::Empty));
    }
}
