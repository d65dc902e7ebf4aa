//! Runs each search strategy on parsed input and renders the result.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::Error;
use tracing::info;

use searcher::{Exploration, SearchResult};

use crate::input::{parse_heuristics, parse_tree, GraphFile};
use crate::{DriverError, Request};

type Result<T> = std::result::Result<T, Error>;

fn render(path: &[String]) -> String {
    path.join(" -> ")
}

fn origin(request: &Request) -> Result<String> {
    request
        .from
        .clone()
        .ok_or(DriverError::MissingArgument("--from"))
        .map_err(Error::from)
}

fn goal(request: &Request) -> Result<String> {
    match request.to.as_slice() {
        [goal] => Ok(goal.clone()),
        [] => Err(DriverError::MissingArgument("--to").into()),
        _ => Err(DriverError::TooManyGoals(request.to.len()).into()),
    }
}

fn uninformed<F>(request: &Request, search: F, metric: &str) -> Result<String>
where
    F: Fn(&GraphFile, String, &String) -> SearchResult<Exploration<String>>,
{
    let graph: GraphFile = request.source.parse()?;
    let (start, goal) = (origin(request)?, goal(request)?);
    info!(start = %start, goal = %goal, "uninformed search");

    let exploration = search(&graph, start.clone(), &goal)?;

    let mut out = String::new();
    if exploration.is_reachable() {
        writeln!(out, "Path: {}", render(&exploration.path))?;
    } else {
        writeln!(out, "No path from {} to {}", start, goal)?;
    }
    write!(out, "{}: {}", metric, exploration.extent)?;
    Ok(out)
}

pub(crate) fn bfs(request: &Request) -> Result<String> {
    uninformed(request, searcher::bfs::<GraphFile>, "Max Breadth")
}

pub(crate) fn dfs(request: &Request) -> Result<String> {
    uninformed(request, searcher::dfs::<GraphFile>, "Max Depth")
}

pub(crate) fn ucs(request: &Request) -> Result<String> {
    let graph: GraphFile = request.source.parse()?;
    let start = origin(request)?;

    let mut out = String::new();
    match request.to.as_slice() {
        [] => return Err(DriverError::MissingArgument("--to").into()),
        [goal] => {
            let route = searcher::ucs(&graph, start.clone(), goal)?;
            if route.is_reachable() {
                writeln!(out, "Path to {}: {}", goal, render(&route.path))?;
            } else {
                writeln!(out, "No path from {} to {}", start, goal)?;
            }
            write!(out, "Cost: {}", route.cost)?;
        }
        goals => {
            let solutions = searcher::ucs_multi(&graph, start, goals.iter().cloned())?;

            let mut lines = Vec::new();
            let ordered: BTreeMap<_, _> = goals.iter().map(|g| (g, solutions.get(g))).collect();
            for (goal, route) in ordered {
                lines.push(match route {
                    Some(route) => format!(
                        "Path to {}: {} (Cost: {})",
                        goal,
                        render(&route.path),
                        route.cost
                    ),
                    None => format!("No path to {}", goal),
                });
            }
            write!(out, "{}", lines.join("\n"))?;
        }
    }
    Ok(out)
}

pub(crate) fn astar(request: &Request) -> Result<String> {
    let graph: GraphFile = request.source.parse()?;
    let heuristics = request
        .heuristics
        .as_ref()
        .ok_or(DriverError::MissingArgument("--heuristics"))?;
    let heuristics = parse_heuristics(heuristics)?;
    let (start, goal) = (origin(request)?, goal(request)?);

    let route = searcher::astar(&graph, &heuristics, start.clone(), &goal)?;

    let mut out = String::new();
    if !route.is_reachable() {
        writeln!(out, "No path from {} to {}", start, goal)?;
        write!(out, "Total Cost: {}", route.cost)?;
        return Ok(out);
    }

    writeln!(out, "Path to {}: {}", goal, render(&route.path))?;
    writeln!(out, "Total Cost: {}", route.cost)?;
    writeln!(out)?;
    writeln!(out, "Detailed Path:")?;
    write!(out, "{}", searcher::detailed_path(&graph, &route.path)?)?;
    Ok(out)
}

pub(crate) fn minimax(request: &Request) -> Result<String> {
    let root = parse_tree(&request.source)?;
    let (best, value) = searcher::evaluate_root(&root, request.depth)?;

    Ok(format!(
        "The best achievable destination is: {} (value {})",
        best.name(),
        value
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    fn request(source: &str, from: &str, to: &[&str]) -> Request {
        Request {
            source: source.to_owned(),
            from: Some(from.to_owned()),
            to: to.iter().map(|s| s.to_string()).collect(),
            heuristics: None,
            depth: searcher::minimax::LOOKAHEAD,
        }
    }

    const ROADS: &str = include_str!("../data/ethiopia.txt");
    const COSTS: &str = include_str!("../data/ethiopia_costs.txt");
    const HEURISTICS: &str = include_str!("../data/ethiopia_heuristics.txt");

    #[test]
    fn bfs_to_moyale() {
        let out = bfs(&request(ROADS, "Addis Ababa", &["Moyale"])).unwrap();
        assert_eq!(
            out,
            "Path: Addis Ababa -> Adama -> Batu -> Buta Jira -> Hossana -> Wolaita Sodo \
             -> Arba Minch -> Konso -> Yabelo -> Moyale\nMax Breadth: 9"
        );
    }

    #[test]
    fn dfs_extent_differs_from_bfs() {
        let out = dfs(&request(ROADS, "Mizan Teferi", &["Adwa"])).unwrap();
        assert!(out.ends_with("Max Depth: 14"));

        let out = bfs(&request(ROADS, "Mizan Teferi", &["Adwa"])).unwrap();
        assert!(out.ends_with("Max Breadth: 12"));
    }

    #[test]
    fn unreachable_goal() {
        let out = bfs(&request(ROADS, "Debark", &["Jimma"])).unwrap();
        assert_eq!(out, "No path from Debark to Jimma\nMax Breadth: 6");
    }

    #[test]
    fn ucs_to_lalibela() {
        let out = ucs(&request(COSTS, "Addis Ababa", &["Lalibela"])).unwrap();
        assert_eq!(
            out,
            "Path to Lalibela: Addis Ababa -> Debre Birhan -> Debre Sina -> Lalibela\nCost: 22"
        );
    }

    #[test]
    fn ucs_multiple_goals() {
        let goals = [
            "Axum",
            "Gondar",
            "Lalibela",
            "Babile",
            "Jimma",
            "Bale",
            "Sof Oumer",
            "Arba Minch",
        ];
        let out = ucs(&request(COSTS, "Addis Ababa", &goals)).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), goals.len());
        assert_eq!(
            lines[0],
            "Path to Arba Minch: Addis Ababa -> Adama -> Batu -> Buta Jira -> Hossana \
             -> Wolaita Sodo -> Arba Minch (Cost: 28)"
        );
        assert!(lines[1].starts_with("Path to Axum:"));
        assert!(lines[1].ends_with("(Cost: 50)"));
        assert_eq!(lines[2], "No path to Babile");
        assert_eq!(lines[3], "No path to Bale");
        assert!(lines[4].ends_with("Gondar (Cost: 32)"));
        assert_eq!(lines[5], "No path to Jimma");
        assert!(lines[6].ends_with("Lalibela (Cost: 22)"));
        assert_eq!(lines[7], "No path to Sof Oumer");
    }

    #[test]
    fn astar_to_moyale() {
        let mut req = request(COSTS, "Addis Ababa", &["Moyale"]);
        req.heuristics = Some(HEURISTICS.to_owned());

        let out = astar(&req).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "Total Cost: 43");
        assert_eq!(lines[3], "Detailed Path:");
        assert_eq!(lines[4], "Addis Ababa -> Adama (Cost: 3)");
        assert_eq!(lines.last(), Some(&"Total Cost: 43"));

        let uninformed = ucs(&request(COSTS, "Addis Ababa", &["Moyale"])).unwrap();
        assert!(uninformed.ends_with("Cost: 43"));
    }

    #[test]
    fn astar_needs_heuristics() {
        let err = astar(&request(COSTS, "Addis Ababa", &["Moyale"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DriverError>(),
            Some(&DriverError::MissingArgument("--heuristics"))
        );

        let mut req = request(COSTS, "Addis Ababa", &["Moyale"]);
        req.heuristics = Some("Addis Ababa = 10".to_owned());
        let err = astar(&req).unwrap_err();
        assert!(err.downcast_ref::<searcher::SearchError>().is_some());
    }

    #[test]
    fn minimax_destination() {
        let out = minimax(&request(
            include_str!("../data/destinations.txt"),
            "Addis Ababa",
            &[],
        ))
        .unwrap();
        assert_eq!(out, "The best achievable destination is: Gedo (value 8)");
    }

    #[test]
    fn missing_endpoints() {
        let mut req = request(ROADS, "Addis Ababa", &[]);
        assert!(bfs(&req).is_err());
        req.from = None;
        req.to = vec!["Moyale".to_owned()];
        assert!(dfs(&req).is_err());
    }
}
