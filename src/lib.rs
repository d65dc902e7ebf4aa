#![deny(clippy::all)]

use clap::{value_t, App, Arg};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

pub mod input;
mod strategies;

use searcher::minimax::LOOKAHEAD;

type Error = anyhow::Error;
type Actor = Box<dyn (Fn(&Request) -> Result<String, Error>) + Send + Sync + 'static>;

macro_rules! strategy {
    ($name:ident) => {
        (stringify!($name), Box::new(strategies::$name) as Actor)
    };
}

lazy_static! {
    static ref SOLVERS: HashMap<&'static str, Actor> = {
        let strategies: Vec<(&'static str, Actor)> = vec![
            strategy!(bfs),
            strategy!(dfs),
            strategy!(ucs),
            strategy!(astar),
            strategy!(minimax),
        ];

        strategies.into_iter().collect()
    };
}

/// Everything a strategy needs to run one search.
#[derive(Debug, Clone)]
pub struct Request {
    /// Contents of the graph (or, for minimax, tree) file.
    pub source: String,
    pub from: Option<String>,
    pub to: Vec<String>,
    /// Contents of the heuristic file, for A*.
    pub heuristics: Option<String>,
    /// Minimax look-ahead below the root's children.
    pub depth: usize,
}

/// Names of the registered strategies, sorted.
pub fn strategies() -> Vec<&'static str> {
    let mut names: Vec<_> = SOLVERS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Run the named strategy, returning its rendered result.
pub fn run(strategy: &str, request: &Request) -> Result<String, Error> {
    match SOLVERS.get(strategy) {
        None => Err(DriverError::UnknownStrategy(strategy.to_owned()).into()),
        Some(actor) => actor(request),
    }
}

pub fn solver() -> Result<(), Error> {
    let names = strategies();
    let matches = App::new("State Space Search")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Search a graph of named states for a path to a goal")
        .arg(
            Arg::with_name("strategy")
                .value_name("STRATEGY")
                .required(true)
                .takes_value(true)
                .possible_values(&names),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Graph (or tree, for minimax) file, - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("from")
                .short("f")
                .long("from")
                .value_name("STATE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .short("t")
                .long("to")
                .value_name("STATE")
                .help("Goal state; repeat for multi-goal uniform cost search")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("heuristics")
                .long("heuristics")
                .value_name("FILE")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("depth")
                .short("d")
                .long("depth")
                .value_name("PLIES")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more detail (repeat for more)"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let strategy = matches
        .value_of("strategy")
        .ok_or(DriverError::MissingArgument("STRATEGY"))?;

    let depth = if matches.is_present("depth") {
        value_t!(matches, "depth", usize)?
    } else {
        LOOKAHEAD
    };

    let request = Request {
        source: read_input(matches.value_of("input"))?,
        from: matches.value_of("from").map(str::to_owned),
        to: matches
            .values_of("to")
            .map(|v| v.map(str::to_owned).collect())
            .unwrap_or_default(),
        heuristics: matches
            .value_of("heuristics")
            .map(|path| read_input(Some(path)))
            .transpose()?,
        depth,
    };
    debug!(strategy, from = ?request.from, to = ?request.to, "running");

    println!("{}", run(strategy, &request)?);
    Ok(())
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // An embedding program may have installed its own subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File = File::open(path)?;
            Box::new(f)
        }
    };
    Ok(reader)
}

fn read_input(filename: Option<&str>) -> Result<String, Error> {
    let mut contents = String::new();
    get_input_reader(filename)?.read_to_string(&mut contents)?;
    Ok(contents)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("No strategy named {0}")]
    UnknownStrategy(String),

    #[error("Missing required argument {0}")]
    MissingArgument(&'static str),

    #[error("Expected a single goal, got {0}")]
    TooManyGoals(usize),
}
