use std::fs::File;
use std::io::{self, Read};
use std::str::FromStr;

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use itertools::Itertools;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use geometry::coord2d::pathfinder::manhattan_heuristic;
use geometry::coord2d::Point;
use multiagent::{
    AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent, ReflexAgent, ScoreEvaluator, Strategy,
};
use pacsearch::{Layout, World};
use searcher::{astar_search, breadth_first_search, depth_first_search, uniform_cost_search};

type Error = anyhow::Error;
type BoxedRead = Box<dyn Read + 'static>;

#[derive(Debug, Clone, Copy)]
enum Algorithm {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl FromStr for Algorithm {
    type Err = PacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Algorithm::DepthFirst),
            "bfs" => Ok(Algorithm::BreadthFirst),
            "ucs" => Ok(Algorithm::UniformCost),
            "astar" => Ok(Algorithm::AStar),
            other => Err(PacError::UnknownAlgorithm(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Agent {
    Minimax,
    AlphaBeta,
    Expectimax,
    Reflex,
}

impl FromStr for Agent {
    type Err = PacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Agent::Minimax),
            "alphabeta" => Ok(Agent::AlphaBeta),
            "expectimax" => Ok(Agent::Expectimax),
            "reflex" => Ok(Agent::Reflex),
            other => Err(PacError::UnknownAgent(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum PacError {
    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("No food in the layout, and no goal given")]
    NoGoal,

    #[error("No path from {0} to {1}")]
    NoPath(Point, Point),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}

fn main() {
    env_logger::init();

    if let Err(e) = driver() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn driver() -> Result<(), Error> {
    let layout_arg = Arg::with_name("layout")
        .value_name("LAYOUT")
        .help("Maze layout file, or - for stdin")
        .required(true)
        .takes_value(true);

    let matches = App::new("pacsearch")
        .version("0.1")
        .about("Search for paths and moves in maze games")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("path")
                .about("Find a path from the player to a goal")
                .arg(
                    Arg::with_name("algorithm")
                        .long("algorithm")
                        .short("a")
                        .possible_values(&["dfs", "bfs", "ucs", "astar"])
                        .default_value("astar")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("goal")
                        .long("goal")
                        .short("g")
                        .value_name("X,Y")
                        .help("Defaults to the food nearest the player")
                        .takes_value(true),
                )
                .arg(layout_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("decide")
                .about("Choose the player's next move")
                .arg(
                    Arg::with_name("agent")
                        .long("agent")
                        .possible_values(&["minimax", "alphabeta", "expectimax", "reflex"])
                        .default_value("alphabeta")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("depth")
                        .long("depth")
                        .short("d")
                        .default_value("2")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .help("Seed for breaking ties at random")
                        .takes_value(true),
                )
                .arg(layout_arg),
        )
        .get_matches();

    match matches.subcommand() {
        ("path", Some(m)) => path(m),
        ("decide", Some(m)) => decide(m),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn path(matches: &ArgMatches) -> Result<(), Error> {
    let layout = read_layout(matches.value_of("layout"))?;
    let algorithm = value_t!(matches, "algorithm", Algorithm)?;

    let goal = match matches.value_of("goal") {
        Some(goal) => goal.parse::<Point>()?,
        None => layout.nearest_food().ok_or(PacError::NoGoal)?,
    };
    debug!("Searching with {:?} toward {}", algorithm, goal);

    let problem = layout.position_problem(goal);
    let plan = match algorithm {
        Algorithm::DepthFirst => depth_first_search(&problem),
        Algorithm::BreadthFirst => breadth_first_search(&problem),
        Algorithm::UniformCost => uniform_cost_search(&problem),
        Algorithm::AStar => astar_search(&problem, manhattan_heuristic),
    };

    if plan.is_empty() && layout.player() != goal {
        return Err(PacError::NoPath(layout.player(), goal).into());
    }

    println!("{} steps: {}", plan.len(), plan.iter().join(" "));
    Ok(())
}

fn decide(matches: &ArgMatches) -> Result<(), Error> {
    let layout = read_layout(matches.value_of("layout"))?;
    let agent = value_t!(matches, "agent", Agent)?;
    let depth = value_t!(matches, "depth", usize)?;

    let rng = match matches.value_of("seed") {
        Some(_) => StdRng::seed_from_u64(value_t!(matches, "seed", u64)?),
        None => StdRng::from_entropy(),
    };

    let world = World::new(&layout);
    let mut strategy: Box<dyn Strategy<World>> = match agent {
        Agent::Minimax => Box::new(MinimaxAgent::new(depth, ScoreEvaluator)),
        Agent::AlphaBeta => Box::new(AlphaBetaAgent::new(depth, ScoreEvaluator)),
        Agent::Expectimax => Box::new(ExpectimaxAgent::new(depth, ScoreEvaluator)),
        Agent::Reflex => Box::new(ReflexAgent::new(rng)),
    };

    println!("{}", strategy.choose_action(&world));
    Ok(())
}

fn read_layout(filename: Option<&str>) -> Result<Layout, Error> {
    let mut reader = get_input_reader(filename)?;
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    Ok(buffer.parse()?)
}

fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => {
            let f = File::open(path).map_err(|e| PacError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}
