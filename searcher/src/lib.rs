//! Generalized search algorithms, especially useful for graph traversal.
//!
//! To use these search algorithms, implement the [Problem] trait, which
//! describes a starting state, a goal test and the transitions out of
//! each state. Every search returns a [Plan] of actions leading from the
//! start to the first goal it discovers, or an empty plan when the
//! reachable states run out.

pub mod algorithm;
mod errors;
mod plan;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use plan::Plan;
pub use traits::{Cost, Heuristic, NullHeuristic, Problem, Transition};

pub use algorithm::astar::astar_search;
pub use algorithm::basic::{breadth_first_search, depth_first_search, search, FrontierKind};
pub use algorithm::dijkstra::uniform_cost_search;
pub use algorithm::SearchAlgorithm;

#[cfg(test)]
pub(crate) mod helpers;
