//! Pathfinding in two dimensions, as a search problem over positions.

use searcher::{astar_search, Plan, Problem, Transition};

use super::map::Map;
use super::{Direction, Point};

/// Find the way from one point to another on a map.
///
/// Each step moves one square onto a traversable location
/// and costs one. Moves are tried in [Direction::all] order.
#[derive(Debug)]
pub struct PositionProblem<'m, M> {
    map: &'m M,
    start: Point,
    goal: Point,
}

impl<'m, M> PositionProblem<'m, M>
where
    M: Map,
{
    pub fn new(map: &'m M, start: Point, goal: Point) -> Self {
        Self { map, start, goal }
    }

    pub fn goal(&self) -> Point {
        self.goal
    }
}

impl<'m, M> Problem for PositionProblem<'m, M>
where
    M: Map,
{
    type State = Point;
    type Action = Direction;
    type Cost = usize;

    fn starting_state(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &Self::State) -> Vec<Transition<Point, Direction, usize>> {
        self.map
            .exits(*state)
            .into_iter()
            .map(|direction| Transition::new(state.step(direction), direction, 1))
            .collect()
    }
}

/// Manhattan distance to the goal.
///
/// Admissible for any map, since no step covers more than one square.
pub fn manhattan_heuristic<M>(state: &Point, problem: &PositionProblem<'_, M>) -> usize
where
    M: Map,
{
    state.manhattan_distance(problem.goal()) as usize
}

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub(crate) fn new(map: &'m M) -> Self {
        Self { map }
    }

    /// Find the moves along a shortest path between the origin and destination given.
    ///
    /// When no path exists and the search is exhausted, return None.
    pub fn find_path(&self, origin: Point, destination: Point) -> Option<Plan<Direction>> {
        if !self.map.is_traversable(origin) {
            return None;
        }

        let problem = PositionProblem::new(self.map, origin, destination);
        let plan = astar_search(&problem, manhattan_heuristic);
        if plan.is_empty() && origin != destination {
            return None;
        }
        Some(plan)
    }
}
