//! A* search: uniform cost search guided by a heuristic.

use super::cache::CostMap;
use super::dijkstra::CostQueue;
use super::{plan_or_empty, SearchAlgorithm};
use crate::plan::Plan;
use crate::traits::{Heuristic, Problem};

pub type AStarSearcher<'p, P, H> = SearchAlgorithm<
    'p,
    P,
    CostQueue<P>,
    CostMap<<P as Problem>::State, <P as Problem>::Cost>,
    H,
>;

/// Search the node that has the lowest combined cost and heuristic first.
///
/// Candidates are keyed by the cost so far plus the heuristic estimate
/// of the cost remaining. With an admissible heuristic the plan returned
/// costs the same as the one from
/// [uniform_cost_search](crate::uniform_cost_search), though it may use
/// different actions. Returns an empty plan when no goal is reachable.
pub fn astar_search<P, H>(problem: &P, heuristic: H) -> Plan<P::Action>
where
    P: Problem,
    H: Heuristic<P>,
{
    plan_or_empty(AStarSearcher::new(problem, heuristic).run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dijkstra::uniform_cost_search;
    use crate::helpers::{GraphProblem, GridProblem};
    use crate::traits::NullHeuristic;

    fn grid_manhattan(state: &(i32, i32), problem: &GridProblem) -> u32 {
        problem.manhattan(state)
    }

    #[test]
    fn matches_uniform_cost() {
        let problem = GraphProblem::<u32>::new("S", &["G"])
            .edge("S", "A", 1)
            .edge("S", "B", 4)
            .edge("A", "B", 2)
            .edge("A", "C", 5)
            .edge("B", "C", 1)
            .edge("C", "G", 3);

        // Admissible: never more than the true remaining cost.
        let estimate = |state: &&'static str, _: &GraphProblem<u32>| -> u32 {
            match *state {
                "S" => 6,
                "A" => 4,
                "B" => 3,
                "C" => 2,
                _ => 0,
            }
        };

        let astar = astar_search(&problem, estimate);
        let ucs = uniform_cost_search(&problem);

        assert_eq!(problem.follow(&astar), Some(("G", 7)));
        assert_eq!(problem.follow(&ucs), Some(("G", 7)));
    }

    #[test]
    fn null_heuristic_is_uniform_cost() {
        let problem = GraphProblem::new("S", &["G"])
            .road("S", "A", 3)
            .road("S", "B", 1)
            .road("B", "A", 1)
            .road("A", "G", 2);

        assert_eq!(
            astar_search(&problem, NullHeuristic),
            uniform_cost_search(&problem)
        );
    }

    #[test]
    fn straight_line() {
        let problem = GridProblem {
            width: 5,
            height: 5,
            start: (0, 2),
            goal: (4, 2),
        };

        let plan = astar_search(&problem, grid_manhattan);
        assert_eq!(plan.len(), 4);
        assert_eq!(plan.into_inner(), vec!['E', 'E', 'E', 'E']);

        let searcher = AStarSearcher::new(&problem, grid_manhattan);
        assert_eq!(searcher.run().map(|p| p.len()), Ok(4));
    }

    #[test]
    fn start_is_goal() {
        let problem = GraphProblem::new("S", &["S"]).edge("S", "A", 1u32);

        assert!(astar_search(&problem, NullHeuristic).is_empty());
        assert_eq!(problem.expanded(), 0);
    }

    #[test]
    fn unreachable() {
        let problem = GraphProblem::new("S", &["G"]).road("S", "A", 1u32);

        assert!(astar_search(&problem, NullHeuristic).is_empty());
    }
}
