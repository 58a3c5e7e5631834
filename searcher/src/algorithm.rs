//! Provides the building blocks for search algorithms

use std::default::Default;

use log::{debug, trace};
use num::Zero;

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::plan::Plan;
use crate::traits::{Heuristic, Problem};

pub mod astar;
pub mod basic;
pub mod cache;
pub mod dijkstra;

/// Trait used to implement frontiers of search candidates
/// which are waiting to be expanded.
///
/// The order in which a frontier hands back its candidates
/// is what distinguishes one search algorithm from another.
pub trait SearchQueue: Default {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A search node waiting on the frontier.
#[derive(Debug, Clone)]
pub struct Candidate<S, A, C> {
    pub state: S,

    /// Actions taken to reach `state` from the start.
    pub plan: Plan<A>,

    /// Accumulated path cost from the start.
    pub cost: C,

    /// Frontier key: the path cost, plus the heuristic estimate for A*.
    pub priority: C,
}

/// The candidate type produced when searching a given problem.
pub type ProblemCandidate<P> =
    Candidate<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>;

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (Q) and a generic cache (V) to provide
/// a single traversal loop for every graph search algorithm. The
/// heuristic (H) only matters to frontiers which order by priority.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, Q, V, H>
where
    P: Problem,
    Q: SearchQueue<Candidate = ProblemCandidate<P>>,
    V: Cache<P::State, P::Cost>,
    H: Heuristic<P>,
{
    problem: &'p P,
    heuristic: H,
    queue: Q,
    cache: V,
    expanded: usize,
}

impl<'p, P, Q, V, H> SearchAlgorithm<'p, P, Q, V, H>
where
    P: Problem,
    Q: SearchQueue<Candidate = ProblemCandidate<P>>,
    V: Cache<P::State, P::Cost>,
    H: Heuristic<P>,
{
    /// Seed a new search with the starting state of the problem.
    pub fn new(problem: &'p P, heuristic: H) -> Self {
        let mut sa = SearchAlgorithm {
            problem,
            heuristic,
            queue: Q::default(),
            cache: V::default(),
            expanded: 0,
        };

        let start = problem.starting_state();
        let priority = sa.heuristic.estimate(&start, problem);
        sa.cache.admit(&start, P::Cost::zero());
        sa.queue.push(Candidate {
            state: start,
            plan: Plan::new(),
            cost: P::Cost::zero(),
            priority,
        });
        sa
    }

    /// Number of states whose transitions have been generated so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn expand(&mut self, candidate: &ProblemCandidate<P>) {
        self.expanded += 1;

        for transition in self.problem.successor_states(&candidate.state) {
            let cost = candidate.cost + transition.cost;
            if !self.cache.admit(&transition.state, cost) {
                continue;
            }

            let priority = cost + self.heuristic.estimate(&transition.state, self.problem);
            self.queue.push(Candidate {
                state: transition.state,
                plan: candidate.plan.step(transition.action),
                cost,
                priority,
            });
        }
    }

    /// Run the search to completion.
    ///
    /// Returns the plan of the first goal popped from the frontier,
    /// or an error once the frontier is empty.
    pub fn run(mut self) -> Result<Plan<P::Action>> {
        while let Some(candidate) = self.queue.pop() {
            if !self.cache.expand(&candidate.state, candidate.cost) {
                trace!("Skipping stale candidate {:?}", candidate.state);
                continue;
            }

            if self.problem.is_goal(&candidate.state) {
                debug!(
                    "Found plan of {} actions (cost {:?}) after expanding {} states, {} left on frontier",
                    candidate.plan.len(),
                    candidate.cost,
                    self.expanded,
                    self.queue.len()
                );
                return Ok(candidate.plan);
            }

            self.expand(&candidate);
        }

        Err(SearchError::Exhausted {
            expanded: self.expanded,
        })
    }
}

/// Exhausting a search is not a failure to the callers of the
/// public search functions: it just means there is no plan.
pub(crate) fn plan_or_empty<A>(result: Result<Plan<A>>) -> Plan<A> {
    result.unwrap_or_else(|error| {
        debug!("{}", error);
        Plan::default()
    })
}
