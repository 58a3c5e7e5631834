//! Uninformed graph search: depth-first and breadth-first.
//!
//! Both share the traversal loop in [SearchAlgorithm] and a [VisitedSet],
//! so a state is marked as soon as it is first put on the frontier and
//! is never expanded twice. They differ only in their frontier.

use std::collections::VecDeque;
use std::default::Default;

use super::cache::VisitedSet;
use super::{plan_or_empty, ProblemCandidate, SearchAlgorithm, SearchQueue};
use crate::plan::Plan;
use crate::traits::{NullHeuristic, Problem};

/// Which end of the frontier new candidates are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    /// Last in, first out: depth-first search.
    Lifo,

    /// First in, first out: breadth-first search.
    Fifo,
}

/// Last in, first out frontier.
#[derive(Debug)]
pub struct Stack<T> {
    stack: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { stack: Vec::new() }
    }
}

impl<T> SearchQueue for Stack<T> {
    type Candidate = T;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.stack.pop()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.stack.push(item);
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First in, first out frontier.
#[derive(Debug)]
pub struct Fifo<T> {
    queue: VecDeque<T>,
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Fifo {
            queue: VecDeque::new(),
        }
    }
}

impl<T> SearchQueue for Fifo<T> {
    type Candidate = T;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type DepthFirstSearcher<'p, P> = SearchAlgorithm<
    'p,
    P,
    Stack<ProblemCandidate<P>>,
    VisitedSet<<P as Problem>::State>,
    NullHeuristic,
>;

pub type BreadthFirstSearcher<'p, P> = SearchAlgorithm<
    'p,
    P,
    Fifo<ProblemCandidate<P>>,
    VisitedSet<<P as Problem>::State>,
    NullHeuristic,
>;

/// Graph search ordered by the given kind of frontier.
///
/// Returns the plan to the first goal found, or an empty plan
/// when every reachable state has been expanded.
pub fn search<P>(problem: &P, kind: FrontierKind) -> Plan<P::Action>
where
    P: Problem,
{
    let result = match kind {
        FrontierKind::Lifo => DepthFirstSearcher::new(problem, NullHeuristic).run(),
        FrontierKind::Fifo => BreadthFirstSearcher::new(problem, NullHeuristic).run(),
    };
    plan_or_empty(result)
}

/// Search the deepest nodes in the search graph first.
///
/// Successors are pushed in the order the problem produces them, so
/// the last successor is explored first. Plans are not necessarily
/// the shortest available.
pub fn depth_first_search<P>(problem: &P) -> Plan<P::Action>
where
    P: Problem,
{
    search(problem, FrontierKind::Lifo)
}

/// Search the shallowest nodes in the search graph first.
///
/// Returns a plan with the fewest actions, ignoring step costs.
pub fn breadth_first_search<P>(problem: &P) -> Plan<P::Action>
where
    P: Problem,
{
    search(problem, FrontierKind::Fifo)
}
