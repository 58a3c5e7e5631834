//! Dijkstra's Algorithm, also known as uniform cost search.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use super::cache::CostMap;
use super::{plan_or_empty, Candidate, SearchAlgorithm, SearchQueue};
use crate::plan::Plan;
use crate::traits::{NullHeuristic, Problem};

/// Wrapper for search candidates which sorts appropriately
/// for a min-heap keyed on priority.
///
/// Equal priorities pop in the order they were pushed.
#[derive(Debug)]
struct Prioritized<S, A, C> {
    sequence: usize,
    candidate: Candidate<S, A, C>,
}

impl<S, A, C> PartialEq for Prioritized<S, A, C>
where
    C: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, A, C> Eq for Prioritized<S, A, C> where C: PartialOrd {}

impl<S, A, C> Ord for Prioritized<S, A, C>
where
    C: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.candidate
            .priority
            .partial_cmp(&other.candidate.priority)
            .unwrap_or(Ordering::Equal)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<S, A, C> PartialOrd for Prioritized<S, A, C>
where
    C: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue to always expand the candidate with
/// the lowest key next.
#[derive(Debug)]
pub struct PriorityQueue<S, A, C> {
    queue: BinaryHeap<Prioritized<S, A, C>>,
    pushed: usize,
}

impl<S, A, C> Default for PriorityQueue<S, A, C>
where
    C: PartialOrd,
{
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<S, A, C> SearchQueue for PriorityQueue<S, A, C>
where
    C: PartialOrd,
{
    type Candidate = Candidate<S, A, C>;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|p| p.candidate)
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push(Prioritized {
            sequence: self.pushed,
            candidate: item,
        });
        self.pushed += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// The frontier used for any problem searched by cost.
pub type CostQueue<P> =
    PriorityQueue<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>;

/// Search algorithm which implements Dijkstra's Algorithm for
/// graph searches.
pub type DijkstraSearch<'p, P> = SearchAlgorithm<
    'p,
    P,
    CostQueue<P>,
    CostMap<<P as Problem>::State, <P as Problem>::Cost>,
    NullHeuristic,
>;

/// Search the node of least total cost first.
///
/// Dijkstra's algorithm behaves like a breadth first search, but always
/// expands the next cheapest path even when steps have varying costs.
/// The first goal popped is reached by a cheapest plan. Returns an empty
/// plan when no goal is reachable.
pub fn uniform_cost_search<P>(problem: &P) -> Plan<P::Action>
where
    P: Problem,
{
    plan_or_empty(DijkstraSearch::new(problem, NullHeuristic).run())
}
