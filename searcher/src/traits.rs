use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num::Zero;

/// Numeric type used to accumulate step costs.
///
/// Anything copyable and partially ordered with a zero and addition
/// will do, so both integer and floating point costs can be used.
pub trait Cost: Debug + Copy + PartialOrd + Add<Output = Self> + Zero {}

impl<T> Cost for T where T: Debug + Copy + PartialOrd + Add<Output = T> + Zero {}

/// A single edge leaving a search state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, A, C> {
    pub state: S,
    pub action: A,
    pub cost: C,
}

impl<S, A, C> Transition<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A, C> From<(S, A, C)> for Transition<S, A, C> {
    fn from(edge: (S, A, C)) -> Self {
        Transition::new(edge.0, edge.1, edge.2)
    }
}

/// Provides an interface for describing a search problem.
///
/// The state graph is never built up front. Searches only see
/// the starting state and the transitions out of the states
/// they have already reached.
pub trait Problem {
    /// A position in the search space.
    type State: Debug + Clone + Eq + Hash;

    /// Label attached to each transition.
    type Action: Debug + Clone;

    /// Step cost. Must be finite and never negative.
    type Cost: Cost;

    /// Where every search begins.
    fn starting_state(&self) -> Self::State;

    /// Indicates that the search can stop at this state.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Produces the transitions out of a state, in the order
    /// the searches should consider them.
    fn successor_states(
        &self,
        state: &Self::State,
    ) -> Vec<Transition<Self::State, Self::Action, Self::Cost>>;
}

/// An estimate of the cost remaining from a state to the nearest goal.
///
/// For [astar_search](crate::astar_search) to return optimal plans, the
/// estimate must never exceed the true remaining cost. Nothing checks
/// this; an overestimating heuristic just produces worse plans.
pub trait Heuristic<P>
where
    P: Problem + ?Sized,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// The trivial heuristic, which estimates zero everywhere.
///
/// A* with this heuristic is uniform cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: Problem + ?Sized,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}
