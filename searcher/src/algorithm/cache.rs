//! Search cacheing support to eliminate already explored items.

use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::hash::Hash;

/// Defines the behavior required of a search cache.
///
/// A cache is consulted twice for every candidate: once before it
/// is pushed onto the frontier, and once when it is popped back off.
pub trait Cache<S, C>: Default {
    /// Should a newly generated state, reached at this cost,
    /// go onto the frontier?
    fn admit(&mut self, state: &S, cost: C) -> bool;

    /// Should a state popped from the frontier be expanded?
    fn expand(&mut self, state: &S, cost: C) -> bool;
}

/// Remembers every state that has ever been put on the frontier.
///
/// Costs are ignored, so a state is only ever frontiered once.
#[derive(Debug)]
pub struct VisitedSet<S> {
    visited: HashSet<S>,
}

impl<S> Default for VisitedSet<S> {
    fn default() -> Self {
        VisitedSet {
            visited: HashSet::new(),
        }
    }
}

impl<S, C> Cache<S, C> for VisitedSet<S>
where
    S: Eq + Hash + Clone,
{
    fn admit(&mut self, state: &S, _cost: C) -> bool {
        if self.visited.contains(state) {
            return false;
        }
        self.visited.insert(state.clone());
        true
    }

    fn expand(&mut self, _state: &S, _cost: C) -> bool {
        true
    }
}

/// Provides a simple hashmap cache which
/// will store the best known cost for every state encountered.
#[derive(Debug)]
pub struct CostMap<S, C> {
    costs: HashMap<S, C>,
}

impl<S, C> Default for CostMap<S, C> {
    fn default() -> Self {
        CostMap {
            costs: HashMap::new(),
        }
    }
}

impl<S, C> CostMap<S, C>
where
    S: Eq + Hash,
{
    /// Best known cost to reach a state.
    pub fn best(&self, state: &S) -> Option<&C> {
        self.costs.get(state)
    }
}

impl<S, C> Cache<S, C> for CostMap<S, C>
where
    S: Eq + Hash + Clone,
    C: Copy + PartialOrd,
{
    fn admit(&mut self, state: &S, cost: C) -> bool {
        // (a) States we have never seen go straight in.
        // (b) States we have seen at an equal or lower cost are ignored.
        // (c) States we have seen at a higher cost are relaxed.
        match self.costs.get_mut(state) {
            None => {
                self.costs.insert(state.clone(), cost);
                true
            }
            Some(best) if cost < *best => {
                *best = cost;
                true
            }
            Some(_) => false,
        }
    }

    fn expand(&mut self, state: &S, cost: C) -> bool {
        let best = self.costs.entry(state.clone()).or_insert(cost);
        if cost > *best {
            // A cheaper path to this state was found after
            // this candidate went on the frontier.
            return false;
        }
        *best = cost;
        true
    }
}
