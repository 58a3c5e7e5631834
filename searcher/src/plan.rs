//! Plan data structures
//!
//! A plan is the sequence of actions which leads from the
//! starting state of a problem to a goal.

use std::iter::FromIterator;
use std::ops::Deref;

/// An ordered sequence of actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plan<A> {
    actions: Vec<A>,
}

impl<A> Plan<A> {
    /// Construct an empty plan.
    pub fn new() -> Self {
        Plan {
            actions: Vec::new(),
        }
    }

    /// How many actions this plan takes.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over the actions in this plan.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.actions.iter()
    }

    /// The final action, if there is one.
    pub fn last_action(&self) -> Option<&A> {
        self.actions.last()
    }

    pub fn into_inner(self) -> Vec<A> {
        self.actions
    }
}

impl<A> Plan<A>
where
    A: Clone,
{
    /// Return a new plan with one more action on the end.
    pub fn step(&self, action: A) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Plan { actions }
    }
}

impl<A> Default for Plan<A> {
    fn default() -> Self {
        Plan::new()
    }
}

impl<A> From<Vec<A>> for Plan<A> {
    fn from(actions: Vec<A>) -> Self {
        Plan { actions }
    }
}

impl<A> FromIterator<A> for Plan<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Plan {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Plan<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.actions
    }
}
