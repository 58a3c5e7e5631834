//! Small explicit graphs for exercising the search algorithms.

use std::cell::Cell;
use std::collections::HashSet;

use crate::traits::{Cost, Problem, Transition};

/// A directed graph with labelled nodes.
///
/// The action attached to each edge is the name of the node
/// it leads to, so a plan reads as the list of nodes visited.
#[derive(Debug)]
pub(crate) struct GraphProblem<C> {
    start: &'static str,
    goals: HashSet<&'static str>,
    edges: Vec<(&'static str, &'static str, C)>,
    expanded: Cell<usize>,
}

impl<C> GraphProblem<C>
where
    C: Cost,
{
    pub(crate) fn new(start: &'static str, goals: &[&'static str]) -> Self {
        Self {
            start,
            goals: goals.iter().cloned().collect(),
            edges: Vec::new(),
            expanded: Cell::new(0),
        }
    }

    /// Add a one-way edge.
    pub(crate) fn edge(mut self, from: &'static str, to: &'static str, cost: C) -> Self {
        self.edges.push((from, to, cost));
        self
    }

    /// Add an edge in both directions.
    pub(crate) fn road(self, a: &'static str, b: &'static str, cost: C) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    /// How many times successor_states has been called.
    pub(crate) fn expanded(&self) -> usize {
        self.expanded.get()
    }

    /// Walk a plan from the start, returning where it ends and what it cost.
    ///
    /// Returns None if the plan uses an edge which does not exist.
    pub(crate) fn follow(&self, plan: &[&'static str]) -> Option<(&'static str, C)> {
        let mut node = self.start;
        let mut total = C::zero();
        for step in plan {
            let (_, to, cost) = self
                .edges
                .iter()
                .find(|(from, to, _)| *from == node && to == step)?;
            node = *to;
            total = total + *cost;
        }
        Some((node, total))
    }
}

impl<C> Problem for GraphProblem<C>
where
    C: Cost,
{
    type State = &'static str;
    type Action = &'static str;
    type Cost = C;

    fn starting_state(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn successor_states(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Action, C>> {
        self.expanded.set(self.expanded.get() + 1);
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(_, to, cost)| Transition::new(to, to, cost))
            .collect()
    }
}

/// An open rectangular grid with unit steps in four directions.
///
/// Moves are generated in the order N, W, E, S.
#[derive(Debug)]
pub(crate) struct GridProblem {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) start: (i32, i32),
    pub(crate) goal: (i32, i32),
}

impl GridProblem {
    pub(crate) fn manhattan(&self, state: &(i32, i32)) -> u32 {
        ((state.0 - self.goal.0).abs() + (state.1 - self.goal.1).abs()) as u32
    }
}

impl Problem for GridProblem {
    type State = (i32, i32);
    type Action = char;
    type Cost = u32;

    fn starting_state(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn successor_states(&self, state: &Self::State) -> Vec<Transition<Self::State, char, u32>> {
        let (x, y) = *state;
        vec![((x, y - 1), 'N'), ((x - 1, y), 'W'), ((x + 1, y), 'E'), ((x, y + 1), 'S')]
            .into_iter()
            .filter(|((x, y), _)| *x >= 0 && *y >= 0 && *x < self.width && *y < self.height)
            .map(|(point, action)| Transition::new(point, action, 1))
            .collect()
    }
}
