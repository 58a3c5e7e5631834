//! Plain minimax. The player maximizes, every other agent minimizes.

use log::debug;

use super::{decide, searchable_actions, Ply, Strategy};
use crate::evaluation::Evaluator;
use crate::game::{GameState, PLAYER};

struct Minimax<'e, E> {
    depth_limit: usize,
    evaluator: &'e E,
    visited: usize,
}

impl<'e, E> Minimax<'e, E> {
    fn new(depth_limit: usize, evaluator: &'e E) -> Self {
        Self {
            depth_limit,
            evaluator,
            visited: 0,
        }
    }

    fn value<G>(&mut self, state: &G, ply: Ply) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.visited += 1;

        if ply.is_cutoff(state, self.depth_limit) {
            return self.evaluator.evaluate(state);
        }

        let actions = searchable_actions(state, ply.agent);
        if actions.is_empty() {
            if ply.agent == PLAYER {
                return self.evaluator.evaluate(state);
            }
            // A stuck opponent passes its turn.
            return self.value(state, ply.next(state.num_agents()));
        }

        let next = ply.next(state.num_agents());
        let values = actions
            .iter()
            .map(|action| {
                let successor = state.generate_successor(ply.agent, action);
                self.value(&successor, next)
            })
            .collect::<Vec<_>>();

        if ply.agent == PLAYER {
            values.into_iter().fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.into_iter().fold(f64::INFINITY, f64::min)
        }
    }
}

/// Choose the player's move by minimax search, `depth_limit` rounds deep.
pub fn choose_action<G, E>(state: &G, depth_limit: usize, evaluator: &E) -> G::Action
where
    G: GameState,
    E: Evaluator<G>,
{
    let mut search = Minimax::new(depth_limit, evaluator);
    let first = Ply::root().next(state.num_agents());
    let action = decide(state, |successor, _| search.value(successor, first));

    debug!(
        "Minimax chose {:?} after visiting {} states",
        action, search.visited
    );
    action
}

/// Plays by minimax search to a fixed depth.
#[derive(Debug, Clone)]
pub struct MinimaxAgent<E> {
    depth: usize,
    evaluator: E,
}

impl<E> MinimaxAgent<E> {
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self { depth, evaluator }
    }
}

impl<G, E> Strategy<G> for MinimaxAgent<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn choose_action(&mut self, state: &G) -> G::Action {
        choose_action(state, self.depth, &self.evaluator)
    }
}
