//! Minimax with alpha-beta pruning.
//!
//! Alpha is the best value the player is already assured of on the
//! current path, beta the best the opponents are assured of. A branch
//! which strictly exceeds the bound held by the other side can never
//! be chosen, so the rest of its siblings are skipped. Equal values are
//! still searched, so the chosen move always matches plain minimax.

use log::debug;

use super::{decide, searchable_actions, Ply, Strategy};
use crate::evaluation::Evaluator;
use crate::game::{GameState, PLAYER};

struct AlphaBeta<'e, E> {
    depth_limit: usize,
    evaluator: &'e E,
    visited: usize,
    pruned: usize,
}

impl<'e, E> AlphaBeta<'e, E> {
    fn new(depth_limit: usize, evaluator: &'e E) -> Self {
        Self {
            depth_limit,
            evaluator,
            visited: 0,
            pruned: 0,
        }
    }

    fn value<G>(&mut self, state: &G, ply: Ply, alpha: f64, beta: f64) -> f64
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
            return self.value(state, ply.next(state.num_agents()), alpha, beta);
        }

        if ply.agent == PLAYER {
            self.max_value(state, ply, actions, alpha, beta)
        } else {
            self.min_value(state, ply, actions, alpha, beta)
        }
    }

    fn max_value<G>(
        &mut self,
        state: &G,
        ply: Ply,
        actions: Vec<G::Action>,
        mut alpha: f64,
        beta: f64,
    ) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        let next = ply.next(state.num_agents());
        let mut v = f64::NEG_INFINITY;

        for action in &actions {
            let successor = state.generate_successor(ply.agent, action);
            v = v.max(self.value(&successor, next, alpha, beta));
            if v > beta {
                self.pruned += 1;
                return v;
            }
            alpha = alpha.max(v);
        }
        v
    }

    fn min_value<G>(
        &mut self,
        state: &G,
        ply: Ply,
        actions: Vec<G::Action>,
        alpha: f64,
        mut beta: f64,
    ) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        let next = ply.next(state.num_agents());
        let mut v = f64::INFINITY;

        for action in &actions {
            let successor = state.generate_successor(ply.agent, action);
            v = v.min(self.value(&successor, next, alpha, beta));
            if v < alpha {
                self.pruned += 1;
                return v;
            }
            beta = beta.min(v);
        }
        v
    }
}

/// Choose the player's move by alpha-beta search, `depth_limit` rounds deep.
///
/// Always agrees with [minimax::choose_action](super::minimax::choose_action),
/// while usually evaluating far fewer states.
pub fn choose_action<G, E>(state: &G, depth_limit: usize, evaluator: &E) -> G::Action
where
    G: GameState,
    E: Evaluator<G>,
{
    let mut search = AlphaBeta::new(depth_limit, evaluator);
    let first = Ply::root().next(state.num_agents());

    // The best value so far at the root is the player's alpha.
    let action = decide(state, |successor, best| {
        search.value(successor, first, best, f64::INFINITY)
    });

    debug!(
        "Alpha-beta chose {:?} after visiting {} states, pruning {} times",
        action, search.visited, search.pruned
    );
    action
}

/// Plays by alpha-beta search to a fixed depth.
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent<E> {
    depth: usize,
    evaluator: E,
}

impl<E> AlphaBetaAgent<E> {
    pub fn new(depth: usize, evaluator: E) -> Self {
        Self { depth, evaluator }
    }
}

impl<G, E> Strategy<G> for AlphaBetaAgent<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn choose_action(&mut self, state: &G) -> G::Action {
        choose_action(state, self.depth, &self.evaluator)
    }
}
