//! Strategies for choosing the player's move by searching the game tree.
//!
//! The tree is never built. Each strategy walks it recursively, one
//! path at a time, carrying the depth and the agent to move. A round
//! is one move by every agent in index order; the depth counts rounds,
//! so it only increases after the last agent has moved.

use log::{trace, warn};

use crate::game::{AgentAction, AgentIndex, GameState, PLAYER};

pub mod alphabeta;
pub mod expectimax;
pub mod minimax;

/// Defines a method of choosing a move for the player.
pub trait Strategy<G>
where
    G: GameState,
{
    fn choose_action(&mut self, state: &G) -> G::Action;
}

/// Position of a node in the implicit game tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ply {
    pub(crate) depth: usize,
    pub(crate) agent: AgentIndex,
}

impl Ply {
    /// The player's move at the top of the tree.
    pub(crate) fn root() -> Self {
        Ply {
            depth: 0,
            agent: PLAYER,
        }
    }

    /// The ply after this agent has moved.
    pub(crate) fn next(self, num_agents: usize) -> Self {
        if self.agent + 1 >= num_agents {
            Ply {
                depth: self.depth + 1,
                agent: PLAYER,
            }
        } else {
            Ply {
                depth: self.depth,
                agent: self.agent + 1,
            }
        }
    }

    /// Should the search stop here and evaluate?
    pub(crate) fn is_cutoff<G: GameState>(&self, state: &G, depth_limit: usize) -> bool {
        self.depth >= depth_limit || state.is_terminal()
    }
}

/// Moves worth searching for an agent: everything legal but the no-op.
pub(crate) fn searchable_actions<G>(state: &G, agent: AgentIndex) -> Vec<G::Action>
where
    G: GameState,
{
    state
        .legal_actions(agent)
        .into_iter()
        .filter(|action| !action.is_noop())
        .collect()
}

/// Pick the player's move with the highest value.
///
/// `value` is called with each successor of the root and the best value
/// seen so far. The first move to reach a strictly higher value wins, so
/// later moves with equal values never replace it. With nothing but the
/// no-op available, the player stays put.
pub(crate) fn decide<G, F>(state: &G, mut value: F) -> G::Action
where
    G: GameState,
    F: FnMut(&G, f64) -> f64,
{
    let mut best: Option<(G::Action, f64)> = None;

    for action in searchable_actions(state, PLAYER) {
        let successor = state.generate_successor(PLAYER, &action);
        let bound = best.as_ref().map_or(f64::NEG_INFINITY, |(_, v)| *v);
        let v = value(&successor, bound);
        trace!("{:?} is worth {}", action, v);

        if best.is_none() || v > bound {
            best = Some((action, v));
        }
    }

    match best {
        Some((action, _)) => action,
        None => {
            warn!("No legal moves besides the no-op, staying put");
            G::Action::noop()
        }
    }
}
