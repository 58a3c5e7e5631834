//! Adversarial search for turn-based games with one player
//! and any number of opponents.
//!
//! Agents take turns in index order. Agent 0 ([PLAYER]) is the one
//! whose move is being chosen and tries to maximize the evaluation;
//! every other agent is an opponent. A game is described by
//! implementing [GameState], and searched with one of the
//! [strategies].

mod evaluation;
mod game;
pub mod reflex;
pub mod strategies;

pub use evaluation::{Evaluator, ScoreEvaluator};
pub use game::{AgentAction, AgentIndex, GameState, GridState, PLAYER};
pub use reflex::ReflexAgent;
pub use strategies::alphabeta::AlphaBetaAgent;
pub use strategies::expectimax::ExpectimaxAgent;
pub use strategies::minimax::MinimaxAgent;
pub use strategies::Strategy;

#[cfg(test)]
pub(crate) mod helpers;
