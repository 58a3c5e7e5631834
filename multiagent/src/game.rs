//! The common structures and traits.

use std::fmt::Debug;

use geometry::coord2d::{Direction, Point};

/// Identifies an agent by its position in the turn order.
pub type AgentIndex = usize;

/// The agent whose moves are being chosen. Always moves first.
pub const PLAYER: AgentIndex = 0;

/// Defines the moves agents can make.
pub trait AgentAction: Clone + PartialEq + Debug {
    /// The move which does nothing.
    ///
    /// It may be legal, but searching it never makes progress,
    /// so no strategy will expand it.
    fn noop() -> Self;

    fn is_noop(&self) -> bool {
        *self == Self::noop()
    }
}

impl AgentAction for Direction {
    fn noop() -> Self {
        Direction::Stop
    }
}

/// A snapshot of a game between the player and its opponents.
///
/// States are never modified by search. Every move
/// produces a new state.
pub trait GameState: Sized {
    type Action: AgentAction;

    /// Moves available to an agent, possibly including the no-op.
    ///
    /// Terminal states have no legal moves.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state after an agent makes a move.
    fn generate_successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Total number of agents, including the player.
    fn num_agents(&self) -> usize;

    /// The raw game score, from the player's perspective.
    fn score(&self) -> f64;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// A game played on a 2D grid, where the player is
/// collecting targets while avoiding the opponents.
pub trait GridState: GameState {
    fn player_position(&self) -> Point;

    fn opponent_positions(&self) -> Vec<Point>;

    fn remaining_targets(&self) -> Vec<Point>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_noop() {
        assert!(Direction::Stop.is_noop());
        assert!(Direction::all().all(|d| !d.is_noop()));
    }
}
