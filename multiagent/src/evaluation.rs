use crate::game::GameState;

/// Evaluates a game's positions.
///
/// Higher values are better for the player, whichever
/// agent is about to move.
pub trait Evaluator<G> {
    fn evaluate(&self, state: &G) -> f64;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> f64,
{
    fn evaluate(&self, state: &G) -> f64 {
        self(state)
    }
}

/// Evaluates a state by its raw game score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl<G> Evaluator<G> for ScoreEvaluator
where
    G: GameState,
{
    fn evaluate(&self, state: &G) -> f64 {
        state.score()
    }
}
