//! A reflex agent, which only looks one move ahead.
//!
//! Each move is scored on the state it leads to: how close the player
//! gets to the nearest target, and how far it stays from the opponents.
//! The raw game score dominates, the distances only nudge.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::{AgentAction, GridState, PLAYER};
use crate::strategies::Strategy;

/// Penalty for standing still.
pub const STOP_PENALTY: f64 = 500.0;

/// Scales opponent proximity down relative to the target distance.
pub const PROXIMITY_SCALE: f64 = 1000.0;

/// The score of every move once no targets remain.
pub const NO_TARGETS: f64 = 0.0;

/// Score the player making a move from the current state.
pub fn score<G>(current: &G, action: &G::Action) -> f64
where
    G: GridState,
{
    let targets = current.remaining_targets();
    if targets.is_empty() {
        return NO_TARGETS;
    }

    let successor = current.generate_successor(PLAYER, action);
    let position = successor.player_position();

    // Targets are measured before the move, so landing on one counts.
    let target_distance = targets
        .iter()
        .map(|target| position.manhattan_distance(*target))
        .min()
        .unwrap_or_default();

    let opponent_proximity: f64 = successor
        .opponent_positions()
        .into_iter()
        .map(|opponent| position.euclidean_distance(opponent))
        .sum();

    let penalty = if action.is_noop() { -STOP_PENALTY } else { 0.0 };

    let value = if target_distance == 0 {
        opponent_proximity + penalty
    } else {
        opponent_proximity / (f64::from(target_distance) * PROXIMITY_SCALE) + penalty
    };
    value + successor.score()
}

/// Plays the best scoring move, breaking ties at random.
#[derive(Debug, Clone)]
pub struct ReflexAgent<R> {
    rng: R,
}

impl<R> ReflexAgent<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<G, R> Strategy<G> for ReflexAgent<R>
where
    G: GridState,
    R: Rng,
{
    fn choose_action(&mut self, state: &G) -> G::Action {
        let scored: Vec<(G::Action, f64)> = state
            .legal_actions(PLAYER)
            .into_iter()
            .map(|action| {
                let value = score(state, &action);
                (action, value)
            })
            .collect();

        let best = scored
            .iter()
            .map(|(_, value)| *value)
            .fold(f64::NEG_INFINITY, f64::max);

        let candidates: Vec<&G::Action> = scored
            .iter()
            .filter(|(_, value)| *value == best)
            .map(|(action, _)| action)
            .collect();

        match candidates.choose(&mut self.rng) {
            Some(action) => {
                debug!(
                    "Reflex chose {:?} worth {} from {} candidates",
                    action,
                    best,
                    candidates.len()
                );
                (*action).clone()
            }
            None => {
                warn!("No legal moves, staying put");
                G::Action::noop()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use geometry::coord2d::{Direction, Point};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::helpers::Arena;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_targets() {
        let arena = Arena::new(Point::new(0, 0), vec![Point::new(1, 0)], vec![]);

        for action in Direction::all().chain(Some(Direction::Stop)) {
            assert_eq!(score(&arena, &action), NO_TARGETS);
        }
    }

    #[test]
    fn values() {
        let arena = Arena::new(
            Point::new(0, 0),
            vec![Point::new(4, 0)],
            vec![Point::new(2, 0)],
        );

        // One step from the food, three from the ghost, one point spent.
        assert!(close(score(&arena, &Direction::Right), 3.0 / 1000.0 - 1.0));
        assert!(close(
            score(&arena, &Direction::Stop),
            4.0 / 2000.0 - 500.0 - 1.0
        ));

        let arena = Arena::new(
            Point::new(1, 0),
            vec![Point::new(4, 0)],
            vec![Point::new(2, 0)],
        );

        // Landing on the food skips the scaling.
        assert!(close(score(&arena, &Direction::Right), 2.0 + 9.0));
    }

    #[test]
    fn sums_opponents() {
        let arena = Arena::new(
            Point::new(0, 0),
            vec![Point::new(3, 0), Point::new(0, 4)],
            vec![Point::new(0, 0), Point::new(9, 9)],
        );

        // Stop lands on the food where the player already stands.
        assert!(close(
            score(&arena, &Direction::Stop),
            3.0 + 4.0 - 500.0 + 9.0
        ));
        assert!(close(
            score(&arena, &Direction::Right),
            (2.0 + 17f64.sqrt()) / 1000.0 - 1.0
        ));
    }

    #[test]
    fn prefers_food() {
        let mut agent = ReflexAgent::new(StdRng::seed_from_u64(7));
        let arena = Arena::new(
            Point::new(2, 2),
            vec![Point::new(8, 8)],
            vec![Point::new(2, 3), Point::new(0, 0)],
        );

        assert_eq!(agent.choose_action(&arena), Direction::Down);
    }

    #[test]
    fn random_ties() {
        let mut agent = ReflexAgent::new(StdRng::seed_from_u64(2019));
        let arena = Arena::new(Point::new(0, 0), vec![], vec![Point::new(5, 5)]);

        let chosen: HashSet<Direction> = (0..50).map(|_| agent.choose_action(&arena)).collect();

        assert!(chosen.len() > 1);
        assert!(!chosen.contains(&Direction::Stop));
    }

    #[test]
    fn terminal() {
        let mut agent = ReflexAgent::new(StdRng::seed_from_u64(1));
        let arena = Arena::new(Point::new(0, 0), vec![], vec![]);

        assert_eq!(agent.choose_action(&arena), Direction::Stop);
    }
}
