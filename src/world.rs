//! The game played on a layout.
//!
//! The player eats food while the ghosts chase it. Moving costs a point
//! and each food is worth ten. Clearing the maze wins 500 points, while
//! meeting a ghost loses 500 and ends the game.

use std::collections::BTreeSet;

use geometry::coord2d::map::Map;
use geometry::coord2d::{Direction, Point};
use multiagent::{AgentIndex, GameState, GridState, PLAYER};

use crate::layout::Layout;

pub const MOVE_COST: f64 = 1.0;
pub const FOOD_SCORE: f64 = 10.0;
pub const WIN_SCORE: f64 = 500.0;
pub const LOSE_SCORE: f64 = 500.0;

/// A snapshot of the game in progress.
#[derive(Debug, Clone)]
pub struct World<'l> {
    layout: &'l Layout,
    player: Point,
    ghosts: Vec<Point>,
    food: BTreeSet<Point>,
    score: f64,
    caught: bool,
}

impl<'l> World<'l> {
    /// Start a game with everyone where the layout puts them.
    pub fn new(layout: &'l Layout) -> Self {
        let mut world = World {
            layout,
            player: layout.player(),
            ghosts: layout.ghosts().to_vec(),
            food: layout.food().clone(),
            score: 0.0,
            caught: false,
        };
        world.caught = world.ghosts.contains(&world.player);
        world
    }

    pub fn layout(&self) -> &'l Layout {
        self.layout
    }

    pub fn ghosts(&self) -> &[Point] {
        &self.ghosts
    }

    pub fn food(&self) -> &BTreeSet<Point> {
        &self.food
    }

    fn settle(&mut self) {
        if self.ghosts.contains(&self.player) {
            self.caught = true;
            self.score -= LOSE_SCORE;
        }
    }
}

impl<'l> GameState for World<'l> {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.is_terminal() {
            return Vec::new();
        }

        if agent == PLAYER {
            let mut actions = self.layout.exits(self.player);
            actions.push(Direction::Stop);
            return actions;
        }

        match self.ghosts.get(agent - 1) {
            Some(ghost) => {
                let exits = self.layout.exits(*ghost);
                if exits.is_empty() {
                    vec![Direction::Stop]
                } else {
                    exits
                }
            }
            None => Vec::new(),
        }
    }

    fn generate_successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();

        if agent == PLAYER {
            let target = self.player.step(*action);
            if self.layout.is_traversable(target) {
                next.player = target;
            }
            next.score -= MOVE_COST;

            if next.food.remove(&next.player) {
                next.score += FOOD_SCORE;
                if next.food.is_empty() && !next.ghosts.contains(&next.player) {
                    next.score += WIN_SCORE;
                }
            }
        } else if let Some(ghost) = next.ghosts.get_mut(agent - 1) {
            let target = ghost.step(*action);
            if self.layout.is_traversable(target) {
                *ghost = target;
            }
        }

        next.settle();
        next
    }

    fn is_win(&self) -> bool {
        !self.caught && self.food.is_empty()
    }

    fn is_lose(&self) -> bool {
        self.caught
    }

    fn num_agents(&self) -> usize {
        self.ghosts.len() + 1
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl<'l> GridState for World<'l> {
    fn player_position(&self) -> Point {
        self.player
    }

    fn opponent_positions(&self) -> Vec<Point> {
        self.ghosts.clone()
    }

    fn remaining_targets(&self) -> Vec<Point> {
        self.food.iter().copied().collect()
    }
}
