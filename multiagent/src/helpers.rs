//! Small games for exercising the strategies.

use rand::Rng;

use geometry::coord2d::{Direction, Point};

use crate::game::{AgentAction, AgentIndex, GameState, GridState, PLAYER};

/// An explicit game tree. Whoever is to move picks a child.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Tree {
    Leaf(f64),
    Node { estimate: f64, children: Vec<Tree> },
    Won { estimate: f64, children: Vec<Tree> },
}

pub(crate) fn leaf(value: f64) -> Tree {
    Tree::Leaf(value)
}

pub(crate) fn node(children: Vec<Tree>) -> Tree {
    Tree::Node {
        estimate: 0.0,
        children,
    }
}

pub(crate) fn estimated(estimate: f64, children: Vec<Tree>) -> Tree {
    Tree::Node { estimate, children }
}

impl Tree {
    /// Build a random tree with `levels` levels of branching below the root.
    ///
    /// Leaf values are small integers so that ties are common.
    pub(crate) fn random<R: Rng>(rng: &mut R, levels: usize) -> Self {
        if levels == 0 {
            return Tree::Leaf(f64::from(rng.gen_range(0..6u8)));
        }
        let branches = rng.gen_range(1..4usize);
        let children = (0..branches)
            .map(|_| {
                if rng.gen_bool(0.15) {
                    Tree::Leaf(f64::from(rng.gen_range(0..6u8)))
                } else {
                    Tree::random(rng, levels - 1)
                }
            })
            .collect();
        Tree::Node {
            estimate: f64::from(rng.gen_range(0..6u8)),
            children,
        }
    }
}

/// Which child to move to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Branch {
    Take(usize),
    Pass,
}

impl AgentAction for Branch {
    fn noop() -> Self {
        Branch::Pass
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    pub(crate) tree: Tree,
    pub(crate) agents: usize,
}

impl TreeGame {
    pub(crate) fn new(agents: usize, tree: Tree) -> Self {
        Self { tree, agents }
    }

    fn children(&self) -> &[Tree] {
        match &self.tree {
            Tree::Leaf(_) => &[],
            Tree::Node { children, .. } => children,
            Tree::Won { children, .. } => children,
        }
    }
}

impl GameState for TreeGame {
    type Action = Branch;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Branch> {
        let n = self.children().len();
        if n == 0 {
            return Vec::new();
        }

        // The no-op is always legal, and always listed first.
        let mut actions = vec![Branch::Pass];
        actions.extend((0..n).map(Branch::Take));
        actions
    }

    fn generate_successor(&self, _agent: AgentIndex, action: &Branch) -> Self {
        match action {
            Branch::Take(i) => TreeGame::new(self.agents, self.children()[*i].clone()),
            Branch::Pass => panic!("Searched the no-op"),
        }
    }

    fn is_win(&self) -> bool {
        matches!(self.tree, Tree::Won { .. })
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn score(&self) -> f64 {
        match self.tree {
            Tree::Leaf(value) => value,
            Tree::Node { estimate, .. } => estimate,
            Tree::Won { estimate, .. } => estimate,
        }
    }
}

/// An open, wall-less grid. Every player move costs a point,
/// and eating food is worth ten.
#[derive(Debug, Clone)]
pub(crate) struct Arena {
    pub(crate) player: Point,
    pub(crate) ghosts: Vec<Point>,
    pub(crate) food: Vec<Point>,
    pub(crate) score: f64,
}

impl Arena {
    pub(crate) fn new(player: Point, ghosts: Vec<Point>, food: Vec<Point>) -> Self {
        Self {
            player,
            ghosts,
            food,
            score: 0.0,
        }
    }
}

impl GameState for Arena {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mut actions: Vec<_> = Direction::all().collect();
        if agent == PLAYER {
            actions.push(Direction::Stop);
        }
        actions
    }

    fn generate_successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();
        if agent == PLAYER {
            next.player = self.player.step(*action);
            next.score -= 1.0;
            let before = next.food.len();
            let player = next.player;
            next.food.retain(|f| *f != player);
            if next.food.len() < before {
                next.score += 10.0;
            }
        } else {
            next.ghosts[agent - 1] = self.ghosts[agent - 1].step(*action);
        }
        next
    }

    fn is_win(&self) -> bool {
        self.food.is_empty()
    }

    fn is_lose(&self) -> bool {
        self.ghosts.contains(&self.player)
    }

    fn num_agents(&self) -> usize {
        self.ghosts.len() + 1
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl GridState for Arena {
    fn player_position(&self) -> Point {
        self.player
    }

    fn opponent_positions(&self) -> Vec<Point> {
        self.ghosts.clone()
    }

    fn remaining_targets(&self) -> Vec<Point> {
        self.food.clone()
    }
}
