//! Path data structures
//!
//! A path is a sequence of steps in a 2D geometry.

use std::ops::Deref;

use super::{Direction, Point};

/// A sequence of steps in a 2D geometry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl Path {
    /// Construct a new path which starts from this point.
    pub fn new(origin: Point) -> Self {
        let mut steps = Vec::with_capacity(1);
        steps.push(origin);
        Path { steps }
    }

    /// Trace the points visited by a sequence of moves.
    pub fn follow<'d>(origin: Point, directions: impl IntoIterator<Item = &'d Direction>) -> Self {
        let mut path = Path::new(origin);
        for direction in directions {
            let next = path.destination().step(*direction);
            path.steps.push(next);
        }
        path
    }

    /// Return a new path after taking a step in a particular direction.
    pub fn step(&self, direction: Direction) -> Self {
        let mut steps = self.steps.clone();
        steps.push(self.destination().step(direction));
        Path { steps }
    }

    /// Iterate over the points in this path.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.steps.iter()
    }

    /// Where this path started
    pub fn origin(&self) -> &Point {
        &self.steps[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &Point {
        &self.steps[self.steps.len() - 1]
    }

    /// How long this path is.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.steps.len() < 2
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
