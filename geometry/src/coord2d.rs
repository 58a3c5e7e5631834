//! Coordinate work in two dimensions.

use std::cmp;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod map;
pub mod path;
pub mod pathfinder;

/// A movement direction in two dimensions.
///
/// `Stop` is the action of staying in place.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stop,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    /// Enumertates all directions of movement in "reading order",
    /// i.e. such that the resulting points are in reading order
    /// from the current position.
    ///
    /// `Stop` is not a movement, and is not included.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Stop => "Stop",
        };
        write!(f, "{}", name)
    }
}

/// A location in 2D space.
///
/// Essentially a 2-tuple of x and y position,
/// but with a lot of provided methods. `y` grows
/// downwards, as in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Stop => self,
        }
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Straight line distance between two points.
    pub fn euclidean_distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl cmp::Ord for Point {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl cmp::PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            x: coordinates.0,
            y: coordinates.1,
        }
    }
}

impl From<(usize, usize)> for Point {
    fn from(coordinates: (usize, usize)) -> Self {
        Self {
            x: coordinates.0 as Position,
            y: coordinates.1 as Position,
        }
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*(?P<x>-?\d+)\s*,\s*(?P<y>-?\d+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

/// A rectangle which encloses points and is aligned
/// with the coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    left: Position,
    right: Position,
    top: Position,
    bottom: Position,
}

impl BoundingBox {
    /// Create a bounding box which covers no points.
    pub fn empty() -> Self {
        Self {
            left: Position::max_value(),
            right: Position::min_value(),
            top: Position::max_value(),
            bottom: Position::min_value(),
        }
    }

    /// Modify this boundign box to include a given point.
    pub fn include(&mut self, point: Point) -> bool {
        let mut updated = false;
        if point.x < self.left {
            self.left = point.x;
            updated = true;
        }
        if point.x > self.right {
            self.right = point.x;
            updated = true;
        }
        if point.y < self.top {
            self.top = point.y;
            updated = true;
        }
        if point.y > self.bottom {
            self.bottom = point.y;
            updated = true;
        }
        updated
    }

    /// Range of vertical positions
    pub fn vertical(&self) -> RangeInclusive<Position> {
        self.top..=self.bottom
    }

    /// Range of horizontal positions
    pub fn horizontal(&self) -> RangeInclusive<Position> {
        self.left..=self.right
    }

    /// Check if a point is contained within this bounding
    /// box, including the edges.
    pub fn contains(&self, point: Point) -> bool {
        (point.x >= self.left)
            && (point.x <= self.right)
            && (point.y >= self.top)
            && (point.y <= self.bottom)
    }

    /// Width for this box.
    pub fn width(&self) -> Position {
        self.right.saturating_sub(self.left) + 1
    }

    /// Height for this box.
    pub fn height(&self) -> Position {
        self.bottom.saturating_sub(self.top) + 1
    }

    /// Call a function which should write a single character at every position
    /// in this bounding box.
    ///
    /// This function will handle newlines. The callback should print
    /// a single character for each point.
    pub fn printer<F>(&self, f: &mut fmt::Formatter, cb: F) -> fmt::Result
    where
        F: Fn(&mut fmt::Formatter, &Point) -> fmt::Result,
    {
        for y in self.vertical() {
            for x in self.horizontal() {
                let point = (x, y).into();
                cb(f, &point)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
