//! Maze layouts, in the classic text format.
//!
//! ```text
//! %%%%%%%
//! %P  . %
//! % %%% %
//! %.  G %
//! %%%%%%%
//! ```
//!
//! `%` is a wall, `.` is food, `o` is a capsule (eaten like food),
//! `P` is the player and `G` is a ghost. Everything else must be a
//! space, which is open floor.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use geometry::coord2d::map::Map;
use geometry::coord2d::pathfinder::PositionProblem;
use geometry::coord2d::{BoundingBox, Point};
use thiserror::Error;

/// Error when parsing a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Unexpected character {character:?} at {location}")]
    UnexpectedCharacter { character: char, location: Point },

    #[error("Row {row} is {found} wide, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Layout has no player")]
    NoPlayer,

    #[error("Layout has more than one player, at {0} and {1}")]
    MultiplePlayers(Point, Point),

    #[error("Layout is empty")]
    Empty,
}

/// The fixed parts of a maze and where everyone starts.
#[derive(Debug, Clone)]
pub struct Layout {
    walls: HashSet<Point>,
    food: BTreeSet<Point>,
    capsules: HashSet<Point>,
    player: Point,
    ghosts: Vec<Point>,
    bbox: BoundingBox,
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut walls = HashSet::new();
        let mut food = BTreeSet::new();
        let mut capsules = HashSet::new();
        let mut player = None;
        let mut ghosts = Vec::new();
        let mut bbox = BoundingBox::empty();
        let mut width = None;

        let rows = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty());

        for (y, line) in rows.enumerate() {
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LayoutError::RaggedRow {
                        row: y,
                        found,
                        expected,
                    })
                }
                Some(_) => {}
            }

            for (x, c) in line.chars().enumerate() {
                let location: Point = (x, y).into();
                bbox.include(location);

                match c {
                    '%' => {
                        walls.insert(location);
                    }
                    '.' => {
                        food.insert(location);
                    }
                    'o' => {
                        food.insert(location);
                        capsules.insert(location);
                    }
                    'P' => {
                        if let Some(first) = player {
                            return Err(LayoutError::MultiplePlayers(first, location));
                        }
                        player = Some(location);
                    }
                    'G' => ghosts.push(location),
                    ' ' => {}
                    character => {
                        return Err(LayoutError::UnexpectedCharacter {
                            character,
                            location,
                        })
                    }
                }
            }
        }

        if width.is_none() {
            return Err(LayoutError::Empty);
        }

        Ok(Layout {
            walls,
            food,
            capsules,
            player: player.ok_or(LayoutError::NoPlayer)?,
            ghosts,
            bbox,
        })
    }
}

impl Layout {
    pub fn player(&self) -> Point {
        self.player
    }

    /// Ghost starting positions, in reading order.
    pub fn ghosts(&self) -> &[Point] {
        &self.ghosts
    }

    /// Food positions, in reading order.
    pub fn food(&self) -> &BTreeSet<Point> {
        &self.food
    }

    /// Capsules are also counted as food.
    pub fn is_capsule(&self, location: Point) -> bool {
        self.capsules.contains(&location)
    }

    pub fn is_wall(&self, location: Point) -> bool {
        self.walls.contains(&location)
    }

    pub fn width(&self) -> usize {
        self.bbox.width() as usize
    }

    pub fn height(&self) -> usize {
        self.bbox.height() as usize
    }

    /// The food closest to the player's start.
    ///
    /// Distance is by manhattan distance, ignoring walls. Ties go to
    /// the food which comes first in reading order.
    pub fn nearest_food(&self) -> Option<Point> {
        self.food
            .iter()
            .min_by_key(|f| self.player.manhattan_distance(**f))
            .copied()
    }

    /// The problem of walking from the player's start to a goal.
    pub fn position_problem(&self, goal: Point) -> PositionProblem<'_, Self> {
        PositionProblem::new(self, self.player, goal)
    }
}

impl Map for Layout {
    fn is_traversable(&self, location: Point) -> bool {
        self.bbox.contains(location) && !self.is_wall(location)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.bbox.printer(f, |f, point| {
            let c = if self.is_wall(*point) {
                '%'
            } else if *point == self.player {
                'P'
            } else if self.ghosts.contains(point) {
                'G'
            } else if self.is_capsule(*point) {
                'o'
            } else if self.food.contains(point) {
                '.'
            } else {
                ' '
            };
            write!(f, "{}", c)
        })
    }
}
