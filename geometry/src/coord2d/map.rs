//! Trait to define a map suitable for pathfinding
//! on a 2D coordinate grid.
use std::fmt;

use searcher::Plan;

use super::pathfinder::Pathfinder;
use super::{Direction, Point};

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: Sized + fmt::Debug {
    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool;

    /// Directions which lead from a location onto traversable squares.
    fn exits(&self, location: Point) -> Vec<Direction> {
        Direction::all()
            .filter(|d| self.is_traversable(location.step(*d)))
            .collect()
    }

    /// Build a re-usable pathfinder for this map
    fn pathfinder(&self) -> Pathfinder<Self> {
        Pathfinder::new(self)
    }

    /// Find the moves for a shortest path on this map
    fn path(&self, origin: Point, destination: Point) -> Option<Plan<Direction>> {
        self.pathfinder().find_path(origin, destination)
    }
}

#[cfg(test)]
pub(crate) mod helpers {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::super::Point;
    use super::Map;
    use crate::Position;

    /// Only the squares marked `.` can be walked on.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct SimpleMap {
        spaces: HashSet<Point>,
    }

    impl FromStr for SimpleMap {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let mut map = SimpleMap::default();
            for (y, line) in s.lines().enumerate() {
                for (x, c) in line.trim().chars().enumerate() {
                    match c {
                        '.' => {
                            map.spaces.insert((x as Position, y as Position).into());
                        }
                        '#' => {}
                        _ => return Err(format!("Unexpected map character: {}", c)),
                    };
                }
            }
            Ok(map)
        }
    }

    impl Map for SimpleMap {
        fn is_traversable(&self, location: Point) -> bool {
            self.spaces.contains(&location)
        }
    }

    /// An open rectangle with no walls.
    #[derive(Debug, Clone)]
    pub(crate) struct OpenGrid {
        pub(crate) width: Position,
        pub(crate) height: Position,
    }

    impl Map for OpenGrid {
        fn is_traversable(&self, location: Point) -> bool {
            location.x >= 0 && location.y >= 0 && location.x < self.width && location.y < self.height
        }
    }
}
