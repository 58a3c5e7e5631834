#![deny(clippy::all)]

//! Search agents for maze games.
//!
//! A [Layout] describes a maze, and a [World] is the game played on it.
//! Paths through the maze are found with the graph searches in
//! [searcher], and moves in the game are chosen by the agents in
//! [multiagent].

pub mod layout;
pub mod world;

pub use layout::{Layout, LayoutError};
pub use world::World;
