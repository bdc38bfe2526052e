// src/map/check.rs

use std::fmt;

use super::{GameObject, Grid};

/// A unique object that does not appear exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapIssue {
    pub object: GameObject,
    pub found: usize,
}

impl fmt::Display for MapIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The map must contain exactly one {} (found {}).",
            self.object.label().to_lowercase(),
            self.found
        )
    }
}

/// Checks the object counts a map needs before it can be saved.
///
/// Pac-Man and each of the four ghosts must appear exactly once. Walls and
/// food are unconstrained. An empty result means the map is playable.
pub fn check_objects(grid: &Grid) -> Vec<MapIssue> {
    GameObject::UNIQUE
        .iter()
        .map(|&object| MapIssue {
            object,
            found: grid.count(object),
        })
        .filter(|issue| issue.found != 1)
        .collect()
}
