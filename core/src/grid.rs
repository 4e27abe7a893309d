//! Grid-space geometry.
//!
//! The host addresses terrain on an integer grid; spawn positions are
//! deduplicated by exact grid-coordinate equality, while proximity
//! checks (blocker dedup, spawn crediting) use Euclidean distance.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another grid position, in grid units.
    pub fn distance_to(self, other: GridPos) -> f32 {
        self.to_vec2().distance(other.to_vec2())
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_set_key_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(GridPos::new(10, -3));
        set.insert(GridPos::new(10, -3));
        set.insert(GridPos::new(10, 3));
        assert_eq!(set.len(), 2);
    }
}
