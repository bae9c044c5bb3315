//! Proximity tests and trophy collection
//!
//! One distance predicate drives every interaction in the yard: trophy
//! pickup and the door toggle both ask "is the player within this radius
//! of that point". The comparison is plain Euclidean distance against
//! the threshold, inclusive.

use glam::Vec3;

/// True when the two points are within `threshold` of each other.
pub fn is_near(a: Vec3, b: Vec3, threshold: f32) -> bool {
    (a - b).length() <= threshold
}

/// The collectible spheres still in the scene. Membership only shrinks;
/// nothing is ever re-added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trophies {
    positions: Vec<Vec3>,
}

impl Trophies {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn remaining(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Remove every trophy within `radius` of `from` in one sweep and
    /// return the removed positions. Nothing in range is a valid no-op.
    pub fn collect_near(&mut self, from: Vec3, radius: f32) -> Vec<Vec3> {
        let mut picked = Vec::new();
        self.positions.retain(|&position| {
            if is_near(from, position, radius) {
                picked.push(position);
                false
            } else {
                true
            }
        });
        picked
    }
}
