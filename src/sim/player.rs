//! Player movement
//!
//! Direct cardinal movement on the ground plane: forward is −Z, back is
//! +Z, left is −X, right is +X. Each held direction adds a full-speed
//! translation, so held diagonals move faster than a single direction;
//! combined movement is deliberately not normalized. The vertical
//! coordinate never changes.

use glam::Vec3;

use super::input::{Action, InputSnapshot};

/// The player-controlled cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Units per second while walking.
    pub walk_speed: f32,
    /// Multiplier applied to `walk_speed` while sprint is held.
    pub sprint_factor: f32,
}

impl Player {
    pub fn new(position: Vec3, walk_speed: f32, sprint_factor: f32) -> Self {
        Self { position, walk_speed, sprint_factor }
    }

    /// Apply this tick's held movement. `dt` must be non-negative.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32) {
        let mut speed = self.walk_speed;
        if input.is_held(Action::Sprint) {
            speed *= self.sprint_factor;
        }
        let step = speed * dt;

        if input.is_held(Action::MoveForward) {
            self.position.z -= step;
        }
        if input.is_held(Action::MoveBackward) {
            self.position.z += step;
        }
        if input.is_held(Action::MoveLeft) {
            self.position.x -= step;
        }
        if input.is_held(Action::MoveRight) {
            self.position.x += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Vec3::new(1.0, -0.4, 2.0), 1.0, 2.0)
    }

    #[test]
    fn test_forward_moves_negative_z() {
        let mut p = player();
        p.update(&InputSnapshot::hold(&[Action::MoveForward]), 0.5);
        assert!((p.position.z - 1.5).abs() < 0.001);
        assert!((p.position.x - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_sprint_scales_speed() {
        let mut walking = player();
        let mut sprinting = player();
        walking.update(&InputSnapshot::hold(&[Action::MoveRight]), 0.25);
        sprinting.update(&InputSnapshot::hold(&[Action::MoveRight, Action::Sprint]), 0.25);

        let walked = walking.position.x - 1.0;
        let sprinted = sprinting.position.x - 1.0;
        assert!((sprinted - 2.0 * walked).abs() < 0.001);
    }

    #[test]
    fn test_diagonal_is_additive_not_normalized() {
        let mut p = player();
        p.update(&InputSnapshot::hold(&[Action::MoveForward, Action::MoveLeft]), 1.0);
        // Both axes get the full step.
        assert!((p.position.z - 1.0).abs() < 0.001);
        assert!((p.position.x - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut p = player();
        p.update(&InputSnapshot::hold(&[Action::MoveLeft, Action::MoveRight]), 1.0);
        assert_eq!(p.position, Vec3::new(1.0, -0.4, 2.0));
    }

    #[test]
    fn test_vertical_never_changes() {
        let mut p = player();
        p.update(
            &InputSnapshot::hold(&[
                Action::MoveForward,
                Action::MoveLeft,
                Action::MoveRight,
                Action::Sprint,
            ]),
            2.0,
        );
        assert!((p.position.y - -0.4).abs() < 0.001);
    }

    #[test]
    fn test_no_input_no_motion() {
        let mut p = player();
        p.update(&InputSnapshot::hold(&[]), 1.0);
        assert_eq!(p.position, Vec3::new(1.0, -0.4, 2.0));
    }
}
