//! Two-state camera selector
//!
//! The scene has exactly two viewpoints: outside in the yard and inside
//! the house. Toggling flips between them; there is no interpolation or
//! blending. Both view matrices are built once at construction, so
//! returning to a mode yields the identical matrix.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Which of the two fixed viewpoints is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Outside,
    Inside,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Outside => ViewMode::Inside,
            ViewMode::Inside => ViewMode::Outside,
        }
    }

    /// Short name for HUD / log lines
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Outside => "outside",
            ViewMode::Inside => "inside",
        }
    }
}

/// A fixed eye/target/up triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookAt {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl LookAt {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Fixed perspective parameters the host renders with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 1920.0 / 1080.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.z_near,
            self.z_far,
        )
    }
}

/// The two fixed viewpoints and the active selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    mode: ViewMode,
    outside: LookAt,
    inside: LookAt,
    outside_matrix: Mat4,
    inside_matrix: Mat4,
    projection: Projection,
}

impl CameraRig {
    /// Starts in `Outside` mode.
    pub fn new(outside: LookAt, inside: LookAt, projection: Projection) -> Self {
        Self {
            mode: ViewMode::Outside,
            outside_matrix: outside.matrix(),
            inside_matrix: inside.matrix(),
            outside,
            inside,
            projection,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Flip between the two viewpoints, returning the new mode.
    pub fn toggle(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// The active eye/target/up triple.
    pub fn look_at(&self) -> &LookAt {
        match self.mode {
            ViewMode::Outside => &self.outside,
            ViewMode::Inside => &self.inside,
        }
    }

    /// Precomputed view matrix for the active mode.
    pub fn view_matrix(&self) -> Mat4 {
        match self.mode {
            ViewMode::Outside => self.outside_matrix,
            ViewMode::Inside => self.inside_matrix,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }
}
