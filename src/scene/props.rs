//! Static scenery records
//!
//! Props are plain position/scale/color data. They never move; the host
//! reads them straight out of the layout and draws whichever list the
//! active view calls for.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// RGBA color with float channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Which primitive the host should draw for a prop.
/// For `Sphere`, `scale.x` is the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropShape {
    Plane,
    Cube,
    Sphere,
}

/// A static scene object; immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,
    pub shape: PropShape,
    pub position: Vec3,
    pub scale: Vec3,
    pub color: Color,
}

impl Prop {
    pub fn new(name: &str, shape: PropShape, position: Vec3, scale: Vec3, color: Color) -> Self {
        Self {
            name: name.to_string(),
            shape,
            position,
            scale,
            color,
        }
    }
}

/// The static scenery, split by which view renders it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub exterior: Vec<Prop>,
    pub interior: Vec<Prop>,
}
