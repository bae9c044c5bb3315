//! Scene description
//!
//! Everything fixed at load time lives here: static props, the RON
//! scene file with its validation limits, the plain-text patrol route
//! format, and the trophy sphere geometry. The simulation reads a
//! loaded [`SceneConfig`] once to build a yard and never writes back.

pub mod config;
pub mod mesh;
pub mod props;
pub mod route;

// Re-export main types
pub use config::{load_scene, load_scene_from_str, save_scene, scene_to_string, SceneConfig, SceneError};
pub use mesh::{uv_sphere, SphereMesh};
pub use props::{Color, Prop, PropShape, SceneLayout};
pub use route::{load_route, parse_route};
