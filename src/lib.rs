//! dooryard: a simulation core for a toy 3D yard
//!
//! A ground plane, a red house with a blue door, a player-controlled
//! cube, a patrolling NPC cube, and collectible trophy spheres. The
//! library owns everything that happens per tick: direct and waypoint
//! movement, proximity interactions (pickup, door toggle), the
//! two-state outside/inside camera, and the scene description on disk.
//! It never touches a rendering or windowing API; the demo binary hosts
//! it with macroquad, and any other host can do the same through
//! [`sim::Yard`].

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod scene;
pub mod sim;
