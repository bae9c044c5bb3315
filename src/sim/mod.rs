//! Simulation core
//!
//! Everything that changes per tick lives here:
//! - Input: action sets and snapshots with edge-detected triggers
//! - Player: direct cardinal movement with sprint
//! - Patrol: waypoint routes, loop or ping-pong, route swapping
//! - Proximity: distance tests and trophy collection
//! - View: the two-state outside/inside camera selector
//! - Yard: the simulation-state struct the host ticks
//!
//! The host samples input, calls [`Yard::tick`], reads positions, the
//! active view matrix, and the tick's events, then draws. Nothing in
//! this module touches a rendering or windowing API.

pub mod event;
pub mod input;
pub mod patrol;
pub mod player;
pub mod proximity;
pub mod view;
pub mod yard;

// Re-export main types
pub use event::{DoorToggled, EventQueue, RouteSwapped, TrophyCollected, WaypointReached, YardEvents};
pub use input::{Action, ActionSet, InputSnapshot, InputTracker};
pub use patrol::{Arrival, PatrolMode, PatrolRoute, Patroller};
pub use player::Player;
pub use proximity::{is_near, Trophies};
pub use view::{CameraRig, LookAt, Projection, ViewMode};
pub use yard::{Door, Yard};
