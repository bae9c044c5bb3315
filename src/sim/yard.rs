//! The simulation-state struct
//!
//! `Yard` owns everything that exists in the scene: the player, the
//! patroller, the remaining trophies, the door, the camera rig, and the
//! static layout. The host loop owns a `Yard` and calls [`Yard::tick`]
//! once per frame; there are no globals and no hidden state.
//!
//! Tick order:
//! 1. clear last tick's events
//! 2. movement (player, then patroller)
//! 3. interactions against the post-move positions (collect sweep, door
//!    toggle, route swap)

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::scene::config::SceneConfig;
use crate::scene::props::SceneLayout;

use super::event::{DoorToggled, RouteSwapped, TrophyCollected, WaypointReached, YardEvents};
use super::input::{Action, InputSnapshot};
use super::patrol::Patroller;
use super::player::Player;
use super::proximity::{is_near, Trophies};
use super::view::{CameraRig, ViewMode};

/// Door geometry: where it is, and where toggling puts the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub position: Vec3,
    /// The toggle only fires when the player is within this distance.
    pub radius: f32,
    /// Where the player snaps on entering.
    pub inside_spawn: Vec3,
    /// Where the player snaps on leaving.
    pub outside_spawn: Vec3,
}

impl Default for Door {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.3, -0.45, 0.01),
            radius: 0.3,
            inside_spawn: Vec3::new(0.0, -0.4, 0.0),
            outside_spawn: Vec3::new(1.5, -0.4, 0.5),
        }
    }
}

/// All simulation state, owned by the host loop.
#[derive(Debug)]
pub struct Yard {
    pub player: Player,
    pub npc: Patroller,
    pub trophies: Trophies,
    pub camera: CameraRig,
    pub door: Door,
    pub pickup_radius: f32,
    pub layout: SceneLayout,
    pub events: YardEvents,
}

impl Yard {
    /// Build a yard from a scene description.
    pub fn from_scene(scene: &SceneConfig) -> Self {
        Self {
            player: Player::new(
                scene.player.spawn,
                scene.player.walk_speed,
                scene.player.sprint_factor,
            ),
            npc: Patroller::new(
                scene.patroller.spawn,
                scene.patroller.speed,
                scene.patroller.tolerance,
                scene.patroller.mode,
                scene.patroller.routes.clone(),
            ),
            trophies: Trophies::new(scene.trophies.positions.clone()),
            camera: CameraRig::new(
                scene.cameras.outside,
                scene.cameras.inside,
                scene.cameras.projection,
            ),
            door: scene.door,
            pickup_radius: scene.trophies.pickup_radius,
            layout: scene.layout.clone(),
            events: YardEvents::new(),
        }
    }

    /// Advance the simulation one tick. `dt` is seconds since the last
    /// tick; negative values are clamped to zero. After this returns the
    /// event queues hold exactly this tick's events.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) {
        let dt = dt.max(0.0);

        self.events.clear_all();

        // ===== Movement =====

        self.player.update(input, dt);

        if let Some(arrival) = self.npc.update(dt) {
            self.events.waypoint_reached.send(WaypointReached {
                route: arrival.route,
                waypoint: arrival.waypoint,
            });
        }

        // ===== Interactions =====

        if input.just_pressed(Action::Collect) {
            let picked = self.trophies.collect_near(self.player.position, self.pickup_radius);
            if !picked.is_empty() {
                debug!("collected {} trophies, {} left", picked.len(), self.trophies.remaining());
            }
            for position in picked {
                self.events.trophy_collected.send(TrophyCollected { position });
            }
        }

        if input.just_pressed(Action::ToggleDoor)
            && is_near(self.player.position, self.door.position, self.door.radius)
        {
            let mode = self.camera.toggle();
            self.player.position = match mode {
                ViewMode::Inside => self.door.inside_spawn,
                ViewMode::Outside => self.door.outside_spawn,
            };
            debug!("door toggled, now {}", mode.label());
            self.events.door_toggled.send(DoorToggled {
                mode,
                player_position: self.player.position,
            });
        }

        if input.just_pressed(Action::SwapRoute) {
            if let Some(route) = self.npc.swap_route() {
                debug!("patroller swapped to route {}", route);
                self.events.route_swapped.send(RouteSwapped { route });
            }
        }
    }
}

impl Default for Yard {
    fn default() -> Self {
        Self::from_scene(&SceneConfig::default())
    }
}
