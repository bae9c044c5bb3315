//! Demo viewer: a macroquad host for the dooryard simulation
//!
//! Controls:
//! - WASD: move, LeftShift: sprint
//! - E: collect trophies in range
//! - O: toggle the door when standing by it
//! - C: swap the NPC onto its next patrol route
//! - Escape: quit
//!
//! Loads `scenes/yard.ron` when present (falling back to the built-in
//! yard), applies `scenes/patrol.txt` as a route override, then runs
//! the poll → tick → draw loop at frame rate.

use std::path::Path;

use log::{debug, info, warn};
use macroquad::prelude::*;

use dooryard::scene::config::{load_scene, SceneConfig};
use dooryard::scene::mesh::{uv_sphere, SphereMesh, DEFAULT_SECTORS, DEFAULT_STACKS};
use dooryard::scene::props::{self, Prop, PropShape};
use dooryard::scene::route::load_route;
use dooryard::sim::{Action, ActionSet, InputTracker, PatrolRoute, ViewMode, Yard};
use dooryard::VERSION;

const SCENE_PATH: &str = "scenes/yard.ron";
const ROUTE_PATH: &str = "scenes/patrol.txt";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("dooryard v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Map raw key state to the actions the simulation understands.
/// Edge detection happens in the tracker, not here.
fn sample_actions() -> ActionSet {
    let mut held = ActionSet::new();
    held.set(Action::MoveForward, is_key_down(KeyCode::W));
    held.set(Action::MoveBackward, is_key_down(KeyCode::S));
    held.set(Action::MoveLeft, is_key_down(KeyCode::A));
    held.set(Action::MoveRight, is_key_down(KeyCode::D));
    held.set(Action::Sprint, is_key_down(KeyCode::LeftShift));
    held.set(Action::Collect, is_key_down(KeyCode::E));
    held.set(Action::ToggleDoor, is_key_down(KeyCode::O));
    held.set(Action::SwapRoute, is_key_down(KeyCode::C));
    held
}

fn load_scene_or_default() -> SceneConfig {
    if !Path::new(SCENE_PATH).exists() {
        info!("no scene file at {}, using the built-in yard", SCENE_PATH);
        return SceneConfig::default();
    }
    match load_scene(SCENE_PATH) {
        Ok(scene) => {
            info!("loaded scene '{}' from {}", scene.name, SCENE_PATH);
            scene
        }
        Err(e) => {
            warn!("failed to load {}: {} (using the built-in yard)", SCENE_PATH, e);
            SceneConfig::default()
        }
    }
}

/// Replace the patroller's routes with the ones from `scenes/patrol.txt`
/// when that file exists and yields at least one waypoint.
fn apply_route_override(yard: &mut Yard) {
    if !Path::new(ROUTE_PATH).exists() {
        return;
    }
    match load_route(ROUTE_PATH) {
        Ok(points) if points.is_empty() => {
            warn!("{} has no usable waypoints, keeping the scene routes", ROUTE_PATH);
        }
        Ok(points) => {
            info!("patrol override: {} waypoints from {}", points.len(), ROUTE_PATH);
            yard.npc.set_route(PatrolRoute::from_world_points(&points));
        }
        Err(e) => warn!("failed to read {}: {}", ROUTE_PATH, e),
    }
}

fn log_events(yard: &mut Yard) {
    for event in yard.events.trophy_collected.drain() {
        let p = event.position;
        info!("collected trophy at ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    }
    for event in yard.events.door_toggled.drain() {
        info!("door toggled, now {}", event.mode.label());
    }
    for event in yard.events.waypoint_reached.drain() {
        debug!("NPC reached waypoint {} on route {}", event.waypoint, event.route);
    }
    for event in yard.events.route_swapped.drain() {
        info!("NPC swapped to route {}", event.route);
    }
}

fn to_color(c: props::Color) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn draw_prop(prop: &Prop) {
    let color = to_color(prop.color);
    match prop.shape {
        PropShape::Plane => draw_plane(
            prop.position,
            vec2(prop.scale.x * 0.5, prop.scale.z * 0.5),
            None,
            color,
        ),
        PropShape::Cube => draw_cube(prop.position, prop.scale, None, color),
        PropShape::Sphere => draw_sphere(prop.position, prop.scale.x, None, color),
    }
}

/// Build a drawable mesh from the shared trophy geometry, translated to
/// `center`.
fn trophy_mesh_at(geometry: &SphereMesh, center: Vec3, color: Color) -> Mesh {
    Mesh {
        vertices: geometry
            .positions
            .iter()
            .map(|&p| {
                let p = p + center;
                Vertex::new(p.x, p.y, p.z, 0.0, 0.0, color)
            })
            .collect(),
        indices: geometry.indices.iter().map(|&i| i as u16).collect(),
        texture: None,
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("dooryard v{}", VERSION);

    let scene = load_scene_or_default();
    let player_scale = Vec3::splat(scene.player.scale);
    let player_color = to_color(scene.player.color);
    let npc_scale = Vec3::splat(scene.patroller.scale);
    let npc_color = to_color(scene.patroller.color);
    let trophy_color = to_color(scene.trophies.color);
    let trophy_geometry = uv_sphere(scene.trophies.sphere_radius, DEFAULT_SECTORS, DEFAULT_STACKS);

    let mut yard = Yard::from_scene(&scene);
    apply_route_override(&mut yard);
    let mut tracker = InputTracker::new();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let snapshot = tracker.advance(sample_actions());
        yard.tick(&snapshot, get_frame_time());
        log_events(&mut yard);

        clear_background(Color::new(0.2, 0.3, 0.3, 1.0));
        let look = yard.camera.look_at();
        set_camera(&Camera3D {
            position: look.eye,
            target: look.target,
            up: look.up,
            fovy: yard.camera.projection().fov_y_degrees,
            ..Default::default()
        });

        match yard.camera.mode() {
            ViewMode::Outside => {
                for prop in &yard.layout.exterior {
                    draw_prop(prop);
                }
                for &position in yard.trophies.positions() {
                    draw_mesh(&trophy_mesh_at(&trophy_geometry, position, trophy_color));
                }
                draw_cube(yard.npc.position, npc_scale, None, npc_color);
                draw_cube(yard.player.position, player_scale, None, player_color);
            }
            ViewMode::Inside => {
                for prop in &yard.layout.interior {
                    draw_prop(prop);
                }
                draw_cube(yard.player.position, player_scale, None, player_color);
            }
        }

        set_default_camera();
        draw_text(
            &format!(
                "{} | trophies left: {} | WASD move, E collect, O door, C route",
                yard.camera.mode().label(),
                yard.trophies.remaining()
            ),
            12.0,
            24.0,
            24.0,
            WHITE,
        );

        next_frame().await;
    }
}
