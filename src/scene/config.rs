//! Scene description loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files. A
//! scene fully determines a yard: spawn points, speeds, patrol routes,
//! trophies, door geometry, the two camera triples, and the static prop
//! lists. Every section has defaults, so a partial file (or an empty
//! `()`) is a valid scene; the defaults reproduce the bundled demo.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::{Vec2, Vec3};
use log::error;
use serde::{Deserialize, Serialize};

use crate::scene::props::{Color, Prop, PropShape, SceneLayout};
use crate::sim::patrol::{PatrolMode, PatrolRoute};
use crate::sim::view::{LookAt, Projection};
use crate::sim::yard::Door;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 10_000.0;
    /// Maximum props per layout list
    pub const MAX_PROPS: usize = 256;
    /// Maximum trophies in a scene
    pub const MAX_TROPHIES: usize = 1024;
    /// Maximum routes on the patroller
    pub const MAX_ROUTES: usize = 16;
    /// Maximum waypoints per route
    pub const MAX_WAYPOINTS: usize = 1024;
    /// Maximum speed for any mover
    pub const MAX_SPEED: f32 = 1_000.0;
    /// Maximum string length for prop and scene names
    pub const MAX_NAME_LEN: usize = 64;
}

/// Error type for scene loading
#[derive(Debug)]
pub enum SceneError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::SerializeError(e)
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
            SceneError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            SceneError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

// ==================== Scene Sections ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub spawn: Vec3,
    pub walk_speed: f32,
    pub sprint_factor: f32,
    /// Visual cube edge length; the host draws with it.
    pub scale: f32,
    pub color: Color,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::new(1.0, -0.4, 2.0),
            walk_speed: 1.0,
            sprint_factor: 2.0,
            scale: 0.1,
            color: Color::rgb(0.5, 0.0, 0.5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrollerConfig {
    pub spawn: Vec3,
    pub speed: f32,
    pub tolerance: f32,
    pub mode: PatrolMode,
    pub routes: Vec<PatrolRoute>,
    pub scale: f32,
    pub color: Color,
}

impl Default for PatrollerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::new(-1.5, -0.2, 0.0),
            speed: 1.0,
            tolerance: 0.1,
            mode: PatrolMode::PingPong,
            routes: vec![
                PatrolRoute::new(vec![Vec2::new(-1.5, 0.0), Vec2::new(0.0, 0.5)]),
                PatrolRoute::new(vec![Vec2::new(0.0, 0.5), Vec2::new(0.0, -1.0)]),
            ],
            scale: 0.1,
            color: Color::rgb(1.0, 0.5, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrophyConfig {
    pub positions: Vec<Vec3>,
    pub pickup_radius: f32,
    /// Radius of the generated sphere mesh.
    pub sphere_radius: f32,
    pub color: Color,
}

impl Default for TrophyConfig {
    fn default() -> Self {
        Self {
            positions: vec![
                Vec3::new(-1.5, -0.4, 0.0),
                Vec3::new(0.0, -0.4, 0.5),
                Vec3::new(2.5, -0.4, 0.2),
                Vec3::new(1.5, -0.4, 2.0),
                Vec3::new(0.0, -0.4, 2.0),
                Vec3::new(0.0, -0.4, -1.0),
            ],
            pickup_radius: 0.3,
            sphere_radius: 0.05,
            color: Color::rgb(1.0, 0.843, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub outside: LookAt,
    pub inside: LookAt,
    pub projection: Projection,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            outside: LookAt::new(
                Vec3::new(1.0, 0.0, 3.5),
                Vec3::new(0.5, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ),
            inside: LookAt::new(
                Vec3::new(-0.5, 1.0, 1.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ),
            projection: Projection::default(),
        }
    }
}

/// A complete scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub name: String,
    pub player: PlayerConfig,
    pub patroller: PatrollerConfig,
    pub trophies: TrophyConfig,
    pub door: Door,
    pub cameras: CameraConfig,
    pub layout: SceneLayout,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "yard".to_string(),
            player: PlayerConfig::default(),
            patroller: PatrollerConfig::default(),
            trophies: TrophyConfig::default(),
            door: Door::default(),
            cameras: CameraConfig::default(),
            layout: default_layout(),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        validate_scene(self)
    }
}

/// The demo yard: gray ground, red house with a blue door, and the gray
/// interior shell with its green decor sphere.
fn default_layout() -> SceneLayout {
    let wall_gray = Color::rgb(0.8, 0.8, 0.8);
    SceneLayout {
        exterior: vec![
            Prop::new(
                "ground",
                PropShape::Plane,
                Vec3::new(0.0, -0.5, 0.0),
                Vec3::new(10.0, 0.1, 10.0),
                Color::rgb(0.5, 0.5, 0.5),
            ),
            Prop::new(
                "house",
                PropShape::Cube,
                Vec3::new(1.5, 0.0, 0.5),
                Vec3::new(1.0, 1.0, 1.0),
                Color::rgb(1.0, 0.0, 0.0),
            ),
            Prop::new(
                "door",
                PropShape::Cube,
                Vec3::new(1.3, 0.05, 0.01),
                Vec3::new(0.2, 1.0, 0.02),
                Color::rgb(0.0, 0.0, 1.0),
            ),
        ],
        interior: vec![
            Prop::new(
                "floor",
                PropShape::Cube,
                Vec3::new(0.0, -0.5, 0.0),
                Vec3::new(1.0, 0.02, 1.0),
                wall_gray,
            ),
            Prop::new(
                "back wall",
                PropShape::Cube,
                Vec3::new(0.0, 0.0, -0.5),
                Vec3::new(1.0, 1.0, 0.02),
                wall_gray,
            ),
            Prop::new(
                "right wall",
                PropShape::Cube,
                Vec3::new(0.5, 0.0, 0.0),
                Vec3::new(0.02, 1.0, 1.0),
                wall_gray,
            ),
            Prop::new(
                "decor sphere",
                PropShape::Sphere,
                Vec3::new(0.35, -0.4, -0.3),
                Vec3::new(0.05, 0.05, 0.05),
                Color::rgb(0.0, 1.0, 0.0),
            ),
        ],
    }
}

// ==================== Validation ====================

/// Check if a float is valid (not NaN or Inf)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_vec3(v: Vec3, context: &str) -> Result<(), String> {
    if !is_valid_float(v.x) || !is_valid_float(v.y) || !is_valid_float(v.z) {
        return Err(format!("{}: invalid vector ({}, {}, {})", context, v.x, v.y, v.z));
    }
    Ok(())
}

fn validate_vec2(v: Vec2, context: &str) -> Result<(), String> {
    if !is_valid_float(v.x) || !is_valid_float(v.y) {
        return Err(format!("{}: invalid vector ({}, {})", context, v.x, v.y));
    }
    Ok(())
}

fn validate_positive(value: f32, max: f32, context: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(format!("{}: expected a value in (0, {}], got {}", context, max, value));
    }
    Ok(())
}

fn validate_name(name: &str, context: &str) -> Result<(), String> {
    if name.len() > limits::MAX_NAME_LEN {
        return Err(format!(
            "{}: name too long ({} > {})",
            context,
            name.len(),
            limits::MAX_NAME_LEN
        ));
    }
    Ok(())
}

fn validate_color(color: &Color, context: &str) -> Result<(), String> {
    for (channel, value) in [("r", color.r), ("g", color.g), ("b", color.b), ("a", color.a)] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(format!("{}: color channel {} out of range: {}", context, channel, value));
        }
    }
    Ok(())
}

fn validate_prop(prop: &Prop, context: &str) -> Result<(), String> {
    validate_name(&prop.name, context)?;
    validate_vec3(prop.position, &format!("{} position", context))?;
    validate_vec3(prop.scale, &format!("{} scale", context))?;
    if prop.scale.x <= 0.0 || prop.scale.y <= 0.0 || prop.scale.z <= 0.0 {
        return Err(format!(
            "{}: scale must be positive ({}, {}, {})",
            context, prop.scale.x, prop.scale.y, prop.scale.z
        ));
    }
    validate_color(&prop.color, &format!("{} color", context))?;
    Ok(())
}

fn validate_look_at(look: &LookAt, context: &str) -> Result<(), String> {
    validate_vec3(look.eye, &format!("{} eye", context))?;
    validate_vec3(look.target, &format!("{} target", context))?;
    validate_vec3(look.up, &format!("{} up", context))?;
    if look.up.length() == 0.0 {
        return Err(format!("{}: up vector must not be zero", context));
    }
    if look.eye == look.target {
        return Err(format!("{}: eye and target coincide", context));
    }
    Ok(())
}

fn validate_projection(projection: &Projection, context: &str) -> Result<(), String> {
    let fov = projection.fov_y_degrees;
    if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
        return Err(format!("{}: fov must be in (0, 180), got {}", context, fov));
    }
    validate_positive(projection.aspect, limits::MAX_COORD, &format!("{} aspect", context))?;
    if !projection.z_near.is_finite()
        || !projection.z_far.is_finite()
        || projection.z_near <= 0.0
        || projection.z_far <= projection.z_near
    {
        return Err(format!(
            "{}: near/far planes invalid ({}, {})",
            context, projection.z_near, projection.z_far
        ));
    }
    Ok(())
}

fn validate_player(player: &PlayerConfig) -> Result<(), String> {
    validate_vec3(player.spawn, "player spawn")?;
    validate_positive(player.walk_speed, limits::MAX_SPEED, "player walk_speed")?;
    validate_positive(player.sprint_factor, limits::MAX_SPEED, "player sprint_factor")?;
    validate_positive(player.scale, limits::MAX_COORD, "player scale")?;
    validate_color(&player.color, "player color")?;
    Ok(())
}

fn validate_patroller(patroller: &PatrollerConfig) -> Result<(), String> {
    validate_vec3(patroller.spawn, "patroller spawn")?;
    validate_positive(patroller.speed, limits::MAX_SPEED, "patroller speed")?;
    if !patroller.tolerance.is_finite() || patroller.tolerance < 0.0 {
        return Err(format!("patroller tolerance must be non-negative, got {}", patroller.tolerance));
    }
    validate_positive(patroller.scale, limits::MAX_COORD, "patroller scale")?;
    validate_color(&patroller.color, "patroller color")?;

    if patroller.routes.len() > limits::MAX_ROUTES {
        return Err(format!(
            "too many routes ({} > {})",
            patroller.routes.len(),
            limits::MAX_ROUTES
        ));
    }
    for (i, route) in patroller.routes.iter().enumerate() {
        if route.points.len() > limits::MAX_WAYPOINTS {
            return Err(format!(
                "route[{}]: too many waypoints ({} > {})",
                i,
                route.points.len(),
                limits::MAX_WAYPOINTS
            ));
        }
        for (j, &point) in route.points.iter().enumerate() {
            validate_vec2(point, &format!("route[{}] waypoint[{}]", i, j))?;
        }
    }
    Ok(())
}

fn validate_trophies(trophies: &TrophyConfig) -> Result<(), String> {
    if trophies.positions.len() > limits::MAX_TROPHIES {
        return Err(format!(
            "too many trophies ({} > {})",
            trophies.positions.len(),
            limits::MAX_TROPHIES
        ));
    }
    for (i, &position) in trophies.positions.iter().enumerate() {
        validate_vec3(position, &format!("trophy[{}]", i))?;
    }
    validate_positive(trophies.pickup_radius, limits::MAX_COORD, "pickup_radius")?;
    validate_positive(trophies.sphere_radius, limits::MAX_COORD, "sphere_radius")?;
    validate_color(&trophies.color, "trophy color")?;
    Ok(())
}

fn validate_door(door: &Door) -> Result<(), String> {
    validate_vec3(door.position, "door position")?;
    validate_positive(door.radius, limits::MAX_COORD, "door radius")?;
    validate_vec3(door.inside_spawn, "door inside_spawn")?;
    validate_vec3(door.outside_spawn, "door outside_spawn")?;
    Ok(())
}

fn validate_layout(layout: &SceneLayout) -> Result<(), String> {
    for (list_name, props) in [("exterior", &layout.exterior), ("interior", &layout.interior)] {
        if props.len() > limits::MAX_PROPS {
            return Err(format!(
                "{}: too many props ({} > {})",
                list_name,
                props.len(),
                limits::MAX_PROPS
            ));
        }
        for (i, prop) in props.iter().enumerate() {
            validate_prop(prop, &format!("{} prop[{}]", list_name, i))?;
        }
    }
    Ok(())
}

/// Validate an entire scene
pub fn validate_scene(scene: &SceneConfig) -> Result<(), SceneError> {
    validate_name(&scene.name, "scene").map_err(SceneError::ValidationError)?;
    validate_player(&scene.player).map_err(SceneError::ValidationError)?;
    validate_patroller(&scene.patroller).map_err(SceneError::ValidationError)?;
    validate_trophies(&scene.trophies).map_err(SceneError::ValidationError)?;
    validate_door(&scene.door).map_err(SceneError::ValidationError)?;
    validate_look_at(&scene.cameras.outside, "outside camera").map_err(SceneError::ValidationError)?;
    validate_look_at(&scene.cameras.inside, "inside camera").map_err(SceneError::ValidationError)?;
    validate_projection(&scene.cameras.projection, "projection").map_err(SceneError::ValidationError)?;
    validate_layout(&scene.layout).map_err(SceneError::ValidationError)?;
    Ok(())
}

// ==================== Load / Save ====================

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneConfig, SceneError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let scene: SceneConfig = match ron::from_str(&contents) {
        Ok(scene) => scene,
        Err(e) => {
            error!("scene parse error in {}: {}", path.display(), e);
            return Err(e.into());
        }
    };

    validate_scene(&scene)?;
    Ok(scene)
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<SceneConfig, SceneError> {
    let scene: SceneConfig = ron::from_str(s)?;
    validate_scene(&scene)?;
    Ok(scene)
}

/// Serialize a scene to pretty RON
pub fn scene_to_string(scene: &SceneConfig) -> Result<String, SceneError> {
    validate_scene(scene)?;
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(scene, config)?)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &SceneConfig, path: P) -> Result<(), SceneError> {
    let ron_string = scene_to_string(scene)?;
    fs::write(path, ron_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_validates() {
        let scene = SceneConfig::default();
        assert!(scene.validate().is_ok());
        assert_eq!(scene.trophies.positions.len(), 6);
        assert_eq!(scene.patroller.routes.len(), 2);
    }

    #[test]
    fn test_empty_ron_is_the_default_scene() {
        let scene = load_scene_from_str("()").unwrap();
        assert_eq!(scene, SceneConfig::default());
    }

    #[test]
    fn test_partial_ron_overrides_one_section() {
        let scene = load_scene_from_str("(name: \"test yard\", player: (walk_speed: 3.0))").unwrap();
        assert_eq!(scene.name, "test yard");
        assert!((scene.player.walk_speed - 3.0).abs() < 0.001);
        // Unspecified fields fall back to defaults.
        assert_eq!(scene.player.spawn, Vec3::new(1.0, -0.4, 2.0));
        assert_eq!(scene.door, Door::default());
    }

    #[test]
    fn test_rejects_nan_spawn() {
        let mut scene = SceneConfig::default();
        scene.player.spawn.x = f32::NAN;
        assert!(matches!(scene.validate(), Err(SceneError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_zero_up_vector() {
        let mut scene = SceneConfig::default();
        scene.cameras.inside.up = Vec3::ZERO;
        assert!(matches!(scene.validate(), Err(SceneError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_nonpositive_pickup_radius() {
        let mut scene = SceneConfig::default();
        scene.trophies.pickup_radius = 0.0;
        assert!(scene.validate().is_err());

        scene.trophies.pickup_radius = -0.3;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_rejects_too_many_trophies() {
        let mut scene = SceneConfig::default();
        scene.trophies.positions = vec![Vec3::ZERO; limits::MAX_TROPHIES + 1];
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_planes() {
        let mut scene = SceneConfig::default();
        scene.cameras.projection.z_far = 0.05;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_ron() {
        assert!(matches!(
            load_scene_from_str("(name: "),
            Err(SceneError::ParseError(_))
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yard.ron");

        let scene = SceneConfig::default();
        save_scene(&scene, &path).unwrap();
        let loaded = load_scene(&path).unwrap();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_save_refuses_invalid_scene() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");

        let mut scene = SceneConfig::default();
        scene.door.radius = f32::INFINITY;
        assert!(save_scene(&scene, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_scene(dir.path().join("nope.ron"));
        assert!(matches!(result, Err(SceneError::IoError(_))));
    }

    #[test]
    fn test_bundled_scene_parses_and_validates() {
        let scene = load_scene_from_str(include_str!("../../scenes/yard.ron")).unwrap();
        assert_eq!(scene.name, "yard");
        assert_eq!(scene.trophies.positions.len(), 6);
        assert_eq!(scene.door.position, Vec3::new(1.3, -0.45, 0.01));
        assert_eq!(scene.patroller.mode, PatrolMode::PingPong);
        assert_eq!(scene.layout.exterior.len(), 3);
        assert_eq!(scene.layout.interior.len(), 4);
    }
}
