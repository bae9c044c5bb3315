//! Patrol route files
//!
//! A plain-text format for hand-editing patrol paths: one waypoint per
//! line as `x y z`, whitespace-separated. Blank lines are ignored, and
//! lines that do not parse are skipped with a warning so a half-edited
//! file still yields its good waypoints. Tokens past the third are
//! ignored.

use std::fs;
use std::path::Path;

use glam::Vec3;
use log::warn;

/// Parse route text into waypoints, skipping malformed lines.
pub fn parse_route(text: &str) -> Vec<Vec3> {
    let mut points = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(point) => points.push(point),
            None => warn!("skipping malformed waypoint on line {}: {:?}", number + 1, line),
        }
    }
    points
}

/// Load a route file. Unreadable files are an error; see [`parse_route`]
/// for how individual lines are handled.
pub fn load_route<P: AsRef<Path>>(path: P) -> Result<Vec<Vec3>, std::io::Error> {
    Ok(parse_route(&fs::read_to_string(path)?))
}

fn parse_line(line: &str) -> Option<Vec3> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some(Vec3::new(x, y, z))
}
