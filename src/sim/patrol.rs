//! Waypoint patrol
//!
//! A patroller walks the horizontal (XZ) plane toward its current
//! waypoint at fixed speed; the vertical coordinate is held constant.
//! Arrival is tested against the position at the start of the tick, so
//! an entity already within tolerance advances its target exactly once
//! per tick. A route either loops (wraps from the last waypoint back to
//! the first) or ping-pongs (walks the sequence forward, then back).
//!
//! A patroller can carry several routes and swap between them; swapping
//! restarts the new route from its first waypoint.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// How a route continues past its last waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PatrolMode {
    /// Wrap from the last waypoint back to the first.
    #[default]
    Loop,
    /// Walk the sequence forward, then backward, reversing at the ends.
    PingPong,
}

/// An ordered sequence of waypoints on the horizontal plane.
/// `Vec2::x` maps to world X, `Vec2::y` to world Z.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatrolRoute {
    pub points: Vec<Vec2>,
}

impl PatrolRoute {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Build a route from world positions, dropping the vertical
    /// coordinate.
    pub fn from_world_points(points: &[Vec3]) -> Self {
        Self {
            points: points.iter().map(|p| Vec2::new(p.x, p.z)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A waypoint the patroller reached this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// Index of the active route.
    pub route: usize,
    /// Index of the waypoint that was reached.
    pub waypoint: usize,
}

/// A route-following NPC.
#[derive(Debug, Clone, PartialEq)]
pub struct Patroller {
    pub position: Vec3,
    /// Units per second along the route.
    pub speed: f32,
    /// Distance below which the current waypoint counts as reached.
    pub tolerance: f32,
    pub mode: PatrolMode,
    routes: Vec<PatrolRoute>,
    active_route: usize,
    target: usize,
    forward: bool,
}

impl Patroller {
    pub fn new(
        position: Vec3,
        speed: f32,
        tolerance: f32,
        mode: PatrolMode,
        routes: Vec<PatrolRoute>,
    ) -> Self {
        Self {
            position,
            speed,
            tolerance,
            mode,
            routes,
            active_route: 0,
            target: 0,
            forward: true,
        }
    }

    /// The route currently being walked, if any.
    pub fn route(&self) -> Option<&PatrolRoute> {
        self.routes.get(self.active_route)
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn active_route(&self) -> usize {
        self.active_route
    }

    /// Index of the waypoint currently being walked toward.
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// Replace all routes with a single one and restart from its first
    /// waypoint. The patroller walks there from wherever it stands.
    pub fn set_route(&mut self, route: PatrolRoute) {
        self.routes = vec![route];
        self.active_route = 0;
        self.restart();
    }

    /// Cycle to the next route, restart it from its first waypoint, and
    /// snap there. Returns the newly active route index, or `None` when
    /// there is nothing to swap to.
    pub fn swap_route(&mut self) -> Option<usize> {
        if self.routes.len() < 2 {
            return None;
        }
        self.active_route = (self.active_route + 1) % self.routes.len();
        self.restart();
        if let Some(&start) = self.routes[self.active_route].points.first() {
            self.position.x = start.x;
            self.position.z = start.y;
        }
        Some(self.active_route)
    }

    fn restart(&mut self) {
        self.target = 0;
        self.forward = true;
    }

    /// Walk toward the current waypoint. Returns the waypoint reached
    /// this tick, if any. With no route or an empty one this is a no-op.
    pub fn update(&mut self, dt: f32) -> Option<Arrival> {
        let route = self.routes.get(self.active_route)?;
        let &target = route.points.get(self.target)?;

        let here = Vec2::new(self.position.x, self.position.z);
        let to_target = target - here;
        let distance = to_target.length();

        // A coincident source and target would normalize a zero vector;
        // hold position and let the arrival check advance the index.
        if distance > f32::EPSILON {
            let step = self.speed * dt * (to_target / distance);
            self.position.x += step.x;
            self.position.z += step.y;
        }

        if distance < self.tolerance {
            let reached = self.target;
            self.advance();
            return Some(Arrival { route: self.active_route, waypoint: reached });
        }
        None
    }

    fn advance(&mut self) {
        let Some(route) = self.routes.get(self.active_route) else {
            return;
        };
        let len = route.points.len();
        if len < 2 {
            // A single waypoint pins the patroller in both modes.
            return;
        }
        match self.mode {
            PatrolMode::Loop => self.target = (self.target + 1) % len,
            PatrolMode::PingPong => {
                if self.forward {
                    if self.target + 1 == len {
                        self.forward = false;
                        self.target -= 1;
                    } else {
                        self.target += 1;
                    }
                } else if self.target == 0 {
                    self.forward = true;
                    self.target = 1;
                } else {
                    self.target -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patroller(mode: PatrolMode, points: Vec<Vec2>) -> Patroller {
        let start = points
            .first()
            .map(|p| Vec3::new(p.x, -0.2, p.y))
            .unwrap_or(Vec3::new(0.0, -0.2, 0.0));
        Patroller::new(start, 1.0, 0.1, mode, vec![PatrolRoute::new(points)])
    }

    /// Run ticks until `count` arrivals happen, returning their waypoint
    /// indices. Panics if the patroller stops making progress.
    fn collect_arrivals(npc: &mut Patroller, count: usize) -> Vec<usize> {
        let mut reached = Vec::new();
        for _ in 0..100_000 {
            if let Some(arrival) = npc.update(0.01) {
                reached.push(arrival.waypoint);
                if reached.len() == count {
                    return reached;
                }
            }
        }
        panic!("patroller never reached {} waypoints, got {:?}", count, reached);
    }

    #[test]
    fn test_empty_route_is_noop() {
        let mut npc = patroller(PatrolMode::Loop, vec![]);
        let before = npc.position;
        assert_eq!(npc.update(1.0), None);
        assert_eq!(npc.position, before);
        assert_eq!(npc.target_index(), 0);
    }

    #[test]
    fn test_no_routes_is_noop() {
        let mut npc = Patroller::new(Vec3::ZERO, 1.0, 0.1, PatrolMode::Loop, vec![]);
        assert_eq!(npc.update(1.0), None);
        assert_eq!(npc.position, Vec3::ZERO);
    }

    #[test]
    fn test_walks_straight_toward_waypoint() {
        let mut npc = Patroller::new(
            Vec3::new(0.0, -0.2, 0.0),
            1.0,
            0.1,
            PatrolMode::Loop,
            vec![PatrolRoute::new(vec![Vec2::new(3.0, 0.0)])],
        );
        npc.update(0.5);
        assert!((npc.position.x - 0.5).abs() < 0.001);
        assert!((npc.position.z - 0.0).abs() < 0.001);
        assert!((npc.position.y - -0.2).abs() < 0.001);
    }

    #[test]
    fn test_loop_visits_waypoints_in_order_and_wraps() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        let mut npc = patroller(PatrolMode::Loop, square);
        let reached = collect_arrivals(&mut npc, 6);
        assert_eq!(reached, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_pingpong_reverses_at_ends() {
        let line = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)];
        let mut npc = patroller(PatrolMode::PingPong, line);
        let reached = collect_arrivals(&mut npc, 7);
        assert_eq!(reached, vec![0, 1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_two_point_pingpong_shuttles() {
        // The demo scene's shape: two endpoints walked back and forth.
        let pair = vec![Vec2::new(-1.5, 0.0), Vec2::new(0.0, 0.5)];
        let mut npc = patroller(PatrolMode::PingPong, pair);
        let reached = collect_arrivals(&mut npc, 5);
        assert_eq!(reached, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_within_tolerance_advances_exactly_once() {
        let mut npc = patroller(
            PatrolMode::Loop,
            vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)],
        );
        // Standing on waypoint 0: one tick, one advance.
        let arrival = npc.update(0.01);
        assert_eq!(arrival, Some(Arrival { route: 0, waypoint: 0 }));
        assert_eq!(npc.target_index(), 1);

        // Waypoint 1 is far away: no second advance.
        assert_eq!(npc.update(0.01), None);
        assert_eq!(npc.target_index(), 1);
    }

    #[test]
    fn test_zero_distance_produces_no_nan() {
        let mut npc = patroller(PatrolMode::Loop, vec![Vec2::new(0.0, 0.0)]);
        npc.update(1.0);
        assert!(npc.position.is_finite());
        assert_eq!(npc.position, Vec3::new(0.0, -0.2, 0.0));
    }

    #[test]
    fn test_single_waypoint_pins() {
        let mut npc = patroller(PatrolMode::PingPong, vec![Vec2::new(0.0, 0.0)]);
        for _ in 0..10 {
            npc.update(0.01);
            assert_eq!(npc.target_index(), 0);
        }
    }

    #[test]
    fn test_swap_route_restarts_and_snaps() {
        let first = PatrolRoute::new(vec![Vec2::new(-1.5, 0.0), Vec2::new(0.0, 0.5)]);
        let second = PatrolRoute::new(vec![Vec2::new(0.0, 0.5), Vec2::new(0.0, -1.0)]);
        let mut npc = Patroller::new(
            Vec3::new(-1.5, -0.2, 0.0),
            1.0,
            0.1,
            PatrolMode::PingPong,
            vec![first, second],
        );

        // Walk partway along route 0 first.
        for _ in 0..20 {
            npc.update(0.01);
        }

        assert_eq!(npc.swap_route(), Some(1));
        assert_eq!(npc.active_route(), 1);
        assert_eq!(npc.target_index(), 0);
        assert!((npc.position.x - 0.0).abs() < 0.001);
        assert!((npc.position.z - 0.5).abs() < 0.001);
        assert!((npc.position.y - -0.2).abs() < 0.001);

        assert_eq!(npc.swap_route(), Some(0));
        assert!((npc.position.x - -1.5).abs() < 0.001);
    }

    #[test]
    fn test_swap_with_single_route_does_nothing() {
        let mut npc = patroller(PatrolMode::Loop, vec![Vec2::new(1.0, 1.0)]);
        assert_eq!(npc.swap_route(), None);
        assert_eq!(npc.active_route(), 0);
    }

    #[test]
    fn test_set_route_replaces_without_snapping() {
        let mut npc = patroller(PatrolMode::Loop, vec![Vec2::new(5.0, 5.0)]);
        let before = npc.position;
        npc.set_route(PatrolRoute::from_world_points(&[
            Vec3::new(-3.0, 0.0, -3.0),
            Vec3::new(3.0, 0.0, 3.0),
        ]));
        assert_eq!(npc.position, before);
        assert_eq!(npc.route_count(), 1);
        assert_eq!(npc.route().map(|r| r.len()), Some(2));
        assert_eq!(npc.target_index(), 0);
    }
}
