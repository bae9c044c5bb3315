//! Tick events
//!
//! The simulation reports what happened during a tick through typed
//! queues instead of return values threaded through every system. The
//! host reads them after `Yard::tick` (logging, sound, UI); the next
//! tick clears them.
//!
//! Example flow:
//! 1. Collect trigger fires → trophy sweep sends TrophyCollected
//! 2. Host reads the queue → logs the pickup, updates its HUD

use glam::Vec3;

use super::view::ViewMode;

/// A queue for events of a single type.
/// Events are collected during the tick and read by the host afterwards.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Event Types ====================

/// A trophy was removed from the scene by a collect trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrophyCollected {
    /// Where the trophy sat.
    pub position: Vec3,
}

/// The door was toggled and the player snapped to the matching spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorToggled {
    /// The mode that is now active.
    pub mode: ViewMode,
    /// Where the player ended up.
    pub player_position: Vec3,
}

/// The patroller came within tolerance of its target waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaypointReached {
    /// Index of the active route.
    pub route: usize,
    /// Index of the waypoint that was reached.
    pub waypoint: usize,
}

/// The patroller restarted on a different route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSwapped {
    /// Index of the newly active route.
    pub route: usize,
}

/// Container for all event queues in the simulation.
/// Cleared at the start of each tick, so between ticks it holds exactly
/// the events of the tick that just ran.
#[derive(Debug, Default)]
pub struct YardEvents {
    pub trophy_collected: EventQueue<TrophyCollected>,
    pub door_toggled: EventQueue<DoorToggled>,
    pub waypoint_reached: EventQueue<WaypointReached>,
    pub route_swapped: EventQueue<RouteSwapped>,
}

impl YardEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all queues
    pub fn clear_all(&mut self) {
        self.trophy_collected.clear();
        self.door_toggled.clear();
        self.waypoint_reached.clear();
        self.route_swapped.clear();
    }
}
