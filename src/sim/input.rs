//! Action definitions and input snapshots
//!
//! The host polls raw key state every tick (level-triggered), so trigger
//! actions would re-fire on every tick while held. The tracker owns the
//! debounce: it compares the current held set against the previous
//! tick's and derives just-pressed flags. Systems then ask the snapshot
//! either "is this held" (movement, sprint) or "was this just pressed"
//! (collect, door toggle, route swap).

/// All actions the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Sprint,

    // Triggers (edge-detected)
    Collect,
    ToggleDoor,
    SwapRoute,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Sprint,
        Action::Collect,
        Action::ToggleDoor,
        Action::SwapRoute,
    ];

    pub const COUNT: usize = Self::ALL.len();

    fn index(self) -> usize {
        self as usize
    }
}

/// Which actions are active, with no press/held distinction.
/// The host fills one of these from raw key state each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    active: [bool; Action::COUNT],
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, action: Action) {
        self.active[action.index()] = true;
    }

    pub fn set(&mut self, action: Action, active: bool) {
        self.active[action.index()] = active;
    }

    pub fn contains(&self, action: Action) -> bool {
        self.active[action.index()]
    }
}

/// Per-tick input view: what is held now, and what went down this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    held: ActionSet,
    pressed: ActionSet,
}

impl InputSnapshot {
    /// True while the action's key is down. Use for movement.
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(action)
    }

    /// True only on the tick the action went from up to down. Use for
    /// triggers.
    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    /// Snapshot for the first tick of a press: `actions` are held and
    /// just-pressed. Useful for scripted hosts.
    pub fn tap(actions: &[Action]) -> Self {
        let mut set = ActionSet::new();
        for &action in actions {
            set.insert(action);
        }
        Self { held: set, pressed: set }
    }

    /// Snapshot for a continued press: `actions` are held but not
    /// just-pressed.
    pub fn hold(actions: &[Action]) -> Self {
        let mut held = ActionSet::new();
        for &action in actions {
            held.insert(action);
        }
        Self { held, pressed: ActionSet::new() }
    }
}

/// Turns per-tick held sets into snapshots with edge-detected triggers.
#[derive(Debug, Default)]
pub struct InputTracker {
    previous: ActionSet,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this tick's held set and produce the snapshot. An action
    /// counts as just-pressed when it is held now but was not held on
    /// the previous call.
    pub fn advance(&mut self, held: ActionSet) -> InputSnapshot {
        let mut pressed = ActionSet::new();
        for action in Action::ALL {
            if held.contains(action) && !self.previous.contains(action) {
                pressed.insert(action);
            }
        }
        self.previous = held;
        InputSnapshot { held, pressed }
    }
}
