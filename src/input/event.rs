use kurbo::{Point, Vec2};

/// Phase of a pointer gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerAction {
    /// Gesture start; selects the target.
    Down,
    /// Motion while pressed.
    Move,
    /// Gesture end.
    Up,
    /// Gesture aborted by the system or a retarget.
    Cancel,
}

/// A pointer event in some coordinate frame (container or child, depending on who holds it).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Gesture phase.
    pub action: PointerAction,
    /// Location in the current frame.
    pub position: Point,
}

impl PointerEvent {
    /// Construct an event.
    pub fn new(action: PointerAction, position: Point) -> Self {
        Self { action, position }
    }

    /// Down at `(x, y)`.
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Down, Point::new(x, y))
    }

    /// Move to `(x, y)`.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, Point::new(x, y))
    }

    /// Up at `(x, y)`.
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Up, Point::new(x, y))
    }

    /// Same event re-expressed in a frame whose origin sits at `origin`.
    pub fn translated(self, origin: Vec2) -> Self {
        Self {
            position: self.position - origin,
            ..self
        }
    }

    /// Same location, different phase.
    pub fn with_action(self, action: PointerAction) -> Self {
        Self { action, ..self }
    }

    /// Same phase, moved to `position`.
    pub fn at(self, position: Point) -> Self {
        Self { position, ..self }
    }

    /// `true` for `Up` and `Cancel`.
    pub fn ends_gesture(&self) -> bool {
        matches!(self.action, PointerAction::Up | PointerAction::Cancel)
    }
}
