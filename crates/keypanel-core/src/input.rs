use crate::Vec2;

/// Opaque identifier for one finger, stable across the touch's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

/// One touch sample in the keyboard's coordinate space.
#[derive(Clone, Copy, Debug)]
pub struct Touch {
    pub id: TouchId,
    pub position: Vec2,
}

impl Touch {
    pub fn new(id: TouchId, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// Platform touch-phase tag, for hosts that feed a single dispatch entry
/// point rather than calling the per-phase methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}
