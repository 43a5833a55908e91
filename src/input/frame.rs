use std::collections::HashSet;

use glam::Vec2;

use super::keyboard::KeyAction;

/// Everything the camera controller needs to know about one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Accumulated cursor motion in pixels.
    pub cursor_delta: Vec2,
    /// Accumulated scroll in lines.
    pub scroll: f32,
    /// Actions whose keys are held down.
    pub held: HashSet<KeyAction>,
}

impl FrameInput {
    /// An empty frame lasting `dt` seconds.
    #[must_use]
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    /// Builder: mark `action` as held.
    #[must_use]
    pub fn with_held(mut self, action: KeyAction) -> Self {
        let _ = self.held.insert(action);
        self
    }

    /// Builder: set the cursor delta.
    #[must_use]
    pub fn with_cursor_delta(mut self, dx: f32, dy: f32) -> Self {
        self.cursor_delta = Vec2::new(dx, dy);
        self
    }

    /// Builder: set the scroll delta.
    #[must_use]
    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    /// Whether `action` is held this frame.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }
}
