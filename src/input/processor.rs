//! Folds raw platform events into per-frame camera input.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! held keys, accumulated deltas) and the key-binding map. It is the only
//! thing that sits between raw window events and the
//! [`CameraController`](crate::camera::CameraController).

use std::collections::HashSet;

use glam::Vec2;

use super::event::InputEvent;
use super::frame::FrameInput;
use super::keyboard::KeyAction;
use crate::options::KeybindingOptions;

/// Accumulates [`InputEvent`]s between frames.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input.handle_event(event);
///
/// // Once per redraw:
/// let frame = input.take_frame(timing.tick());
/// controller.apply(&mut camera, &frame);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Last absolute cursor position; `None` until the first sample.
    last_cursor: Option<Vec2>,
    /// Cursor motion since the last `take_frame`.
    cursor_delta: Vec2,
    /// Scroll since the last `take_frame`.
    scroll: f32,
    /// Actions whose keys are currently down.
    held: HashSet<KeyAction>,
    /// Set once an [`KeyAction::Exit`] key is pressed.
    exit_requested: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held keys are released.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held.clear();
    }

    /// Whether an exit key has been pressed.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Process a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseMotion { dx, dy } => {
                self.cursor_delta += Vec2::new(dx, dy);
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::Key { key, pressed } => {
                self.handle_key(&key, pressed);
            }
            InputEvent::FocusChanged { focused } => {
                // Re-anchor the cursor on the next sample either way so the
                // jump across the focus change is not read as motion.
                self.last_cursor = None;
                if !focused {
                    self.held.clear();
                }
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if let Some(last) = self.last_cursor {
            self.cursor_delta += pos - last;
        }
        self.last_cursor = Some(pos);
    }

    fn handle_key(&mut self, key: &str, pressed: bool) {
        let Some(action) = self.key_bindings.lookup(key) else {
            return;
        };
        if pressed {
            if action == KeyAction::Exit {
                log::info!("exit requested via {key}");
                self.exit_requested = true;
            }
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
    }

    /// Hand out the input gathered since the previous call and reset the
    /// deltas. Held keys carry over.
    pub fn take_frame(&mut self, dt: f32) -> FrameInput {
        FrameInput {
            dt,
            cursor_delta: std::mem::take(&mut self.cursor_delta),
            scroll: std::mem::take(&mut self.scroll),
            held: self.held.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: key.into(),
            pressed,
        }
    }

    #[test]
    fn first_cursor_sample_only_anchors() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert_eq!(input.take_frame(0.016).cursor_delta, Vec2::ZERO);

        input.handle_event(InputEvent::CursorMoved { x: 410.0, y: 295.0 });
        input.handle_event(InputEvent::CursorMoved { x: 415.0, y: 297.0 });
        assert_eq!(input.take_frame(0.016).cursor_delta, Vec2::new(15.0, -3.0));
        assert_eq!(input.take_frame(0.016).cursor_delta, Vec2::ZERO);
    }

    #[test]
    fn focus_change_reanchors_cursor_and_drops_keys() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        input.handle_event(key("KeyW", true));
        input.handle_event(InputEvent::FocusChanged { focused: false });
        assert!(!input.is_held(KeyAction::MoveForward));

        input.handle_event(InputEvent::FocusChanged { focused: true });
        input.handle_event(InputEvent::CursorMoved { x: 900.0, y: 700.0 });
        assert_eq!(input.take_frame(0.016).cursor_delta, Vec2::ZERO);
    }

    #[test]
    fn held_keys_persist_across_frames() {
        let mut input = InputProcessor::new();
        input.handle_event(key("KeyW", true));
        input.handle_event(key("KeyD", true));
        let frame = input.take_frame(0.016);
        assert!(frame.is_held(KeyAction::MoveForward));
        assert!(frame.is_held(KeyAction::StrafeRight));

        input.handle_event(key("KeyW", false));
        let frame = input.take_frame(0.016);
        assert!(!frame.is_held(KeyAction::MoveForward));
        assert!(frame.is_held(KeyAction::StrafeRight));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputProcessor::new();
        input.handle_event(key("KeyZ", true));
        assert!(input.take_frame(0.016).held.is_empty());
    }

    #[test]
    fn scroll_and_motion_accumulate() {
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::Scroll { delta: 1.0 });
        input.handle_event(InputEvent::Scroll { delta: 2.5 });
        input.handle_event(InputEvent::MouseMotion { dx: 3.0, dy: -1.0 });
        input.handle_event(InputEvent::MouseMotion { dx: 1.0, dy: 4.0 });
        let frame = input.take_frame(0.5);
        assert_eq!(frame.dt, 0.5);
        assert_eq!(frame.scroll, 3.5);
        assert_eq!(frame.cursor_delta, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn escape_requests_exit() {
        let mut input = InputProcessor::new();
        assert!(!input.exit_requested());
        input.handle_event(key("Escape", true));
        assert!(input.exit_requested());
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "ArrowUp");
        let mut input = InputProcessor::with_key_bindings(bindings);
        input.handle_event(key("ArrowUp", true));
        assert!(input.is_held(KeyAction::MoveForward));
        assert!(!input.is_held(KeyAction::PitchUp));
    }

    #[test]
    fn replacing_bindings_releases_held_keys() {
        let mut input = InputProcessor::new();
        input.handle_event(key("KeyW", true));
        input.handle_event(key("ArrowLeft", true));
        assert!(input.is_held(KeyAction::MoveForward));

        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "KeyI");
        input.set_key_bindings(bindings);
        assert!(!input.is_held(KeyAction::MoveForward));
        assert!(!input.is_held(KeyAction::YawLeft));
        assert_eq!(input.key_bindings().key_for(KeyAction::MoveForward), Some("KeyI"));

        input.handle_event(key("KeyW", true));
        assert!(!input.is_held(KeyAction::MoveForward));
        input.handle_event(key("KeyI", true));
        assert!(input.take_frame(0.016).is_held(KeyAction::MoveForward));
    }
}
