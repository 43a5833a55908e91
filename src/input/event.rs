/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// folds them into a per-frame [`FrameInput`](super::FrameInput).
///
/// # Example
///
/// ```
/// use flycam::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// input.handle_event(InputEvent::Key { key: "KeyW".into(), pressed: true });
/// input.handle_event(InputEvent::Scroll { delta: 1.0 });
/// let frame = input.take_frame(1.0 / 60.0);
/// assert_eq!(frame.scroll, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Relative pointer motion (raw device delta, e.g. with a grabbed
    /// cursor).
    MouseMotion {
        /// Horizontal delta in pixels.
        dx: f32,
        /// Vertical delta in pixels.
        dy: f32,
    },
    /// Scroll wheel (positive = narrow the field of view).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ArrowUp"`, `"Escape"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Window focus gained or lost.
    FocusChanged {
        /// Whether the window now has focus.
        focused: bool,
    },
}
