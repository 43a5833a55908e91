//! Input handling: event types, the per-frame input context, and the
//! processor that folds raw window events into it.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame input context consumed by the camera controller.
pub mod frame;
/// Bindable camera actions.
pub mod keyboard;
/// Folds raw events into [`FrameInput`].
pub mod processor;

pub use event::InputEvent;
pub use frame::FrameInput;
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
