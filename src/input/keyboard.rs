use serde::{Deserialize, Serialize};

use crate::camera::Movement;

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// yaw_left = "ArrowLeft"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Translate forward while held.
    MoveForward,
    /// Translate backward while held.
    MoveBackward,
    /// Strafe left while held.
    StrafeLeft,
    /// Strafe right while held.
    StrafeRight,
    /// Tilt the view up while held.
    PitchUp,
    /// Tilt the view down while held.
    PitchDown,
    /// Turn left while held.
    YawLeft,
    /// Turn right while held.
    YawRight,
    /// Close the viewer.
    Exit,
}

impl KeyAction {
    /// Translation driven by this action, if any.
    #[must_use]
    pub fn movement(self) -> Option<Movement> {
        match self {
            Self::MoveForward => Some(Movement::Forward),
            Self::MoveBackward => Some(Movement::Backward),
            Self::StrafeLeft => Some(Movement::Left),
            Self::StrafeRight => Some(Movement::Right),
            _ => None,
        }
    }

    /// `(yaw, pitch)` sign pair for the key-rotation actions.
    #[must_use]
    pub fn rotation_sign(self) -> Option<(f32, f32)> {
        match self {
            Self::PitchUp => Some((0.0, -1.0)),
            Self::PitchDown => Some((0.0, 1.0)),
            Self::YawLeft => Some((-1.0, 0.0)),
            Self::YawRight => Some((1.0, 0.0)),
            _ => None,
        }
    }
}
