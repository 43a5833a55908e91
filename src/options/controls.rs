use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Input sensitivities and the bounds the camera enforces.
pub struct ControlOptions {
    /// Degrees of yaw/pitch per pixel of cursor motion.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Degrees per second for the keyboard rotation actions.
    #[schemars(title = "Key Rotation Speed", range(min = 10.0, max = 360.0), extend("step" = 5.0))]
    pub key_rotation_speed: f32,
    /// Smallest field of view reachable by zooming.
    #[schemars(skip)]
    pub fov_min: f32,
    /// Largest field of view reachable by zooming.
    #[schemars(skip)]
    pub fov_max: f32,
    /// Pitch is clamped to `±pitch_limit` degrees.
    #[schemars(skip)]
    pub pitch_limit: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.05,
            key_rotation_speed: 120.0,
            fov_min: 1.0,
            fov_max: 45.0,
            pitch_limit: 89.0,
        }
    }
}
