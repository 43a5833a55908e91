use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera pose and projection parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Initial world-space position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees.
    #[schemars(skip)]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov: 45.0,
            speed: 5.0,
            position: [0.0, 0.0, 10.0],
            yaw: 90.0,
            pitch: 0.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
