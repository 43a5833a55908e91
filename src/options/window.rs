use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Viewer window settings.
pub struct WindowOptions {
    /// Window title prefix.
    #[schemars(skip)]
    pub title: String,
    /// Initial inner width in logical pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Initial inner height in logical pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Background colour (linear RGBA).
    #[schemars(title = "Clear Color")]
    pub clear_color: [f32; 4],
    /// Lock and hide the cursor while the window has focus.
    #[schemars(title = "Grab Cursor")]
    pub grab_cursor: bool,
    /// Frame cap (0 = unlimited).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "flycam".into(),
            width: 800,
            height: 600,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            grab_cursor: true,
            target_fps: 0,
        }
    }
}
