use super::core::Camera;
use crate::input::FrameInput;
use crate::options::ControlOptions;

/// Applies per-frame input to a [`Camera`].
///
/// Cursor motion turns the view, held movement keys translate it by
/// `speed * dt`, held rotation keys turn it at `key_rotation_speed`
/// degrees per second, and scroll zooms. The camera clamps the results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    /// Degrees of yaw/pitch per pixel of cursor motion.
    pub mouse_sensitivity: f32,
    /// Degrees per second for the rotation key actions.
    pub key_rotation_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from(&ControlOptions::default())
    }
}

impl From<&ControlOptions> for CameraController {
    fn from(controls: &ControlOptions) -> Self {
        Self {
            mouse_sensitivity: controls.mouse_sensitivity,
            key_rotation_speed: controls.key_rotation_speed,
        }
    }
}

impl CameraController {
    /// Apply one frame of input. Returns `true` if the camera changed.
    pub fn apply(&self, camera: &mut Camera, frame: &FrameInput) -> bool {
        let before = (camera.position(), camera.orientation(), camera.fov());

        let look = frame.cursor_delta * self.mouse_sensitivity;
        if look.x != 0.0 || look.y != 0.0 {
            camera.rotate(look.x, look.y);
        }

        for movement in frame.held.iter().filter_map(|a| a.movement()) {
            camera.translate(movement, frame.dt);
        }

        let step = self.key_rotation_speed * frame.dt;
        let (yaw, pitch) = frame
            .held
            .iter()
            .filter_map(|a| a.rotation_sign())
            .fold((0.0, 0.0), |(y, p), (sy, sp)| (y + sy * step, p + sp * step));
        if yaw != 0.0 || pitch != 0.0 {
            camera.rotate(yaw, pitch);
        }

        if frame.scroll != 0.0 {
            camera.zoom(frame.scroll);
        }

        let changed =
            before != (camera.position(), camera.orientation(), camera.fov());
        if changed {
            log::trace!(
                "camera at {:?} yaw {:.1} pitch {:.1} fov {:.1}",
                camera.position(),
                camera.orientation().yaw,
                camera.orientation().pitch,
                camera.fov()
            );
        }
        changed
    }
}
