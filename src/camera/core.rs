use glam::{Mat4, Vec3};

use super::basis::Basis;
use super::orientation::Orientation;
use crate::options::{CameraOptions, ControlOptions};

/// Largest accepted pitch limit. Anything closer to 90° makes the basis
/// numerically unstable.
pub const MAX_PITCH_LIMIT: f32 = 89.9;

/// Translation directions relative to the camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Move against `direction`.
    Forward,
    /// Move along `direction`.
    Backward,
    /// Move against `right`.
    Left,
    /// Move along `right`.
    Right,
}

/// Bounds the camera enforces on its own mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    /// Smallest field of view in degrees.
    pub fov_min: f32,
    /// Largest field of view in degrees.
    pub fov_max: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            fov_min: 1.0,
            fov_max: 45.0,
            pitch_limit: 89.0,
        }
    }
}

impl CameraLimits {
    /// Normalize the bounds: non-finite values fall back to the defaults,
    /// the fov range is ordered and the pitch limit lies within
    /// `[0, MAX_PITCH_LIMIT]`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };
        let a = finite_or(self.fov_min, defaults.fov_min);
        let b = finite_or(self.fov_max, defaults.fov_max);
        Self {
            fov_min: a.min(b),
            fov_max: a.max(b),
            pitch_limit: finite_or(self.pitch_limit, defaults.pitch_limit)
                .clamp(0.0, MAX_PITCH_LIMIT),
        }
    }
}

impl From<&ControlOptions> for CameraLimits {
    fn from(controls: &ControlOptions) -> Self {
        Self {
            fov_min: controls.fov_min,
            fov_max: controls.fov_max,
            pitch_limit: controls.pitch_limit,
        }
        .sanitized()
    }
}

/// First-person perspective camera.
///
/// The basis (`direction`, `right`, `up`) is recomputed by every mutator,
/// so it always matches the current orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    orientation: Orientation,
    position: Vec3,
    fov: f32,
    speed: f32,
    basis: Basis,
    limits: CameraLimits,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Create a camera with the default limits (fov 1..45, pitch ±89).
    #[must_use]
    pub fn new(
        fov: f32,
        speed: f32,
        position: Vec3,
        orientation: Orientation,
    ) -> Self {
        Self::with_limits(
            fov,
            speed,
            position,
            orientation,
            CameraLimits::default(),
        )
    }

    /// Create a camera that enforces `limits`.
    #[must_use]
    pub fn with_limits(
        fov: f32,
        speed: f32,
        position: Vec3,
        orientation: Orientation,
        limits: CameraLimits,
    ) -> Self {
        let limits = limits.sanitized();
        let mut camera = Self {
            orientation,
            position,
            fov: fov.clamp(limits.fov_min, limits.fov_max),
            speed,
            basis: Basis {
                direction: Vec3::Z,
                right: Vec3::X,
                up: Vec3::Y,
            },
            limits,
            znear: 0.1,
            zfar: 100.0,
        };
        camera.orientation.pitch = camera.clamp_pitch(orientation.pitch);
        camera.update();
        camera
    }

    /// Build a camera from option sections.
    #[must_use]
    pub fn from_options(camera: &CameraOptions, controls: &ControlOptions) -> Self {
        let mut cam = Self::with_limits(
            camera.fov,
            camera.speed,
            Vec3::from_array(camera.position),
            Orientation::new(camera.yaw, camera.pitch, 0.0),
            CameraLimits::from(controls),
        );
        cam.znear = camera.znear;
        cam.zfar = camera.zfar;
        cam
    }

    fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(-self.limits.pitch_limit, self.limits.pitch_limit)
    }

    /// Recompute the basis from the orientation.
    ///
    /// Mutators already call this; calling it again is a no-op.
    pub fn update(&mut self) {
        match Basis::new(self.orientation.to_direction()) {
            Some(basis) => self.basis = basis,
            None => log::warn!(
                "degenerate camera orientation {:?}, keeping previous basis",
                self.orientation
            ),
        }
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Bounds enforced by the mutators.
    #[must_use]
    pub fn limits(&self) -> CameraLimits {
        self.limits
    }

    /// Current basis.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Unit look direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.basis.direction
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Replace the orientation. Pitch is clamped.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.orientation.pitch = self.clamp_pitch(orientation.pitch);
        self.update();
    }

    /// Teleport to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the field of view, clamped to the fov limits.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(self.limits.fov_min, self.limits.fov_max);
    }

    /// Set the movement speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Add yaw/pitch deltas in degrees. Pitch is clamped.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.orientation.yaw += delta_yaw;
        self.orientation.pitch =
            self.clamp_pitch(self.orientation.pitch + delta_pitch);
        self.update();
    }

    /// Narrow (positive offset) or widen (negative) the field of view.
    pub fn zoom(&mut self, y_offset: f32) {
        self.set_fov(self.fov - y_offset);
    }

    /// Move by `speed * dt` along the camera frame.
    pub fn translate(&mut self, movement: Movement, dt: f32) {
        let step = self.speed * dt;
        let offset = match movement {
            Movement::Forward => -self.basis.direction * step,
            Movement::Backward => self.basis.direction * step,
            Movement::Left => -self.basis.right * step,
            Movement::Right => self.basis.right * step,
        };
        self.position += offset;
    }

    /// World-to-camera transform: `R^T * translate(-position)` where the
    /// rows of `R^T` are `right`, `up`, `direction`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.basis.view_matrix(self.position)
    }

    /// View matrix as 16 column-major floats.
    #[must_use]
    pub fn view_cols(&self) -> [f32; 16] {
        self.view_matrix().to_cols_array()
    }

    /// OpenGL-style perspective projection for the current fov.
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), &ControlOptions::default())
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices.
pub struct CameraUniform {
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Projection matrix, column-major.
    pub proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fov: 45.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update(&mut self, camera: &Camera, aspect: f32) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.proj = camera.projection(aspect).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fov = camera.fov();
    }
}
