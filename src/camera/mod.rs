//! First-person camera model.
//!
//! Converts yaw/pitch angles into a look direction, derives the
//! right/up/direction frame and composes the view matrix. Input is applied
//! through the [`CameraController`].

/// Orthonormal camera frame and view-matrix composition.
pub mod basis;
/// Applies per-frame input to a camera.
pub mod controller;
/// Camera struct and GPU uniform type.
pub mod core;
/// Euler-angle orientation and its direction vector.
pub mod orientation;

pub use basis::{Basis, WORLD_UP};
pub use controller::CameraController;
pub use self::core::{Camera, CameraLimits, CameraUniform, Movement};
pub use orientation::Orientation;
