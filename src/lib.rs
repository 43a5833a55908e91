// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! First-person camera model for real-time 3D viewers.
//!
//! Flycam turns yaw/pitch angles into a look direction, derives an
//! orthonormal right/up/direction frame and composes the view matrix a
//! render loop feeds to its shaders. Keyboard, mouse and scroll input is
//! folded into a per-frame context and applied by a controller; the camera
//! clamps pitch and field of view itself, so its frame is never stale or
//! degenerate.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position, orientation, fov and the view matrix
//! - [`camera::CameraController`] - applies a [`input::FrameInput`]
//! - [`input::InputProcessor`] - folds raw events into frame input
//! - [`options::Options`] - TOML-backed configuration and presets
//!
//! ```
//! use flycam::camera::{Camera, Movement, Orientation};
//! use glam::Vec3;
//!
//! let mut camera = Camera::new(
//!     45.0,
//!     25.0,
//!     Vec3::new(0.0, 0.0, 10.0),
//!     Orientation::new(90.0, 0.0, 0.0),
//! );
//! camera.translate(Movement::Forward, 0.1);
//! camera.zoom(50.0);
//! assert_eq!(camera.fov(), 1.0);
//! let view: [f32; 16] = camera.view_cols();
//! assert_eq!(view.len(), 16);
//! ```

pub mod camera;
pub mod error;
#[cfg(feature = "viewer")]
pub mod gpu;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, CameraController, Orientation};
pub use error::FlycamError;
pub use input::{FrameInput, InputEvent, InputProcessor};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
