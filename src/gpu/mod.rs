//! GPU resource management for the viewer.
//!
//! Only device/surface setup and a clear-and-present pass; drawing geometry
//! is left to the embedding application.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
