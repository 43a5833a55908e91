//! Standalone fly-through window backed by winit.
//!
//! Keyboard, mouse and scroll input drive a [`Camera`]; the frame is
//! cleared to the configured colour and the window title reports the
//! camera state and frame rate.
//!
//! ```no_run
//! # use flycam::Viewer;
//! Viewer::builder().build().run().unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::{Camera, CameraController, CameraUniform},
    error::FlycamError,
    gpu::render_context::RenderContext,
    input::{InputEvent, InputProcessor},
    options::Options,
    util::FrameTiming,
};

/// Pixel-delta scroll (touchpads) is scaled down to roughly one line per
/// hundred pixels.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// How often the title bar status is refreshed.
const STATUS_INTERVAL: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding the options' title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window with a mouse-look fly camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Options the viewer will start with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or an exit key is pressed.
    ///
    /// # Errors
    ///
    /// [`FlycamError::Viewer`] if the event loop cannot be created or fails
    /// while running.
    pub fn run(self) -> Result<(), FlycamError> {
        let event_loop =
            EventLoop::new().map_err(|e| FlycamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp::new(self.options);
        event_loop
            .run_app(&mut app)
            .map_err(|e| FlycamError::Viewer(e.to_string()))
    }
}

/// Title bar status: camera pose, fov and frame timing.
fn status_line(title: &str, camera: &Camera, timing: &FrameTiming) -> String {
    let p = camera.position();
    let o = camera.orientation();
    format!(
        "{title} | pos ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1} fov {:.1} | {:.3} ms/frame ({:.1} FPS)",
        p.x,
        p.y,
        p.z,
        o.yaw,
        o.pitch,
        camera.fov(),
        timing.frame_ms(),
        timing.fps()
    )
}

/// Convert a winit scroll delta into lines.
fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    options: Options,
    camera: Camera,
    controller: CameraController,
    uniform: CameraUniform,
    input: InputProcessor,
    timing: FrameTiming,
    last_status: Instant,
    /// Whether relative device motion is driving the camera.
    cursor_grabbed: bool,
    focused: bool,
}

impl ViewerApp {
    fn new(options: Options) -> Self {
        let camera = Camera::from_options(&options.camera, &options.controls);
        let controller = CameraController::from(&options.controls);
        let input = InputProcessor::with_key_bindings(options.keybindings.clone());
        let timing = FrameTiming::new(options.window.target_fps);
        Self {
            window: None,
            context: None,
            options,
            camera,
            controller,
            uniform: CameraUniform::new(),
            input,
            timing,
            last_status: Instant::now(),
            cursor_grabbed: false,
            focused: false,
        }
    }

    /// Lock and hide the cursor, falling back to confinement where locking
    /// is unsupported.
    fn set_cursor_grab(&mut self, grab: bool) {
        let Some(window) = &self.window else {
            return;
        };
        if !self.options.window.grab_cursor {
            return;
        }
        if grab {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            match grabbed {
                Ok(()) => {
                    window.set_cursor_visible(false);
                    self.cursor_grabbed = true;
                    log::debug!("cursor grabbed");
                }
                Err(e) => {
                    log::warn!("cursor grab unavailable, using cursor positions: {e}");
                    self.cursor_grabbed = false;
                }
            }
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
            self.cursor_grabbed = false;
            log::debug!("cursor released");
        }
    }

    fn redraw(&mut self) {
        if !self.timing.should_render() {
            return;
        }
        let dt = self.timing.tick();
        let frame = self.input.take_frame(dt);
        let _ = self.controller.apply(&mut self.camera, &frame);

        let Some(context) = &mut self.context else {
            return;
        };
        self.uniform.update(&self.camera, context.aspect());

        match context.clear_frame(self.options.window.clear_color) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                if let Some(w) = &self.window {
                    let inner = w.inner_size();
                    context.resize(inner.width, inner.height);
                }
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        let now = Instant::now();
        if now.duration_since(self.last_status) >= STATUS_INTERVAL {
            if let Some(w) = &self.window {
                w.set_title(&status_line(
                    &self.options.window.title,
                    &self.camera,
                    &self.timing,
                ));
            }
            log::debug!("view matrix {:?}", self.uniform.view);
            self.last_status = now;
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.options.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width, inner.height),
        ))
        .map_err(FlycamError::from)
        {
            Ok(c) => c,
            Err(e) => {
                log::error!("{e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
        self.focused = true;
        self.set_cursor_grab(true);
        log::info!(
            "viewer started: camera at {:?}, fov {}",
            self.camera.position(),
            self.camera.fov()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    context.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(focused) => {
                self.focused = focused;
                self.input.handle_event(InputEvent::FocusChanged { focused });
                self.set_cursor_grab(focused);
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if !self.cursor_grabbed {
                    self.input.handle_event(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.input.handle_event(InputEvent::Scroll {
                    delta: scroll_lines(delta),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.input.handle_event(InputEvent::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                });
                if self.input.exit_requested() {
                    event_loop.exit();
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.cursor_grabbed && self.focused {
                self.input.handle_event(InputEvent::MouseMotion {
                    dx: dx as f32,
                    dy: dy as f32,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;

    use super::*;

    #[test]
    fn builder_title_overrides_options() {
        let viewer = Viewer::builder()
            .with_options(Options::default())
            .with_title("crates")
            .build();
        assert_eq!(viewer.options().window.title, "crates");
    }

    #[test]
    fn status_line_reports_camera_state() {
        let camera = Camera::default();
        let timing = FrameTiming::new(0);
        let line = status_line("flycam", &camera, &timing);
        assert!(line.starts_with("flycam | pos (0.00, 0.00, 10.00)"));
        assert!(line.contains("yaw 90.0"));
        assert!(line.contains("fov 45.0"));
        assert!(line.contains("FPS"));
    }

    #[test]
    fn pixel_scroll_is_scaled_to_lines() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        let pixels =
            MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 300.0));
        assert!((scroll_lines(pixels) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn app_starts_from_options() {
        let mut options = Options::default();
        options.camera.speed = 25.0;
        options.controls.mouse_sensitivity = 0.1;
        let app = ViewerApp::new(options);
        assert_eq!(app.camera.speed(), 25.0);
        assert_eq!(app.controller.mouse_sensitivity, 0.1);
        assert!(app.window.is_none());
    }
}
