//! Standalone input monitor window backed by winit.
//!
//! Routes the window's events through a [`WinitInputWindow`] into a
//! [`LegacyInputDriver`] and logs the polled device state.
//!
//! ```no_run
//! # use legacy_input::Viewer;
//! Viewer::builder()
//!     .with_title("Input monitor")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::InputError,
    input::{
        InputDriver, JoystickDriver, KeyboardDriver, LegacyInputDriver,
        LegacyJoystickDriver, MouseDriver, WinitInputWindow,
    },
    options::{Options, ViewerOptions},
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.viewer.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window that reports what the legacy input driver sees.
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

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Viewer`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run(self) -> Result<(), InputError> {
        let event_loop =
            EventLoop::new().map_err(|e| InputError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let input = WinitInputWindow::new();
        let driver = LegacyInputDriver::with_options(
            Some(&input),
            &self.options.devices,
            LegacyJoystickDriver::new(),
        )?;

        let mut app = ViewerApp {
            window: None,
            input: &input,
            driver,
            options: self.options.viewer,
            last_summary: String::new(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| InputError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp<'a> {
    window: Option<Window>,
    input: &'a WinitInputWindow,
    driver: LegacyInputDriver<'a, WinitInputWindow>,
    options: ViewerOptions,
    last_summary: String,
}

impl ViewerApp<'_> {
    /// One-line description of every device the driver reports.
    fn state_summary(&self) -> String {
        let mut parts: Vec<String> = self
            .driver
            .mouse()
            .iter()
            .map(|m| m.state().to_string())
            .collect();
        parts.extend(
            self.driver.keyboard().iter().map(|k| k.state().to_string()),
        );
        parts.push(format!("joysticks={}", self.driver.joysticks().len()));
        parts.join(" | ")
    }

    fn poll_and_log(&mut self) {
        self.driver.poll();
        if !self.options.log_state {
            return;
        }
        let summary = self.state_summary();
        if summary != self.last_summary {
            log::info!("{summary}");
            self.last_summary = summary;
        }
    }
}

impl ApplicationHandler for ViewerApp<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.options.title.as_str())
            .with_inner_size(LogicalSize::new(
                self.options.width,
                self.options.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.driver.dispose();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.poll_and_log(),
            other => {
                if self.input.handle_window_event(&other) {
                    if let Some(w) = &self.window {
                        w.request_redraw();
                    }
                }
            }
        }
    }
}
