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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! Legacy polled input devices driven by window events.
//!
//! Code written against a polling input model (call `poll`, then read
//! mouse and keyboard records) can run on top of a push-based window event
//! stream. [`LegacyInputDriver`] subscribes to a window's mouse, keyboard
//! and focus notifications and keeps one [`MouseDevice`] and one
//! [`KeyboardDevice`] current. Joystick queries are forwarded to a
//! [`JoystickDriver`] collaborator.
//!
//! # Key entry points
//!
//! - [`input::LegacyInputDriver`] - the driver
//! - [`input::InputWindow`] - what a window must provide
//! - [`input::EventWindow`] - an in-process window event dispatcher
//! - [`options::Options`] - TOML configuration (device labels, viewer)
//!
//! With the `viewer` feature, `input::WinitInputWindow` feeds the driver
//! from a winit event loop and `Viewer` opens a monitor window.
//!
//! Everything is single-threaded: device records are shared through `Rc`,
//! so the driver cannot leave the thread that delivers window events.

pub mod error;
pub mod input;
pub mod options;
#[cfg(feature = "viewer")]
mod viewer;

pub use error::InputError;
pub use input::{
    DeviceCell, InputDriver, JoystickDevice, JoystickDriver, KeyboardDevice,
    KeyboardDriver, LegacyInputDriver, MouseDevice, MouseDriver,
};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
