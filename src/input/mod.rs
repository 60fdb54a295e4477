//! Input handling: window event types, device state records, and the
//! legacy driver that keeps those records current from window events.

/// Shared device record handles.
mod device;
/// Legacy polled driver and its capability traits.
pub mod driver;
/// Platform-agnostic input events.
pub mod event;
/// Joystick device records.
mod joystick;
/// Keyboard device records.
mod keyboard;
/// Mouse device records.
mod mouse;
/// winit event translation.
#[cfg(feature = "viewer")]
pub mod platform;
/// Window subscription contract and dispatcher.
pub mod window;

pub use device::DeviceCell;
pub use driver::{
    InputDriver, JoystickDriver, KeyboardDriver, LegacyInputDriver,
    LegacyJoystickDriver, MouseDriver,
};
pub use event::{
    EventKind, Key, KeyEvent, KeyModifiers, MouseButton, WindowEvent,
};
pub use joystick::JoystickDevice;
pub use keyboard::KeyboardDevice;
pub use mouse::MouseDevice;
#[cfg(feature = "viewer")]
pub use platform::WinitInputWindow;
pub use window::{
    EventHandler, EventWindow, InputWindow, SubscriptionId, WindowStatus,
};
