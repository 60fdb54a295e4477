//! Legacy polled input driver backed by window event subscriptions.
//!
//! Consumers that expect the polling model (call [`InputDriver::poll`],
//! then read device records) get one mouse and one keyboard whose state
//! is kept current by handlers subscribed to the window. Joystick queries
//! are forwarded to a separate [`JoystickDriver`].

use super::{
    device::DeviceCell,
    event::{EventKind, WindowEvent},
    joystick::JoystickDevice,
    keyboard::KeyboardDevice,
    mouse::MouseDevice,
    window::{InputWindow, SubscriptionId, WindowStatus},
};
use crate::{error::InputError, options::DeviceOptions};

/// Source of keyboard device records.
pub trait KeyboardDriver {
    /// Keyboards known to the driver.
    fn keyboard(&self) -> &[DeviceCell<KeyboardDevice>];
}

/// Source of mouse device records.
pub trait MouseDriver {
    /// Mice known to the driver.
    fn mouse(&self) -> &[DeviceCell<MouseDevice>];
}

/// Source of joystick device records.
pub trait JoystickDriver {
    /// Joysticks currently known to the driver.
    fn joysticks(&self) -> &[JoystickDevice];
}

/// Full polled input interface.
pub trait InputDriver: KeyboardDriver + MouseDriver + JoystickDriver {
    /// Bring device records up to date.
    fn poll(&mut self);

    /// Release the driver's hold on its input sources. Safe to call more
    /// than once.
    fn dispose(&mut self);
}

/// Joystick driver holding a fixed device list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyJoystickDriver {
    devices: Vec<JoystickDevice>,
}

impl LegacyJoystickDriver {
    /// Driver with no joysticks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver reporting `devices`.
    #[must_use]
    pub fn from_devices(devices: Vec<JoystickDevice>) -> Self {
        Self { devices }
    }

    /// Mutable access to the device records, for feeding joystick state.
    pub fn devices_mut(&mut self) -> &mut [JoystickDevice] {
        &mut self.devices
    }
}

impl JoystickDriver for LegacyJoystickDriver {
    fn joysticks(&self) -> &[JoystickDevice] {
        &self.devices
    }
}

/// Polled input driver for a single window.
///
/// Owns exactly one mouse and one keyboard for its whole lifetime and
/// borrows the window it listens to, so it cannot outlive it. Dropping the
/// driver unsubscribes its handlers.
///
/// # Example
///
/// ```
/// # use legacy_input::input::{
/// #     EventWindow, InputDriver, LegacyInputDriver, MouseDriver,
/// # };
/// let window = EventWindow::new();
/// let mut driver = LegacyInputDriver::new(Some(&window))?;
/// driver.poll();
/// assert_eq!(driver.mouse().len(), 1);
/// # Ok::<(), legacy_input::InputError>(())
/// ```
pub struct LegacyInputDriver<'w, W, J = LegacyJoystickDriver>
where
    W: InputWindow + ?Sized,
    J: JoystickDriver,
{
    window: &'w W,
    keyboards: [DeviceCell<KeyboardDevice>; 1],
    mice: [DeviceCell<MouseDevice>; 1],
    joystick_driver: J,
    subscriptions: Vec<SubscriptionId>,
}

impl<'w, W> LegacyInputDriver<'w, W>
where
    W: InputWindow + ?Sized,
{
    /// Attach a driver with standard devices and no joysticks to `window`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingWindow`] if `window` is `None`.
    pub fn new(window: Option<&'w W>) -> Result<Self, InputError> {
        Self::with_joystick_driver(window, LegacyJoystickDriver::new())
    }
}

impl<'w, W, J> LegacyInputDriver<'w, W, J>
where
    W: InputWindow + ?Sized,
    J: JoystickDriver,
{
    /// Attach a driver with standard devices, forwarding joystick queries
    /// to `joystick_driver`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingWindow`] if `window` is `None`.
    pub fn with_joystick_driver(
        window: Option<&'w W>,
        joystick_driver: J,
    ) -> Result<Self, InputError> {
        Self::with_options(window, &DeviceOptions::default(), joystick_driver)
    }

    /// Attach a driver whose device labels come from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingWindow`] if `window` is `None`.
    pub fn with_options(
        window: Option<&'w W>,
        options: &DeviceOptions,
        joystick_driver: J,
    ) -> Result<Self, InputError> {
        let window = window.ok_or(InputError::MissingWindow)?;

        let mut driver = Self {
            window,
            keyboards: [DeviceCell::new(KeyboardDevice::new(
                options.keyboard_description.as_str(),
            ))],
            mice: [DeviceCell::new(MouseDevice::new(
                options.mouse_description.as_str(),
            ))],
            joystick_driver,
            subscriptions: Vec::with_capacity(7),
        };
        driver.hook_mouse_events();
        driver.hook_keyboard_events();

        log::debug!(
            "legacy input driver attached ({} subscriptions)",
            driver.subscriptions.len()
        );
        Ok(driver)
    }

    /// The joystick collaborator.
    #[must_use]
    pub fn joystick_driver(&self) -> &J {
        &self.joystick_driver
    }

    /// Mutable access to the joystick collaborator.
    pub fn joystick_driver_mut(&mut self) -> &mut J {
        &mut self.joystick_driver
    }

    /// Whether the driver still holds window subscriptions.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&WindowEvent, WindowStatus) + 'static,
    ) {
        let id = self.window.subscribe(kind, Box::new(handler));
        self.subscriptions.push(id);
    }

    fn hook_mouse_events(&mut self) {
        let mouse = self.mice[0].clone();
        self.subscribe(EventKind::MouseDown, move |event, _| {
            if let WindowEvent::MouseDown { button } = *event {
                mouse.update(|m| m.set_button(button, true));
            }
        });

        let mouse = self.mice[0].clone();
        self.subscribe(EventKind::MouseUp, move |event, _| {
            if let WindowEvent::MouseUp { button } = *event {
                mouse.update(|m| m.set_button(button, false));
            }
        });

        let mouse = self.mice[0].clone();
        self.subscribe(EventKind::MouseMove, move |event, _| {
            if let WindowEvent::MouseMove { position } = *event {
                mouse.update(|m| m.set_position(position));
            }
        });

        // The event carries the absolute scroll value, not a delta.
        let mouse = self.mice[0].clone();
        self.subscribe(EventKind::MouseWheel, move |event, _| {
            if let WindowEvent::MouseWheel { scroll } = *event {
                mouse.update(|m| m.set_wheel_precise(scroll.y));
            }
        });
    }

    fn hook_keyboard_events(&mut self) {
        let keyboard = self.keyboards[0].clone();
        self.subscribe(EventKind::KeyDown, move |event, _| {
            if let WindowEvent::KeyDown(key) = *event {
                keyboard.update(|k| {
                    k.set_key(key.key, key.scan_code, key.modifiers, true);
                });
            }
        });

        let keyboard = self.keyboards[0].clone();
        self.subscribe(EventKind::KeyUp, move |event, _| {
            if let WindowEvent::KeyUp(key) = *event {
                keyboard.update(|k| {
                    k.set_key(key.key, key.scan_code, key.modifiers, false);
                });
            }
        });

        // Key releases are not delivered while the window is unfocused.
        let keyboard = self.keyboards[0].clone();
        self.subscribe(EventKind::FocusChanged, move |_, status| {
            if !status.focused {
                log::debug!("focus lost, releasing all keys");
                keyboard.update(KeyboardDevice::clear_keys);
            }
        });
    }
}

impl<W, J> KeyboardDriver for LegacyInputDriver<'_, W, J>
where
    W: InputWindow + ?Sized,
    J: JoystickDriver,
{
    fn keyboard(&self) -> &[DeviceCell<KeyboardDevice>] {
        &self.keyboards
    }
}

impl<W, J> MouseDriver for LegacyInputDriver<'_, W, J>
where
    W: InputWindow + ?Sized,
    J: JoystickDriver,
{
    fn mouse(&self) -> &[DeviceCell<MouseDevice>] {
        &self.mice
    }
}

impl<W, J> JoystickDriver for LegacyInputDriver<'_, W, J>
where
    W: InputWindow + ?Sized,
    J: JoystickDriver,
{
    fn joysticks(&self) -> &[JoystickDevice] {
        self.joystick_driver.joysticks()
    }
}

impl<W, J> InputDriver for LegacyInputDriver<'_, W, J>
where
    W: InputWindow + ?Sized,
    J: JoystickDriver,
{
    /// Nothing to do: window events already keep the records current.
    fn poll(&mut self) {}

    fn dispose(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        for id in self.subscriptions.drain(..) {
            if !self.window.unsubscribe(id) {
                log::warn!("subscription {id:?} was already removed");
            }
        }
        log::debug!("legacy input driver detached");
    }
}

impl<W, J> Drop for LegacyInputDriver<'_, W, J>
where
    W: InputWindow + ?Sized,
    J: JoystickDriver,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
