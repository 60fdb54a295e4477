//! Translates winit window events into [`WindowEvent`]s.

use std::cell::Cell;

use glam::Vec2;
use winit::{
    dpi::PhysicalPosition,
    event::{self as winit_event, ElementState, MouseScrollDelta},
    keyboard::{NativeKeyCode, PhysicalKey},
};

use super::{
    event::{
        EventKind, Key, KeyEvent, KeyModifiers, MouseButton, WindowEvent,
    },
    window::{EventHandler, EventWindow, InputWindow, SubscriptionId},
};

/// Scale applied to pixel scroll deltas so they land near line units.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// [`InputWindow`] fed from a winit event loop.
///
/// Tracks the state winit reports incrementally (modifiers, cumulative
/// scroll) so the events it raises carry absolute values.
pub struct WinitInputWindow {
    events: EventWindow,
    scroll: Cell<Vec2>,
    modifiers: Cell<KeyModifiers>,
}

impl WinitInputWindow {
    /// Create a focused window bridge with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: EventWindow::new(),
            scroll: Cell::new(Vec2::ZERO),
            modifiers: Cell::new(KeyModifiers::empty()),
        }
    }

    /// Cumulative scroll since the bridge was created.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll.get()
    }

    /// Forward a winit window event. Returns `true` if it was an input
    /// event this bridge handles.
    pub fn handle_window_event(
        &self,
        event: &winit_event::WindowEvent,
    ) -> bool {
        match event {
            winit_event::WindowEvent::Focused(focused) => {
                self.events.set_focused(*focused);
            }
            winit_event::WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(*state, (*button).into());
            }
            winit_event::WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(*position);
            }
            winit_event::WindowEvent::MouseWheel { delta, .. } => {
                self.mouse_wheel(*delta);
            }
            winit_event::WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers.set(modifiers.state().into());
            }
            winit_event::WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(event.physical_key, event.state);
            }
            _ => return false,
        }
        true
    }

    /// Mouse button press or release.
    pub fn mouse_input(&self, state: ElementState, button: MouseButton) {
        let event = match state {
            ElementState::Pressed => WindowEvent::MouseDown { button },
            ElementState::Released => WindowEvent::MouseUp { button },
        };
        self.events.dispatch(&event);
    }

    /// Cursor moved to `position` (physical pixels).
    #[allow(clippy::cast_possible_truncation)]
    pub fn cursor_moved(&self, position: PhysicalPosition<f64>) {
        self.events.dispatch(&WindowEvent::MouseMove {
            position: Vec2::new(position.x as f32, position.y as f32),
        });
    }

    /// Wheel moved by `delta`; raises the new cumulative scroll value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mouse_wheel(&self, delta: MouseScrollDelta) {
        let step = match delta {
            MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
            MouseScrollDelta::PixelDelta(pos) => {
                Vec2::new(pos.x as f32, pos.y as f32) * PIXEL_SCROLL_SCALE
            }
        };
        let scroll = self.scroll.get() + step;
        self.scroll.set(scroll);
        self.events.dispatch(&WindowEvent::MouseWheel { scroll });
    }

    /// Physical key press or release, tagged with the current modifiers.
    ///
    /// Keys winit cannot identify keep the platform's native scan code.
    pub fn key_input(&self, physical_key: PhysicalKey, state: ElementState) {
        let modifiers = self.modifiers.get();
        let key = match physical_key {
            PhysicalKey::Code(code) => KeyEvent::new(code.into(), modifiers),
            PhysicalKey::Unidentified(native) => KeyEvent {
                key: Key::Unknown,
                scan_code: native_scan_code(native),
                modifiers,
            },
        };
        let event = match state {
            ElementState::Pressed => WindowEvent::KeyDown(key),
            ElementState::Released => WindowEvent::KeyUp(key),
        };
        self.events.dispatch(&event);
    }
}

fn native_scan_code(native: NativeKeyCode) -> u32 {
    match native {
        NativeKeyCode::Unidentified => 0,
        NativeKeyCode::Android(code) | NativeKeyCode::Xkb(code) => code,
        NativeKeyCode::MacOS(code) | NativeKeyCode::Windows(code) => {
            u32::from(code)
        }
    }
}

impl Default for WinitInputWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl InputWindow for WinitInputWindow {
    fn focused(&self) -> bool {
        self.events.focused()
    }

    fn subscribe(
        &self,
        kind: EventKind,
        handler: EventHandler,
    ) -> SubscriptionId {
        self.events.subscribe(kind, handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::{KeyCode, ModifiersState};

    use super::*;
    use crate::input::{
        InputDriver, KeyboardDriver, LegacyInputDriver, MouseDriver,
    };

    #[test]
    fn scroll_deltas_accumulate_into_absolute_value() {
        let window = WinitInputWindow::new();
        let driver = LegacyInputDriver::new(Some(&window)).unwrap();

        window.mouse_wheel(MouseScrollDelta::LineDelta(0.0, 2.0));
        window.mouse_wheel(MouseScrollDelta::LineDelta(0.0, 3.0));
        assert_eq!(driver.mouse()[0].state().wheel_precise(), 5.0);

        window.mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
            0.0, -100.0,
        )));
        assert_eq!(driver.mouse()[0].state().wheel_precise(), 4.0);
        assert_eq!(window.scroll(), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn keys_carry_scan_code_and_tracked_modifiers() {
        let window = WinitInputWindow::new();
        let driver = LegacyInputDriver::new(Some(&window)).unwrap();

        window.modifiers.set(ModifiersState::SHIFT.into());
        window
            .key_input(PhysicalKey::Code(KeyCode::KeyA), ElementState::Pressed);

        let keyboard = driver.keyboard()[0].state();
        assert!(keyboard.is_key_down(Key::KeyA));
        assert!(keyboard.is_scan_code_down(0x1E));
        assert_eq!(keyboard.modifiers(), KeyModifiers::SHIFT);
    }

    #[test]
    fn unidentified_keys_keep_native_scan_codes() {
        let window = WinitInputWindow::new();
        let driver = LegacyInputDriver::new(Some(&window)).unwrap();
        let first = PhysicalKey::Unidentified(NativeKeyCode::Xkb(0x1A4));
        let second = PhysicalKey::Unidentified(NativeKeyCode::Windows(0x5D));

        window.key_input(first, ElementState::Pressed);
        window.key_input(second, ElementState::Pressed);
        window.key_input(first, ElementState::Released);

        let keyboard = driver.keyboard()[0].state();
        assert!(!keyboard.is_scan_code_down(0x1A4));
        assert!(keyboard.is_scan_code_down(0x5D));
        assert!(keyboard.is_key_down(Key::Unknown));
    }

    #[test]
    fn winit_focus_loss_releases_keys() {
        let window = WinitInputWindow::new();
        let mut driver = LegacyInputDriver::new(Some(&window)).unwrap();

        window
            .key_input(PhysicalKey::Code(KeyCode::KeyW), ElementState::Pressed);
        let focus_lost = winit_event::WindowEvent::Focused(false);
        assert!(window.handle_window_event(&focus_lost));
        driver.poll();

        assert!(!driver.keyboard()[0].state().is_key_down(Key::KeyW));
        assert!(!window.focused());
    }

    #[test]
    fn mouse_events_reach_driver() {
        let window = WinitInputWindow::new();
        let driver = LegacyInputDriver::new(Some(&window)).unwrap();

        window.mouse_input(
            ElementState::Pressed,
            winit_event::MouseButton::Middle.into(),
        );
        window.cursor_moved(PhysicalPosition::new(12.0, 34.0));

        let mouse = driver.mouse()[0].state();
        assert!(mouse.is_pressed(MouseButton::Middle));
        assert_eq!(mouse.position(), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn non_input_events_are_not_handled() {
        let window = WinitInputWindow::new();
        let close = winit_event::WindowEvent::CloseRequested;
        assert!(!window.handle_window_event(&close));
    }
}
