use std::fmt;

use glam::Vec2;

use super::event::MouseButton;

/// State of a legacy polled mouse.
///
/// Button flags, cursor position and wheel value are overwritten by the
/// driver's event handlers; nothing here is sampled or accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseDevice {
    description: String,
    number_of_wheels: usize,
    buttons: [bool; MouseButton::STANDARD_COUNT],
    position: Vec2,
    wheel_precise: f32,
}

impl MouseDevice {
    /// Label given to the driver's mouse.
    pub const STANDARD_DESCRIPTION: &'static str = "Standard Mouse";

    /// Create a released, three-button, single-wheel mouse at the origin.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            number_of_wheels: 1,
            buttons: [false; MouseButton::STANDARD_COUNT],
            position: Vec2::ZERO,
            wheel_precise: 0.0,
        }
    }

    /// Human-readable device label.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of tracked buttons.
    #[must_use]
    pub fn number_of_buttons(&self) -> usize {
        self.buttons.len()
    }

    /// Number of scroll wheels.
    #[must_use]
    pub fn number_of_wheels(&self) -> usize {
        self.number_of_wheels
    }

    /// Whether `button` is held. Buttons beyond the standard three always
    /// read as released.
    #[must_use]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        button.index().is_some_and(|i| self.buttons[i])
    }

    /// Cursor position in window pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Horizontal cursor coordinate, truncated to whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn x(&self) -> i32 {
        self.position.x as i32
    }

    /// Vertical cursor coordinate, truncated to whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn y(&self) -> i32 {
        self.position.y as i32
    }

    /// Wheel value with fractional steps preserved.
    #[must_use]
    pub fn wheel_precise(&self) -> f32 {
        self.wheel_precise
    }

    /// Wheel value rounded to whole steps.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn wheel(&self) -> i32 {
        self.wheel_precise.round() as i32
    }

    pub(crate) fn set_button(&mut self, button: MouseButton, pressed: bool) {
        let Some(i) = button.index() else {
            log::trace!("ignoring non-standard mouse button {button:?}");
            return;
        };
        self.buttons[i] = pressed;
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn set_wheel_precise(&mut self, value: f32) {
        self.wheel_precise = value;
    }
}

impl Default for MouseDevice {
    fn default() -> Self {
        Self::new(Self::STANDARD_DESCRIPTION)
    }
}

impl fmt::Display for MouseDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: pos=({:.0}, {:.0}) wheel={:.2} buttons=[",
            self.description,
            self.position.x,
            self.position.y,
            self.wheel_precise
        )?;
        for (i, pressed) in self.buttons.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if *pressed { "down" } else { "up" })?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_mouse_layout() {
        let mouse = MouseDevice::default();
        assert_eq!(mouse.description(), "Standard Mouse");
        assert_eq!(mouse.number_of_buttons(), 3);
        assert_eq!(mouse.number_of_wheels(), 1);
        assert!(!mouse.is_pressed(MouseButton::Left));
    }

    #[test]
    fn extra_buttons_are_ignored() {
        let mut mouse = MouseDevice::default();
        mouse.set_button(MouseButton::Back, true);
        mouse.set_button(MouseButton::Other(9), true);
        assert!(!mouse.is_pressed(MouseButton::Back));
        assert!(!mouse.is_pressed(MouseButton::Other(9)));
        assert_eq!(mouse, MouseDevice::default());
    }

    #[test]
    fn integer_views_follow_precise_values() {
        let mut mouse = MouseDevice::default();
        mouse.set_position(Vec2::new(10.7, 20.2));
        mouse.set_wheel_precise(2.6);
        assert_eq!((mouse.x(), mouse.y()), (10, 20));
        assert_eq!(mouse.wheel(), 3);
    }

    #[test]
    fn display_lists_buttons() {
        let mut mouse = MouseDevice::default();
        mouse.set_button(MouseButton::Right, true);
        assert_eq!(
            mouse.to_string(),
            "Standard Mouse: pos=(0, 0) wheel=0.00 buttons=[up up down]"
        );
    }
}
