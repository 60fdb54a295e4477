/// State of a joystick reported by a [`JoystickDriver`](super::JoystickDriver).
#[derive(Debug, Clone, PartialEq)]
pub struct JoystickDevice {
    id: usize,
    description: String,
    axes: Vec<f32>,
    buttons: Vec<bool>,
}

impl JoystickDevice {
    /// Create a centered, released joystick.
    #[must_use]
    pub fn new(
        id: usize,
        description: impl Into<String>,
        axis_count: usize,
        button_count: usize,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            axes: vec![0.0; axis_count],
            buttons: vec![false; button_count],
        }
    }

    /// Driver-assigned device index.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Human-readable device label.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Axis positions in `[-1, 1]`.
    #[must_use]
    pub fn axes(&self) -> &[f32] {
        &self.axes
    }

    /// Button flags.
    #[must_use]
    pub fn buttons(&self) -> &[bool] {
        &self.buttons
    }

    /// Set an axis, clamped to `[-1, 1]`. Out-of-range indices are ignored.
    pub fn set_axis(&mut self, axis: usize, value: f32) {
        if let Some(slot) = self.axes.get_mut(axis) {
            *slot = value.clamp(-1.0, 1.0);
        }
    }

    /// Set a button flag. Out-of-range indices are ignored.
    pub fn set_button(&mut self, button: usize, pressed: bool) {
        if let Some(slot) = self.buttons.get_mut(button) {
            *slot = pressed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_clamped() {
        let mut stick = JoystickDevice::new(0, "Pad", 2, 4);
        stick.set_axis(0, 3.0);
        stick.set_axis(1, -0.5);
        stick.set_axis(5, 1.0);
        assert_eq!(stick.axes(), &[1.0, -0.5]);
    }

    #[test]
    fn out_of_range_button_is_ignored() {
        let mut stick = JoystickDevice::new(1, "Pad", 0, 2);
        stick.set_button(1, true);
        stick.set_button(2, true);
        assert_eq!(stick.buttons(), &[false, true]);
    }
}
