use serde::{Deserialize, Serialize};

use crate::input::{KeyboardDevice, MouseDevice};

/// Labels given to the driver's device records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeviceOptions {
    /// Description of the mouse record.
    pub mouse_description: String,
    /// Description of the keyboard record.
    pub keyboard_description: String,
}

impl Default for DeviceOptions {
    fn default() -> Self {
        Self {
            mouse_description: MouseDevice::STANDARD_DESCRIPTION.to_owned(),
            keyboard_description: KeyboardDevice::STANDARD_DESCRIPTION
                .to_owned(),
        }
    }
}
