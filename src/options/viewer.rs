use serde::{Deserialize, Serialize};

/// Settings for the standalone input viewer window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerOptions {
    /// Window title.
    pub title: String,
    /// Initial logical width.
    pub width: u32,
    /// Initial logical height.
    pub height: u32,
    /// Log a device state summary whenever it changes.
    pub log_state: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "Legacy Input".into(),
            width: 800,
            height: 600,
            log_state: true,
        }
    }
}
