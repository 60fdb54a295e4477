//! Runtime configuration with TOML file support.
//!
//! Device labels and viewer window settings live here. Every section uses
//! `#[serde(default)]`, so a file only needs the fields it overrides.

mod devices;
mod viewer;

use std::path::Path;

pub use devices::DeviceOptions;
use serde::{Deserialize, Serialize};
pub use viewer::ViewerOptions;

use crate::error::InputError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Options {
    /// Device record labels.
    pub devices: DeviceOptions,
    /// Viewer window settings.
    pub viewer: ViewerOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] if the file cannot be read and
    /// [`InputError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path).map_err(InputError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, InputError> {
        toml::from_str(content)
            .map_err(|e| InputError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::OptionsParse`] if serialization fails and
    /// [`InputError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), InputError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InputError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(InputError::Io)?;
        }
        std::fs::write(path, content).map_err(InputError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[devices]
mouse_description = "Trackpad"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.devices.mouse_description, "Trackpad");
        // Everything else should be default
        assert_eq!(opts.devices.keyboard_description, "Standard Keyboard");
        assert_eq!(opts.viewer, ViewerOptions::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Options::from_toml("[viewer]\nwidth = \"wide\"");
        assert!(matches!(result, Err(InputError::OptionsParse(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("legacy-input-options-{}", std::process::id()));
        let path = dir.join("options.toml");
        let mut opts = Options::default();
        opts.viewer.title = "Input Monitor".into();
        opts.viewer.log_state = false;

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/nonexistent/legacy-input/options.toml");
        assert!(matches!(Options::load(path), Err(InputError::Io(_))));
    }
}
