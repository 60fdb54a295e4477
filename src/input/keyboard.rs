use std::fmt;

use rustc_hash::FxHashSet;

use super::event::{Key, KeyModifiers};

/// State of a legacy polled keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardDevice {
    description: String,
    number_of_keys: usize,
    number_of_leds: usize,
    number_of_function_keys: usize,
    keys: FxHashSet<Key>,
    scan_codes: FxHashSet<u32>,
    /// Scan codes of held keys that have no [`Key`] mapping.
    unidentified: FxHashSet<u32>,
    modifiers: KeyModifiers,
}

impl KeyboardDevice {
    /// Label given to the driver's keyboard.
    pub const STANDARD_DESCRIPTION: &'static str = "Standard Keyboard";

    /// Create a keyboard with the standard 101-key layout and nothing held.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            number_of_keys: 101,
            number_of_leds: 3,
            number_of_function_keys: 12,
            keys: FxHashSet::default(),
            scan_codes: FxHashSet::default(),
            unidentified: FxHashSet::default(),
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Human-readable device label.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of keys on the layout.
    #[must_use]
    pub fn number_of_keys(&self) -> usize {
        self.number_of_keys
    }

    /// Number of indicator LEDs.
    #[must_use]
    pub fn number_of_leds(&self) -> usize {
        self.number_of_leds
    }

    /// Number of function keys.
    #[must_use]
    pub fn number_of_function_keys(&self) -> usize {
        self.number_of_function_keys
    }

    /// Whether `key` is held. [`Key::Unknown`] is down while any
    /// unidentified key is held.
    #[must_use]
    pub fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Unknown => !self.unidentified.is_empty(),
            key => self.keys.contains(&key),
        }
    }

    /// Whether the key with `scan_code` is held.
    #[must_use]
    pub fn is_scan_code_down(&self, scan_code: u32) -> bool {
        self.scan_codes.contains(&scan_code)
    }

    /// Modifiers reported with the most recent key change.
    #[must_use]
    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// Held keys in no particular order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = Key> + '_ {
        let unknown =
            (!self.unidentified.is_empty()).then_some(Key::Unknown);
        self.keys.iter().copied().chain(unknown)
    }

    pub(crate) fn set_key(
        &mut self,
        key: Key,
        scan_code: u32,
        modifiers: KeyModifiers,
        pressed: bool,
    ) {
        if pressed {
            let _ = self.scan_codes.insert(scan_code);
            if key == Key::Unknown {
                let _ = self.unidentified.insert(scan_code);
            } else {
                let _ = self.keys.insert(key);
            }
        } else {
            let _ = self.scan_codes.remove(&scan_code);
            // Unidentified keys are told apart by scan code alone.
            if key == Key::Unknown {
                let _ = self.unidentified.remove(&scan_code);
            } else {
                let _ = self.keys.remove(&key);
            }
        }
        self.modifiers = modifiers;
    }

    /// Release every key.
    pub(crate) fn clear_keys(&mut self) {
        self.keys.clear();
        self.scan_codes.clear();
        self.unidentified.clear();
        self.modifiers = KeyModifiers::empty();
    }
}

impl Default for KeyboardDevice {
    fn default() -> Self {
        Self::new(Self::STANDARD_DESCRIPTION)
    }
}

impl fmt::Display for KeyboardDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut held: Vec<_> =
            self.pressed_keys().map(|k| format!("{k:?}")).collect();
        held.sort_unstable();
        write!(f, "{}: keys=[{}]", self.description, held.join(" "))
    }
}
