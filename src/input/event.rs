//! Platform-agnostic window input events.
//!
//! A window collaborator delivers these to subscribed handlers; see
//! [`InputWindow`](super::InputWindow).

use std::ops::{BitOr, BitOrAssign};

use glam::Vec2;

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
    /// "Back" side button.
    Back,
    /// "Forward" side button.
    Forward,
    /// Any other button, by platform index.
    Other(u16),
}

impl MouseButton {
    /// Number of buttons a standard mouse tracks.
    pub const STANDARD_COUNT: usize = 3;

    /// Slot of this button in a standard three-button mouse, if it has one.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Left => Some(0),
            Self::Middle => Some(1),
            Self::Right => Some(2),
            Self::Back | Self::Forward | Self::Other(_) => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Back => Self::Back,
            winit::event::MouseButton::Forward => Self::Forward,
            winit::event::MouseButton::Other(n) => Self::Other(n),
        }
    }
}

/// Defines [`Key`] together with its standard PC (set 1) scan codes.
///
/// Variant names follow `winit::keyboard::KeyCode` so the winit
/// conversion is generated from the same list.
macro_rules! define_keys {
    ($($name:ident = $scan:literal),* $(,)?) => {
        /// Physical key identifier on a standard 101-key layout.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            /// A key outside the standard layout.
            Unknown,
            $(
                #[doc = concat!("The `", stringify!($name), "` key.")]
                $name,
            )*
        }

        impl Key {
            /// Every known key, in layout order.
            pub const ALL: &'static [Self] = &[$(Self::$name),*];

            /// Standard PC set-1 scan code (extended keys carry the
            /// `0xE0` prefix in the high byte). `0` for [`Key::Unknown`].
            #[must_use]
            pub const fn scan_code(self) -> u32 {
                match self {
                    Self::Unknown => 0,
                    $(Self::$name => $scan,)*
                }
            }
        }

        #[cfg(feature = "viewer")]
        impl From<winit::keyboard::KeyCode> for Key {
            fn from(code: winit::keyboard::KeyCode) -> Self {
                match code {
                    $(winit::keyboard::KeyCode::$name => Self::$name,)*
                    _ => Self::Unknown,
                }
            }
        }
    };
}

define_keys! {
    Escape = 0x01,
    Digit1 = 0x02,
    Digit2 = 0x03,
    Digit3 = 0x04,
    Digit4 = 0x05,
    Digit5 = 0x06,
    Digit6 = 0x07,
    Digit7 = 0x08,
    Digit8 = 0x09,
    Digit9 = 0x0A,
    Digit0 = 0x0B,
    Minus = 0x0C,
    Equal = 0x0D,
    Backspace = 0x0E,
    Tab = 0x0F,
    KeyQ = 0x10,
    KeyW = 0x11,
    KeyE = 0x12,
    KeyR = 0x13,
    KeyT = 0x14,
    KeyY = 0x15,
    KeyU = 0x16,
    KeyI = 0x17,
    KeyO = 0x18,
    KeyP = 0x19,
    BracketLeft = 0x1A,
    BracketRight = 0x1B,
    Enter = 0x1C,
    ControlLeft = 0x1D,
    KeyA = 0x1E,
    KeyS = 0x1F,
    KeyD = 0x20,
    KeyF = 0x21,
    KeyG = 0x22,
    KeyH = 0x23,
    KeyJ = 0x24,
    KeyK = 0x25,
    KeyL = 0x26,
    Semicolon = 0x27,
    Quote = 0x28,
    Backquote = 0x29,
    ShiftLeft = 0x2A,
    Backslash = 0x2B,
    KeyZ = 0x2C,
    KeyX = 0x2D,
    KeyC = 0x2E,
    KeyV = 0x2F,
    KeyB = 0x30,
    KeyN = 0x31,
    KeyM = 0x32,
    Comma = 0x33,
    Period = 0x34,
    Slash = 0x35,
    ShiftRight = 0x36,
    NumpadMultiply = 0x37,
    AltLeft = 0x38,
    Space = 0x39,
    CapsLock = 0x3A,
    F1 = 0x3B,
    F2 = 0x3C,
    F3 = 0x3D,
    F4 = 0x3E,
    F5 = 0x3F,
    F6 = 0x40,
    F7 = 0x41,
    F8 = 0x42,
    F9 = 0x43,
    F10 = 0x44,
    NumLock = 0x45,
    ScrollLock = 0x46,
    Numpad7 = 0x47,
    Numpad8 = 0x48,
    Numpad9 = 0x49,
    NumpadSubtract = 0x4A,
    Numpad4 = 0x4B,
    Numpad5 = 0x4C,
    Numpad6 = 0x4D,
    NumpadAdd = 0x4E,
    Numpad1 = 0x4F,
    Numpad2 = 0x50,
    Numpad3 = 0x51,
    Numpad0 = 0x52,
    NumpadDecimal = 0x53,
    F11 = 0x57,
    F12 = 0x58,
    NumpadEnter = 0xE01C,
    ControlRight = 0xE01D,
    NumpadDivide = 0xE035,
    PrintScreen = 0xE037,
    AltRight = 0xE038,
    Pause = 0xE046,
    Home = 0xE047,
    ArrowUp = 0xE048,
    PageUp = 0xE049,
    ArrowLeft = 0xE04B,
    ArrowRight = 0xE04D,
    End = 0xE04F,
    ArrowDown = 0xE050,
    PageDown = 0xE051,
    Insert = 0xE052,
    Delete = 0xE053,
    SuperLeft = 0xE05B,
    SuperRight = 0xE05C,
    ContextMenu = 0xE05D,
}

/// Active keyboard modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers(u8);

impl KeyModifiers {
    /// Either alt key.
    pub const ALT: Self = Self(1);
    /// Either control key.
    pub const CONTROL: Self = Self(1 << 1);
    /// Either shift key.
    pub const SHIFT: Self = Self(1 << 2);
    /// Either command / super / logo key.
    pub const COMMAND: Self = Self(1 << 3);

    /// No modifiers held.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether no modifier is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set or clear the flags in `other`.
    pub fn set(&mut self, other: Self, enabled: bool) {
        if enabled {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl BitOr for KeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for KeyModifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut mods = Self::empty();
        mods.set(Self::ALT, state.alt_key());
        mods.set(Self::CONTROL, state.control_key());
        mods.set(Self::SHIFT, state.shift_key());
        mods.set(Self::COMMAND, state.super_key());
        mods
    }
}

/// Payload of a key-down or key-up notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key changed.
    pub key: Key,
    /// Platform scan code reported with the key.
    pub scan_code: u32,
    /// Modifiers active when the key changed.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Key event using the key's standard scan code.
    #[must_use]
    pub const fn new(key: Key, modifiers: KeyModifiers) -> Self {
        Self {
            key,
            scan_code: key.scan_code(),
            modifiers,
        }
    }
}

/// Input notification raised by a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// Mouse button pressed.
    MouseDown {
        /// Which button.
        button: MouseButton,
    },
    /// Mouse button released.
    MouseUp {
        /// Which button.
        button: MouseButton,
    },
    /// Cursor moved to an absolute window position.
    MouseMove {
        /// Position in physical pixels.
        position: Vec2,
    },
    /// Scroll wheel moved.
    MouseWheel {
        /// Absolute scroll value after the movement (not a delta).
        scroll: Vec2,
    },
    /// Key pressed.
    KeyDown(KeyEvent),
    /// Key released.
    KeyUp(KeyEvent),
    /// The window gained or lost input focus. Handlers read the new
    /// focus state from their [`WindowStatus`](super::WindowStatus).
    FocusChanged,
}

impl WindowEvent {
    /// The subscription channel this event is delivered on.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::MouseDown { .. } => EventKind::MouseDown,
            Self::MouseUp { .. } => EventKind::MouseUp,
            Self::MouseMove { .. } => EventKind::MouseMove,
            Self::MouseWheel { .. } => EventKind::MouseWheel,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::FocusChanged => EventKind::FocusChanged,
        }
    }
}

/// Subscription channel of a [`WindowEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`WindowEvent::MouseDown`].
    MouseDown,
    /// [`WindowEvent::MouseUp`].
    MouseUp,
    /// [`WindowEvent::MouseMove`].
    MouseMove,
    /// [`WindowEvent::MouseWheel`].
    MouseWheel,
    /// [`WindowEvent::KeyDown`].
    KeyDown,
    /// [`WindowEvent::KeyUp`].
    KeyUp,
    /// [`WindowEvent::FocusChanged`].
    FocusChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_buttons_have_slots() {
        assert_eq!(MouseButton::Left.index(), Some(0));
        assert_eq!(MouseButton::Middle.index(), Some(1));
        assert_eq!(MouseButton::Right.index(), Some(2));
        assert_eq!(MouseButton::Back.index(), None);
        assert_eq!(MouseButton::Other(7).index(), None);
    }

    #[test]
    fn scan_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for key in Key::ALL {
            assert!(seen.insert(key.scan_code()), "{key:?} duplicates");
        }
        assert_eq!(Key::Unknown.scan_code(), 0);
        assert_eq!(Key::KeyA.scan_code(), 0x1E);
    }

    #[test]
    fn modifier_flags_combine() {
        let mods = KeyModifiers::SHIFT | KeyModifiers::CONTROL;
        assert!(mods.contains(KeyModifiers::SHIFT));
        assert!(mods.contains(KeyModifiers::CONTROL));
        assert!(!mods.contains(KeyModifiers::ALT));

        let mut cleared = mods;
        cleared.set(KeyModifiers::SHIFT, false);
        cleared.set(KeyModifiers::CONTROL, false);
        assert!(cleared.is_empty());
    }

    #[test]
    fn events_report_their_kind() {
        let key = KeyEvent::new(Key::KeyA, KeyModifiers::empty());
        assert_eq!(WindowEvent::KeyUp(key).kind(), EventKind::KeyUp);
        assert_eq!(WindowEvent::FocusChanged.kind(), EventKind::FocusChanged);
        assert_eq!(
            WindowEvent::MouseWheel { scroll: Vec2::ZERO }.kind(),
            EventKind::MouseWheel
        );
    }
}
