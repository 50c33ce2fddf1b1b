//! Input enumerations understood by the GUI library

use bitflags::bitflags;

/// Key identifiers accepted by the GUI context
///
/// Layout-independent: each variant names a physical key position on a US
/// keyboard. [`KeyIdentifier::Unknown`] is the "no mapping" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(missing_docs)]
pub enum KeyIdentifier {
    /// No mapping for the backend key
    #[default]
    Unknown,

    Space,

    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// `;` and `:`
    Semicolon,
    /// `=` and `+`
    Equals,
    /// `,` and `<`
    Comma,
    /// `-` and `_`
    Minus,
    /// `.` and `>`
    Period,
    /// `/` and `?`
    Slash,
    /// `` ` `` and `~`
    Grave,
    /// `[` and `{`
    LeftBracket,
    /// `\` and `|`
    Backslash,
    /// `]` and `}`
    RightBracket,
    /// `'` and `"`
    Apostrophe,

    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadEnter,
    NumpadMultiply,
    NumpadAdd,
    NumpadSubtract,
    NumpadDecimal,
    NumpadDivide,
    NumpadEquals,

    Backspace,
    Tab,
    Return,
    Pause,
    CapsLock,
    Escape,

    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    PrintScreen,
    Insert,
    Delete,

    LeftMeta,
    RightMeta,
    Menu,

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    NumLock,
    ScrollLock,

    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
}

impl KeyIdentifier {
    /// True for every identifier except the sentinel
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

bitflags! {
    /// Modifier state attached to key and mouse input
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifier: u32 {
        /// Either control key
        const CTRL = 1 << 0;
        /// Either shift key
        const SHIFT = 1 << 1;
        /// Either alt key
        const ALT = 1 << 2;
        /// Either meta (super / command / windows) key
        const META = 1 << 3;
        /// Caps lock active
        const CAPSLOCK = 1 << 4;
        /// Num lock active
        const NUMLOCK = 1 << 5;
        /// Scroll lock active
        const SCROLLLOCK = 1 << 6;
    }
}

/// Button index of the primary mouse button
pub const MOUSE_BUTTON_LEFT: i32 = 0;
/// Button index of the secondary mouse button
pub const MOUSE_BUTTON_RIGHT: i32 = 1;
/// Button index of the middle mouse button
pub const MOUSE_BUTTON_MIDDLE: i32 = 2;
/// Index shared by every additional mouse button
pub const MOUSE_BUTTON_OTHER: i32 = 3;
