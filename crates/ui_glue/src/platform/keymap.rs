//! GLFW to GUI input code mapping
//!
//! Pure and total: every backend code maps to something, unmapped keys to
//! [`KeyIdentifier::Unknown`].

use glfw::{Key, Modifiers, MouseButton};

use crate::gui::input::{
    KeyIdentifier, KeyModifier, MOUSE_BUTTON_LEFT, MOUSE_BUTTON_MIDDLE, MOUSE_BUTTON_OTHER,
    MOUSE_BUTTON_RIGHT,
};

/// Map a GLFW key to the GUI library's key identifier
#[allow(clippy::too_many_lines)]
pub const fn key_to_identifier(key: Key) -> KeyIdentifier {
    match key {
        Key::Space => KeyIdentifier::Space,
        Key::Apostrophe => KeyIdentifier::Apostrophe,
        Key::Comma => KeyIdentifier::Comma,
        Key::Minus => KeyIdentifier::Minus,
        Key::Period => KeyIdentifier::Period,
        Key::Slash => KeyIdentifier::Slash,
        Key::Semicolon => KeyIdentifier::Semicolon,
        Key::Equal => KeyIdentifier::Equals,
        Key::LeftBracket => KeyIdentifier::LeftBracket,
        Key::Backslash => KeyIdentifier::Backslash,
        Key::RightBracket => KeyIdentifier::RightBracket,
        Key::GraveAccent => KeyIdentifier::Grave,

        Key::Num0 => KeyIdentifier::Num0,
        Key::Num1 => KeyIdentifier::Num1,
        Key::Num2 => KeyIdentifier::Num2,
        Key::Num3 => KeyIdentifier::Num3,
        Key::Num4 => KeyIdentifier::Num4,
        Key::Num5 => KeyIdentifier::Num5,
        Key::Num6 => KeyIdentifier::Num6,
        Key::Num7 => KeyIdentifier::Num7,
        Key::Num8 => KeyIdentifier::Num8,
        Key::Num9 => KeyIdentifier::Num9,

        Key::A => KeyIdentifier::A,
        Key::B => KeyIdentifier::B,
        Key::C => KeyIdentifier::C,
        Key::D => KeyIdentifier::D,
        Key::E => KeyIdentifier::E,
        Key::F => KeyIdentifier::F,
        Key::G => KeyIdentifier::G,
        Key::H => KeyIdentifier::H,
        Key::I => KeyIdentifier::I,
        Key::J => KeyIdentifier::J,
        Key::K => KeyIdentifier::K,
        Key::L => KeyIdentifier::L,
        Key::M => KeyIdentifier::M,
        Key::N => KeyIdentifier::N,
        Key::O => KeyIdentifier::O,
        Key::P => KeyIdentifier::P,
        Key::Q => KeyIdentifier::Q,
        Key::R => KeyIdentifier::R,
        Key::S => KeyIdentifier::S,
        Key::T => KeyIdentifier::T,
        Key::U => KeyIdentifier::U,
        Key::V => KeyIdentifier::V,
        Key::W => KeyIdentifier::W,
        Key::X => KeyIdentifier::X,
        Key::Y => KeyIdentifier::Y,
        Key::Z => KeyIdentifier::Z,

        Key::Escape => KeyIdentifier::Escape,
        Key::Enter => KeyIdentifier::Return,
        Key::Tab => KeyIdentifier::Tab,
        Key::Backspace => KeyIdentifier::Backspace,
        Key::Insert => KeyIdentifier::Insert,
        Key::Delete => KeyIdentifier::Delete,
        Key::Right => KeyIdentifier::Right,
        Key::Left => KeyIdentifier::Left,
        Key::Down => KeyIdentifier::Down,
        Key::Up => KeyIdentifier::Up,
        Key::PageUp => KeyIdentifier::PageUp,
        Key::PageDown => KeyIdentifier::PageDown,
        Key::Home => KeyIdentifier::Home,
        Key::End => KeyIdentifier::End,
        Key::CapsLock => KeyIdentifier::CapsLock,
        Key::ScrollLock => KeyIdentifier::ScrollLock,
        Key::NumLock => KeyIdentifier::NumLock,
        Key::PrintScreen => KeyIdentifier::PrintScreen,
        Key::Pause => KeyIdentifier::Pause,

        Key::F1 => KeyIdentifier::F1,
        Key::F2 => KeyIdentifier::F2,
        Key::F3 => KeyIdentifier::F3,
        Key::F4 => KeyIdentifier::F4,
        Key::F5 => KeyIdentifier::F5,
        Key::F6 => KeyIdentifier::F6,
        Key::F7 => KeyIdentifier::F7,
        Key::F8 => KeyIdentifier::F8,
        Key::F9 => KeyIdentifier::F9,
        Key::F10 => KeyIdentifier::F10,
        Key::F11 => KeyIdentifier::F11,
        Key::F12 => KeyIdentifier::F12,
        Key::F13 => KeyIdentifier::F13,
        Key::F14 => KeyIdentifier::F14,
        Key::F15 => KeyIdentifier::F15,
        Key::F16 => KeyIdentifier::F16,
        Key::F17 => KeyIdentifier::F17,
        Key::F18 => KeyIdentifier::F18,
        Key::F19 => KeyIdentifier::F19,
        Key::F20 => KeyIdentifier::F20,
        Key::F21 => KeyIdentifier::F21,
        Key::F22 => KeyIdentifier::F22,
        Key::F23 => KeyIdentifier::F23,
        Key::F24 => KeyIdentifier::F24,

        Key::Kp0 => KeyIdentifier::Numpad0,
        Key::Kp1 => KeyIdentifier::Numpad1,
        Key::Kp2 => KeyIdentifier::Numpad2,
        Key::Kp3 => KeyIdentifier::Numpad3,
        Key::Kp4 => KeyIdentifier::Numpad4,
        Key::Kp5 => KeyIdentifier::Numpad5,
        Key::Kp6 => KeyIdentifier::Numpad6,
        Key::Kp7 => KeyIdentifier::Numpad7,
        Key::Kp8 => KeyIdentifier::Numpad8,
        Key::Kp9 => KeyIdentifier::Numpad9,
        Key::KpDecimal => KeyIdentifier::NumpadDecimal,
        Key::KpDivide => KeyIdentifier::NumpadDivide,
        Key::KpMultiply => KeyIdentifier::NumpadMultiply,
        Key::KpSubtract => KeyIdentifier::NumpadSubtract,
        Key::KpAdd => KeyIdentifier::NumpadAdd,
        Key::KpEnter => KeyIdentifier::NumpadEnter,
        Key::KpEqual => KeyIdentifier::NumpadEquals,

        Key::LeftShift => KeyIdentifier::LeftShift,
        Key::RightShift => KeyIdentifier::RightShift,
        Key::LeftControl => KeyIdentifier::LeftControl,
        Key::RightControl => KeyIdentifier::RightControl,
        Key::LeftAlt => KeyIdentifier::LeftAlt,
        Key::RightAlt => KeyIdentifier::RightAlt,
        Key::LeftSuper => KeyIdentifier::LeftMeta,
        Key::RightSuper => KeyIdentifier::RightMeta,
        Key::Menu => KeyIdentifier::Menu,

        // World1/World2 are layout specific, F25 has no counterpart
        _ => KeyIdentifier::Unknown,
    }
}

/// Map GLFW modifier bits to the GUI library's modifier flags
pub fn convert_modifiers(mods: Modifiers) -> KeyModifier {
    let mut modifiers = KeyModifier::empty();
    if mods.contains(Modifiers::Control) {
        modifiers |= KeyModifier::CTRL;
    }
    if mods.contains(Modifiers::Shift) {
        modifiers |= KeyModifier::SHIFT;
    }
    if mods.contains(Modifiers::Alt) {
        modifiers |= KeyModifier::ALT;
    }
    if mods.contains(Modifiers::Super) {
        modifiers |= KeyModifier::META;
    }
    if mods.contains(Modifiers::CapsLock) {
        modifiers |= KeyModifier::CAPSLOCK;
    }
    if mods.contains(Modifiers::NumLock) {
        modifiers |= KeyModifier::NUMLOCK;
    }
    modifiers
}

/// Map a GLFW mouse button to the GUI library's button index
pub const fn convert_button(button: MouseButton) -> i32 {
    match button {
        MouseButton::Button1 => MOUSE_BUTTON_LEFT,
        MouseButton::Button2 => MOUSE_BUTTON_RIGHT,
        MouseButton::Button3 => MOUSE_BUTTON_MIDDLE,
        _ => MOUSE_BUTTON_OTHER,
    }
}
