//! Window event injection
//!
//! Each recognised GLFW event becomes exactly one call on the GUI context.
//! Everything else (focus, resize, file drops, ...) is left to the host.

use glfw::{Action, WindowEvent};

use super::keymap::{convert_button, convert_modifiers, key_to_identifier};
use crate::gui::context::GuiContext;
use crate::gui::input::KeyModifier;

/// Forward one window event to the context
///
/// `modifiers` is used for pointer events, which carry no modifier state of
/// their own. Returns `true` when a context call was made.
#[allow(clippy::cast_possible_truncation)]
pub fn inject<C>(context: &mut C, event: &WindowEvent, modifiers: KeyModifier) -> bool
where
    C: GuiContext + ?Sized,
{
    match *event {
        WindowEvent::Key(key, _, Action::Press | Action::Repeat, mods) => {
            context.process_key_down(key_to_identifier(key), convert_modifiers(mods));
        }
        WindowEvent::Key(key, _, Action::Release, mods) => {
            context.process_key_up(key_to_identifier(key), convert_modifiers(mods));
        }
        WindowEvent::Char(character) | WindowEvent::CharModifiers(character, _) => {
            context.process_text_input(character);
        }
        WindowEvent::CursorPos(x, y) => {
            context.process_mouse_move(x as i32, y as i32, modifiers);
        }
        WindowEvent::MouseButton(button, Action::Press, mods) => {
            context.process_mouse_button_down(convert_button(button), convert_modifiers(mods));
        }
        WindowEvent::MouseButton(button, Action::Release, mods) => {
            context.process_mouse_button_up(convert_button(button), convert_modifiers(mods));
        }
        WindowEvent::Scroll(_, y) => {
            // GLFW reports positive y for scrolling up
            context.process_mouse_wheel(-y as f32, modifiers);
        }
        _ => return false,
    }
    true
}

/// Stateful injector tracking the modifier keys between events
///
/// GLFW only attaches modifiers to key and button events; the last seen set is
/// reused for pointer moves and wheel turns.
#[derive(Debug, Default)]
pub struct EventInjector {
    modifiers: KeyModifier,
}

impl EventInjector {
    /// Create an injector with no modifiers held
    pub fn new() -> Self {
        Self::default()
    }

    /// Modifier set that will accompany the next pointer event
    pub const fn modifiers(&self) -> KeyModifier {
        self.modifiers
    }

    /// Forward one window event, updating the tracked modifiers first
    pub fn inject<C>(&mut self, context: &mut C, event: &WindowEvent) -> bool
    where
        C: GuiContext + ?Sized,
    {
        match *event {
            WindowEvent::Key(_, _, _, mods)
            | WindowEvent::MouseButton(_, _, mods)
            | WindowEvent::CharModifiers(_, mods) => {
                self.modifiers = convert_modifiers(mods);
            }
            // Releases made while unfocused never reach the window
            WindowEvent::Focus(false) => self.modifiers = KeyModifier::empty(),
            _ => {}
        }

        let handled = inject(context, event, self.modifiers);
        if !handled {
            log::trace!("Ignoring window event {:?}", event);
        }
        handled
    }
}
