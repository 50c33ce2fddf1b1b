//! Test doubles for the external GUI library

use nalgebra::Vector2;

use crate::gui::context::{GuiContext, GuiRuntime, PlatformServices};
use crate::gui::input::{KeyIdentifier, KeyModifier};

/// One call received by a [`FakeContext`]
#[derive(Debug, Clone, PartialEq)]
pub enum ContextCall {
    KeyDown(KeyIdentifier, KeyModifier),
    KeyUp(KeyIdentifier, KeyModifier),
    TextInput(char),
    MouseMove(i32, i32, KeyModifier),
    MouseDown(i32, KeyModifier),
    MouseUp(i32, KeyModifier),
    MouseWheel(f32, KeyModifier),
}

/// Context recording every input call in order
#[derive(Debug)]
pub struct FakeContext {
    pub name: String,
    pub dimensions: Vector2<i32>,
    pub calls: Vec<ContextCall>,
}

impl FakeContext {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dimensions: Vector2::zeros(),
            calls: Vec::new(),
        }
    }
}

impl GuiContext for FakeContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn process_key_down(&mut self, key: KeyIdentifier, modifiers: KeyModifier) {
        self.calls.push(ContextCall::KeyDown(key, modifiers));
    }

    fn process_key_up(&mut self, key: KeyIdentifier, modifiers: KeyModifier) {
        self.calls.push(ContextCall::KeyUp(key, modifiers));
    }

    fn process_text_input(&mut self, character: char) {
        self.calls.push(ContextCall::TextInput(character));
    }

    fn process_mouse_move(&mut self, x: i32, y: i32, modifiers: KeyModifier) {
        self.calls.push(ContextCall::MouseMove(x, y, modifiers));
    }

    fn process_mouse_button_down(&mut self, button: i32, modifiers: KeyModifier) {
        self.calls.push(ContextCall::MouseDown(button, modifiers));
    }

    fn process_mouse_button_up(&mut self, button: i32, modifiers: KeyModifier) {
        self.calls.push(ContextCall::MouseUp(button, modifiers));
    }

    fn process_mouse_wheel(&mut self, delta: f32, modifiers: KeyModifier) {
        self.calls.push(ContextCall::MouseWheel(delta, modifiers));
    }

    fn set_dimensions(&mut self, dimensions: Vector2<i32>) {
        self.dimensions = dimensions;
    }
}

/// Runtime producing [`FakeContext`]s, with switchable failures
#[derive(Default)]
pub struct FakeRuntime {
    pub services: Option<PlatformServices>,
    pub initialised: bool,
    pub fail_initialise: bool,
    pub fail_context: bool,
    pub released: Vec<String>,
    pub shutdowns: usize,
}

impl GuiRuntime for FakeRuntime {
    type Context = FakeContext;

    fn install_services(&mut self, services: PlatformServices) {
        self.services = Some(services);
    }

    fn initialise(&mut self) -> bool {
        self.initialised = !self.fail_initialise && self.services.is_some();
        self.initialised
    }

    fn create_context(&mut self, name: &str, dimensions: Vector2<i32>) -> Option<FakeContext> {
        if self.fail_context || !self.initialised {
            return None;
        }
        let mut context = FakeContext::new(name);
        context.dimensions = dimensions;
        Some(context)
    }

    fn release_context(&mut self, context: FakeContext) {
        self.released.push(context.name);
    }

    fn shutdown(&mut self) {
        self.services = None;
        self.initialised = false;
        self.shutdowns += 1;
    }
}
