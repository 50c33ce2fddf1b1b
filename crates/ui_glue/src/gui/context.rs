//! GUI context and runtime contracts

use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::Vector2;

use super::input::{KeyIdentifier, KeyModifier};
use super::interfaces::{FileInterface, RenderInterface, SystemInterface};

/// Root object of the GUI library: owns a document tree and receives input
///
/// Positions are window pixels with the origin at the top-left corner.
pub trait GuiContext {
    /// Name the context was created with
    fn name(&self) -> &str;

    /// A key was pressed (or auto-repeated)
    fn process_key_down(&mut self, key: KeyIdentifier, modifiers: KeyModifier);

    /// A key was released
    fn process_key_up(&mut self, key: KeyIdentifier, modifiers: KeyModifier);

    /// A character was typed
    fn process_text_input(&mut self, character: char);

    /// The pointer moved
    fn process_mouse_move(&mut self, x: i32, y: i32, modifiers: KeyModifier);

    /// A mouse button was pressed
    fn process_mouse_button_down(&mut self, button: i32, modifiers: KeyModifier);

    /// A mouse button was released
    fn process_mouse_button_up(&mut self, button: i32, modifiers: KeyModifier);

    /// The wheel turned; positive `delta` scrolls down
    fn process_mouse_wheel(&mut self, delta: f32, modifiers: KeyModifier);

    /// The drawable area changed size
    fn set_dimensions(&mut self, dimensions: Vector2<i32>);
}

/// Platform services installed into a [`GuiRuntime`] before initialisation
pub struct PlatformServices {
    /// Time and diagnostics
    pub system: Box<dyn SystemInterface>,
    /// File access, shared with the render service for texture loading
    pub files: Rc<RefCell<dyn FileInterface>>,
    /// Drawing
    pub render: Box<dyn RenderInterface>,
}

/// Lifecycle of the external GUI library
pub trait GuiRuntime {
    /// Context type produced by this runtime
    type Context: GuiContext;

    /// Install the platform services; must precede [`GuiRuntime::initialise`]
    fn install_services(&mut self, services: PlatformServices);

    /// Start the library; `false` when it cannot initialise
    fn initialise(&mut self) -> bool;

    /// Create a context of the given size
    fn create_context(&mut self, name: &str, dimensions: Vector2<i32>) -> Option<Self::Context>;

    /// Destroy a context and its documents
    fn release_context(&mut self, context: Self::Context);

    /// Stop the library and drop the installed services
    fn shutdown(&mut self);
}
