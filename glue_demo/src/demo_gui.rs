//! Minimal stand-in for the GUI document library
//!
//! Just enough of a runtime to exercise the glue: it records what the
//! platform sends it and draws a cursor marker through the render service.

use nalgebra::Vector2;
use ui_glue::gui::{GuiContext, GuiRuntime, KeyIdentifier, KeyModifier, PlatformServices, Vertex, MOUSE_BUTTON_LEFT};
use ui_glue::lifecycle;

const MARKER_SIZE: f32 = 12.0;

/// Context tracking pointer and typed text
pub struct DemoContext {
    name: String,
    dimensions: Vector2<i32>,
    cursor: Vector2<i32>,
    pressed: bool,
    typed: String,
}

impl DemoContext {
    /// Text typed so far
    pub fn typed(&self) -> &str {
        &self.typed
    }
}

impl GuiContext for DemoContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn process_key_down(&mut self, key: KeyIdentifier, modifiers: KeyModifier) {
        log::debug!("[{}] key down {:?} {:?}", self.name, key, modifiers);
        if key == KeyIdentifier::Backspace {
            self.typed.pop();
        }
    }

    fn process_key_up(&mut self, key: KeyIdentifier, modifiers: KeyModifier) {
        log::debug!("[{}] key up {:?} {:?}", self.name, key, modifiers);
    }

    fn process_text_input(&mut self, character: char) {
        self.typed.push(character);
    }

    fn process_mouse_move(&mut self, x: i32, y: i32, _modifiers: KeyModifier) {
        self.cursor = Vector2::new(x, y);
    }

    fn process_mouse_button_down(&mut self, button: i32, modifiers: KeyModifier) {
        log::debug!("[{}] button {} down {:?}", self.name, button, modifiers);
        if button == MOUSE_BUTTON_LEFT {
            self.pressed = true;
        }
    }

    fn process_mouse_button_up(&mut self, button: i32, _modifiers: KeyModifier) {
        if button == MOUSE_BUTTON_LEFT {
            self.pressed = false;
        }
    }

    fn process_mouse_wheel(&mut self, delta: f32, modifiers: KeyModifier) {
        log::debug!("[{}] wheel {} {:?}", self.name, delta, modifiers);
    }

    fn set_dimensions(&mut self, dimensions: Vector2<i32>) {
        log::info!("[{}] resized to {}x{}", self.name, dimensions.x, dimensions.y);
        self.dimensions = dimensions;
    }
}

/// Runtime owning the installed platform services
#[derive(Default)]
pub struct DemoRuntime {
    services: Option<PlatformServices>,
    initialised: bool,
}

impl DemoRuntime {
    /// Draw the cursor marker; it pulses with elapsed time and turns red while pressed
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn render(&mut self, context: &DemoContext) {
        let Some(services) = self.services.as_mut() else {
            return;
        };

        let pulse = (services.system.elapsed_time() * 4.0).sin().mul_add(0.25, 0.75);
        let alpha = (pulse * 255.0) as u8;
        let colour = if context.pressed {
            [230, 60, 60, alpha]
        } else {
            [240, 240, 240, alpha]
        };

        let vertices = [
            Vertex::new(0.0, 0.0, colour, 0.0, 0.0),
            Vertex::new(MARKER_SIZE, 0.0, colour, 1.0, 0.0),
            Vertex::new(MARKER_SIZE, MARKER_SIZE, colour, 1.0, 1.0),
            Vertex::new(0.0, MARKER_SIZE, colour, 0.0, 1.0),
        ];
        let origin = Vector2::new(context.cursor.x as f32, context.cursor.y as f32);
        services.render.render_geometry(&vertices, &[0, 1, 2, 0, 2, 3], None, origin);
    }

    /// Propagate a framebuffer resize
    #[allow(clippy::cast_sign_loss)]
    pub fn resize(&mut self, context: &mut DemoContext, width: i32, height: i32) {
        if let Some(services) = self.services.as_mut() {
            lifecycle::resize(services.render.as_mut(), context, width.max(0) as u32, height.max(0) as u32);
        }
    }
}

impl GuiRuntime for DemoRuntime {
    type Context = DemoContext;

    fn install_services(&mut self, services: PlatformServices) {
        self.services = Some(services);
    }

    fn initialise(&mut self) -> bool {
        self.initialised = self.services.is_some();
        self.initialised
    }

    fn create_context(&mut self, name: &str, dimensions: Vector2<i32>) -> Option<DemoContext> {
        self.initialised.then(|| DemoContext {
            name: name.to_string(),
            dimensions,
            cursor: Vector2::zeros(),
            pressed: false,
            typed: String::new(),
        })
    }

    fn release_context(&mut self, context: DemoContext) {
        log::info!(
            "Releasing context '{}' at {}x{} (typed {:?})",
            context.name,
            context.dimensions.x,
            context.dimensions.y,
            context.typed
        );
    }

    fn shutdown(&mut self) {
        self.services = None;
        self.initialised = false;
    }
}
