//! GUI context lifecycle
//!
//! [`init`] wires the service adapters into the GUI runtime and creates the
//! main context against a renderer/window pair; [`free`] tears it down again.

use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::Vector2;

use crate::config::GlueConfig;
use crate::error::{GlueError, GlueResult};
use crate::gui::context::{GuiContext, GuiRuntime, PlatformServices};
use crate::gui::interfaces::{FileInterface, RenderInterface};
use crate::platform::ticks::{InstantTicks, TickSource};
use crate::platform::window::WindowSurface;
use crate::render::backend::RenderBackend;
use crate::services::{BackendRenderInterface, FsFileInterface, TickSystemInterface};

/// Initialise the GUI runtime and create its main context
///
/// Time is measured from this call with [`InstantTicks`]; use
/// [`init_with_ticks`] to drive it from the windowing backend's timer.
pub fn init<R, B, W>(
    runtime: &mut R,
    renderer: Rc<RefCell<B>>,
    window: Rc<RefCell<W>>,
    config: &GlueConfig,
) -> GlueResult<R::Context>
where
    R: GuiRuntime,
    B: RenderBackend + 'static,
    W: WindowSurface + 'static,
{
    init_with_ticks(runtime, renderer, window, InstantTicks::new(), config)
}

/// [`init`] with an explicit tick source for the system service
pub fn init_with_ticks<R, B, W, T>(
    runtime: &mut R,
    renderer: Rc<RefCell<B>>,
    window: Rc<RefCell<W>>,
    ticks: T,
    config: &GlueConfig,
) -> GlueResult<R::Context>
where
    R: GuiRuntime,
    B: RenderBackend + 'static,
    W: WindowSurface + 'static,
    T: TickSource + 'static,
{
    let files: Rc<RefCell<dyn FileInterface>> = Rc::new(RefCell::new(match &config.asset_root {
        Some(root) => FsFileInterface::with_root(root),
        None => FsFileInterface::new(),
    }));

    let (width, height) = match window.borrow().framebuffer_size() {
        (0, 0) => (config.window.width, config.window.height),
        size => size,
    };

    let mut render = BackendRenderInterface::new(renderer, window, Rc::clone(&files));
    render.resize();

    runtime.install_services(PlatformServices {
        system: Box::new(TickSystemInterface::new(ticks)),
        files,
        render: Box::new(render),
    });

    if !runtime.initialise() {
        log::error!("GUI runtime failed to initialise");
        return Err(GlueError::RuntimeInit);
    }

    let dimensions = Vector2::new(
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(height).unwrap_or(i32::MAX),
    );
    match runtime.create_context(&config.context_name, dimensions) {
        Some(context) => {
            log::info!(
                "Created GUI context '{}' at {}x{}",
                config.context_name,
                dimensions.x,
                dimensions.y
            );
            Ok(context)
        }
        None => {
            log::error!("Failed to create GUI context '{}'", config.context_name);
            runtime.shutdown();
            Err(GlueError::ContextCreation(config.context_name.clone()))
        }
    }
}

/// Release a context created by [`init`] and shut the runtime down
pub fn free<R: GuiRuntime>(runtime: &mut R, context: R::Context) {
    runtime.release_context(context);
    runtime.shutdown();
    log::info!("GUI runtime shut down");
}

/// Forward a window resize to both the render service and the context
pub fn resize<C>(render: &mut dyn RenderInterface, context: &mut C, width: u32, height: u32)
where
    C: GuiContext + ?Sized,
{
    render.resize();
    context.set_dimensions(Vector2::new(
        i32::try_from(width).unwrap_or(i32::MAX),
        i32::try_from(height).unwrap_or(i32::MAX),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::geometry::Vertex;
    use crate::platform::ticks::ManualTicks;
    use crate::platform::window::FixedSurface;
    use crate::render::recording::RecordingBackend;
    use crate::testing::{FakeContext, FakeRuntime};

    fn pair(width: u32, height: u32) -> (Rc<RefCell<RecordingBackend>>, Rc<RefCell<FixedSurface>>) {
        (
            Rc::new(RefCell::new(RecordingBackend::new())),
            Rc::new(RefCell::new(FixedSurface::new(width, height))),
        )
    }

    #[test]
    fn test_init_creates_sized_context() {
        let mut runtime = FakeRuntime::default();
        let (backend, window) = pair(640, 480);
        let config = GlueConfig {
            context_name: "hud".to_string(),
            ..GlueConfig::default()
        };

        let context = init(&mut runtime, backend.clone(), window, &config).unwrap();
        assert_eq!(context.name(), "hud");
        assert_eq!(context.dimensions, Vector2::new(640, 480));
        assert!(runtime.initialised);
        // The render service set the viewport before the first frame
        assert_eq!(backend.borrow().viewport(), (640, 480));
    }

    #[test]
    fn test_installed_services_reach_the_backend() {
        let mut runtime = FakeRuntime::default();
        let (backend, window) = pair(100, 100);
        let ticks = Rc::new(ManualTicks::starting_at(2500));
        init_with_ticks(&mut runtime, backend.clone(), window, Rc::clone(&ticks), &GlueConfig::default()).unwrap();

        let services = runtime.services.as_mut().unwrap();
        assert!((services.system.elapsed_time() - 2.5).abs() < f32::EPSILON);

        let white = [255; 4];
        let vertices = [Vertex::new(0.0, 0.0, white, 0.0, 0.0), Vertex::new(1.0, 0.0, white, 0.0, 0.0), Vertex::new(0.0, 1.0, white, 0.0, 0.0)];
        let geometry = services.render.compile_geometry(&vertices, &[0, 1, 2], None);
        assert!(geometry.is_some());
        assert_eq!(backend.borrow().mesh_count(), 1);
    }

    #[test]
    fn test_zero_sized_window_uses_configured_size() {
        let mut runtime = FakeRuntime::default();
        let (backend, window) = pair(0, 0);
        let context = init(&mut runtime, backend, window, &GlueConfig::default()).unwrap();
        assert_eq!(context.dimensions, Vector2::new(1024, 768));
    }

    #[test]
    fn test_runtime_init_failure() {
        let mut runtime = FakeRuntime {
            fail_initialise: true,
            ..FakeRuntime::default()
        };
        let (backend, window) = pair(10, 10);
        let result = init(&mut runtime, backend, window, &GlueConfig::default());
        assert!(matches!(result, Err(GlueError::RuntimeInit)));
    }

    #[test]
    fn test_context_failure_shuts_runtime_down() {
        let mut runtime = FakeRuntime {
            fail_context: true,
            ..FakeRuntime::default()
        };
        let (backend, window) = pair(10, 10);
        let result = init(&mut runtime, backend, window, &GlueConfig::default());
        assert!(matches!(result, Err(GlueError::ContextCreation(name)) if name == "main"));
        assert_eq!(runtime.shutdowns, 1);
        assert!(runtime.services.is_none());
    }

    #[test]
    fn test_free_releases_then_shuts_down() {
        let mut runtime = FakeRuntime::default();
        let (backend, window) = pair(10, 10);
        let context = init(&mut runtime, backend, window, &GlueConfig::default()).unwrap();

        free(&mut runtime, context);
        assert_eq!(runtime.released, vec!["main".to_string()]);
        assert_eq!(runtime.shutdowns, 1);
        assert!(runtime.services.is_none());
    }

    #[test]
    fn test_resize_updates_render_and_context() {
        let mut runtime = FakeRuntime::default();
        let (backend, window) = pair(10, 10);
        let mut context: FakeContext = init(&mut runtime, backend.clone(), window.clone(), &GlueConfig::default()).unwrap();

        window.borrow_mut().set_size(320, 200);
        let services = runtime.services.as_mut().unwrap();
        resize(services.render.as_mut(), &mut context, 320, 200);

        assert_eq!(backend.borrow().viewport(), (320, 200));
        assert_eq!(context.dimensions, Vector2::new(320, 200));
    }
}
