//! GUI glue demo application
//!
//! Opens a GLFW window, checks the GL entry points, wires a stand-in GUI
//! runtime through the glue and pumps window events into its context.
//!
//! Usage: `glue_demo [config.toml|config.ron]`

mod demo_gui;

use std::cell::RefCell;
use std::rc::Rc;

use glfw::{Action, Context, Key, WindowEvent};
use thiserror::Error;
use ui_glue::config::{Config, ConfigError, GlueConfig};
use ui_glue::foundation::logging;
use ui_glue::lifecycle::{free, init_with_ticks};
use ui_glue::platform::{EventInjector, GlfwTicks};
use ui_glue::render::{GlFunctionTable, RecordingBackend};
use ui_glue::GlueError;

use demo_gui::DemoRuntime;

/// Demo startup errors
#[derive(Error, Debug)]
enum DemoError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("Window creation failed")]
    CreationFailed,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Glue(#[from] GlueError),
}

fn load_config() -> Result<GlueConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => GlueConfig::load_from_file(&path),
        None => Ok(GlueConfig::default()),
    }
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    logging::init_with_filter(config.log_filter.as_deref());

    log::info!("Initializing GLFW...");
    let mut glfw = glfw::init(glfw::fail_on_errors).map_err(|_| DemoError::InitializationFailed)?;
    glfw.window_hint(glfw::WindowHint::ContextVersion(2, 1));
    glfw.window_hint(glfw::WindowHint::Resizable(true));

    let (mut window, events) = glfw
        .create_window(
            config.window.width,
            config.window.height,
            &config.window.title,
            glfw::WindowMode::Windowed,
        )
        .ok_or(DemoError::CreationFailed)?;
    window.make_current();
    window.set_key_polling(true);
    window.set_char_polling(true);
    window.set_cursor_pos_polling(true);
    window.set_mouse_button_polling(true);
    window.set_scroll_polling(true);
    window.set_framebuffer_size_polling(true);
    window.set_close_polling(true);

    let gl = GlFunctionTable::load(&mut *window)?;
    log::info!("GL context provides all {} required entry points", gl.len());

    let window = Rc::new(RefCell::new(window));
    let backend = Rc::new(RefCell::new(RecordingBackend::new()));
    let mut runtime = DemoRuntime::default();
    let mut context = init_with_ticks(
        &mut runtime,
        Rc::clone(&backend),
        Rc::clone(&window),
        GlfwTicks::new(glfw.clone()),
        &config,
    )?;

    let mut injector = EventInjector::new();
    let mut frames: u64 = 0;
    let mut draws: u64 = 0;

    while !window.borrow().should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            match event {
                WindowEvent::Key(Key::Escape, _, Action::Press, _) | WindowEvent::Close => {
                    window.borrow_mut().set_should_close(true);
                }
                WindowEvent::FramebufferSize(width, height) => {
                    runtime.resize(&mut context, width, height);
                }
                other => {
                    injector.inject(&mut context, &other);
                }
            }
        }

        runtime.render(&context);
        let frame = backend.borrow_mut().take_frame();
        draws += frame.len() as u64;
        frames += 1;

        window.borrow_mut().swap_buffers();
    }

    log::info!("Rendered {} frames ({} draws), typed {:?}", frames, draws, context.typed());
    free(&mut runtime, context);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        eprintln!("glue_demo: {e}");
        std::process::exit(1);
    }
}
