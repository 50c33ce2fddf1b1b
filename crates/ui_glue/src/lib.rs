//! # UI Glue
//!
//! Platform layer binding a GUI document library to GLFW windowing, a render
//! backend and an embedded scripting runtime.
//!
//! ## Features
//!
//! - **Input Translation**: GLFW keys, modifiers, buttons and window events
//!   mapped onto the GUI library's input calls
//! - **Service Adapters**: system (time, logging), file and render services
//!   supplied to the GUI library through capability traits
//! - **Typed Handles**: files, textures and compiled geometry addressed by
//!   generational keys instead of raw pointers
//! - **GL Capability Table**: GL entry points resolved once at startup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use ui_glue::prelude::*;
//! # fn run<R: GuiRuntime>(runtime: &mut R) -> Result<(), GlueError> {
//! let backend = Rc::new(RefCell::new(RecordingBackend::new()));
//! let window = Rc::new(RefCell::new(FixedSurface::new(800, 600)));
//!
//! let context = init(runtime, backend, window, &GlueConfig::default())?;
//! // ... pump window events through an EventInjector ...
//! free(runtime, context);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod foundation;
pub mod gui;
pub mod lifecycle;
pub mod platform;
pub mod render;
pub mod script;
pub mod services;

#[cfg(test)]
#[allow(missing_docs)]
mod testing;

pub use error::{GlueError, GlueResult};
pub use lifecycle::{free, init};

/// Common imports for glue users
pub mod prelude {
    pub use crate::{
        config::{Config, GlueConfig},
        error::{GlueError, GlueResult},
        gui::{
            FileHandle, FileInterface, GeometryHandle, GuiContext, GuiRuntime, KeyIdentifier,
            KeyModifier, RenderInterface, SeekOrigin, SystemInterface, TextureHandle, Vertex,
        },
        lifecycle::{free, init},
        platform::{EventInjector, FixedSurface, WindowSurface},
        render::{RecordingBackend, RenderBackend},
        script::{DocumentId, NamespaceRegistry, ScriptRuntime, ScriptValue},
        services::{BackendRenderInterface, FsFileInterface, TickSystemInterface},
    };
}
