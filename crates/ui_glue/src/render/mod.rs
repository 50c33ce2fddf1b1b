//! Render backends
//!
//! - `backend`: the drawing primitives a backend provides ([`RenderBackend`])
//! - `recording`: in-memory backend recording each frame's draws
//! - `gl`: GL entry point capability table

pub mod backend;
pub mod gl;
pub mod recording;

pub use backend::{BackendMesh, BackendTexture, RenderBackend, ScissorRect};
pub use gl::{FnLoader, GlEntryPoint, GlFunctionTable, ProcLoader};
pub use recording::{DrawCommand, DrawSource, RecordingBackend, TextureData};
