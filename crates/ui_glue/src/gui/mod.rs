//! GUI library contracts
//!
//! The document library (layout, styling, rasterization) lives outside this
//! crate. This module describes what the glue exchanges with it:
//!
//! - `input`: key identifiers, modifier flags and mouse button indices
//! - `context`: the input sink ([`GuiContext`]) and runtime lifecycle ([`GuiRuntime`])
//! - `interfaces`: the system, file and render services the host supplies
//! - `geometry`: vertex layout and the typed resource handles

pub mod context;
pub mod geometry;
pub mod input;
pub mod interfaces;

pub use context::{GuiContext, GuiRuntime, PlatformServices};
pub use geometry::{FileHandle, GeometryHandle, TextureHandle, Vertex};
pub use input::{KeyIdentifier, KeyModifier, MOUSE_BUTTON_LEFT, MOUSE_BUTTON_MIDDLE, MOUSE_BUTTON_OTHER, MOUSE_BUTTON_RIGHT};
pub use interfaces::{FileInterface, LogLevel, RenderInterface, SeekOrigin, SystemInterface};
