//! Service adapters handed to the GUI library
//!
//! Each adapter implements one of the [`crate::gui::interfaces`] traits by
//! calling straight through to the platform.

pub mod file;
pub mod render;
pub mod system;

pub use file::FsFileInterface;
pub use render::BackendRenderInterface;
pub use system::TickSystemInterface;
