//! GLFW platform adapters
//!
//! - `keymap`: key, modifier and mouse button translation
//! - `inject`: window event forwarding into a GUI context
//! - `ticks`: millisecond tick sources for the system service
//! - `window`: drawable size queries for the render service

pub mod inject;
pub mod keymap;
pub mod ticks;
pub mod window;

pub use inject::{inject, EventInjector};
pub use keymap::{convert_button, convert_modifiers, key_to_identifier};
pub use ticks::{GlfwTicks, InstantTicks, ManualTicks, TickSource};
pub use window::{FixedSurface, WindowSurface};
