//! Foundation module - Core utilities and types
//!
//! - Typed handle tables
//! - Logging utilities

pub mod collections;
pub mod logging;
