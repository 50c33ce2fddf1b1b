//! Geometry exchanged with the GUI library, and the typed resource handles

use nalgebra::Vector2;

use crate::foundation::collections::TypedHandle;

/// A single vertex generated by the GUI library
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in window pixels, origin top-left
    pub position: Vector2<f32>,
    /// Straight-alpha RGBA colour
    pub colour: [u8; 4],
    /// Texture coordinates, ignored for untextured geometry
    pub tex_coord: Vector2<f32>,
}

impl Vertex {
    /// Create a vertex
    pub fn new(x: f32, y: f32, colour: [u8; 4], u: f32, v: f32) -> Self {
        Self {
            position: Vector2::new(x, y),
            colour,
            tex_coord: Vector2::new(u, v),
        }
    }
}

/// Handle tag types
pub mod tag {
    /// Tag for open files
    #[derive(Debug)]
    pub enum File {}
    /// Tag for uploaded textures
    #[derive(Debug)]
    pub enum Texture {}
    /// Tag for compiled geometry
    #[derive(Debug)]
    pub enum Geometry {}
}

/// Open file issued by a [`crate::gui::FileInterface`]
pub type FileHandle = TypedHandle<tag::File>;
/// Texture issued by a [`crate::gui::RenderInterface`]
pub type TextureHandle = TypedHandle<tag::Texture>;
/// Compiled geometry issued by a [`crate::gui::RenderInterface`]
pub type GeometryHandle = TypedHandle<tag::Geometry>;
