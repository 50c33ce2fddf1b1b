//! Render Backend Trait
//!
//! Defines the drawing primitives the render adapter needs from a backend.
//! Keeps the GUI glue independent of Vulkan/OpenGL specifics.

use nalgebra::{Matrix4, Vector2};

use crate::gui::geometry::Vertex;

/// Texture owned by a render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendTexture(pub u64);

/// Mesh owned by a render backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendMesh(pub u64);

/// Clip rectangle in window pixels, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScissorRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

/// Backend-agnostic drawing primitives
pub trait RenderBackend {
    /// Upload tightly packed RGBA8 pixels
    fn create_texture(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<BackendTexture, Box<dyn std::error::Error>>;

    /// Free a texture
    fn destroy_texture(&mut self, texture: BackendTexture);

    /// Upload an indexed triangle list for repeated drawing
    fn upload_mesh(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> Result<BackendMesh, Box<dyn std::error::Error>>;

    /// Free a mesh
    fn destroy_mesh(&mut self, mesh: BackendMesh);

    /// Draw an uploaded mesh offset by `translation`
    fn draw_mesh(&mut self, mesh: BackendMesh, texture: Option<BackendTexture>, translation: Vector2<f32>);

    /// Draw an indexed triangle list straight from client memory
    fn draw_vertices(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<BackendTexture>,
        translation: Vector2<f32>,
    );

    /// Clip subsequent draws, or stop clipping with `None`
    fn set_scissor(&mut self, scissor: Option<ScissorRect>);

    /// Set the viewport size and projection used by subsequent draws
    fn set_viewport(&mut self, width: u32, height: u32, projection: Matrix4<f32>);
}
