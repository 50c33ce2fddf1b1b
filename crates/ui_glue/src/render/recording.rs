//! In-memory render backend
//!
//! Stores textures and meshes on the CPU and records every draw of the current
//! frame as a [`DrawCommand`]. A GPU renderer can consume the recorded frame,
//! and headless hosts use it as-is.

use std::collections::HashMap;

use nalgebra::{Matrix4, Vector2};

use super::backend::{BackendMesh, BackendTexture, RenderBackend, ScissorRect};
use crate::gui::geometry::Vertex;

/// Largest texture edge accepted by default
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 4096;

/// CPU copy of an uploaded texture
#[derive(Debug, Clone)]
pub struct TextureData {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

/// CPU copy of an uploaded mesh
#[derive(Debug, Clone)]
pub struct MeshData {
    /// Vertices
    pub vertices: Vec<Vertex>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

/// What a draw command draws
#[derive(Debug, Clone, PartialEq)]
pub enum DrawSource {
    /// A previously uploaded mesh
    Mesh(BackendMesh),
    /// Client-side geometry, copied at draw time
    Immediate {
        /// Vertices
        vertices: Vec<Vertex>,
        /// Triangle list indices
        indices: Vec<u32>,
    },
}

/// One recorded draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Geometry drawn
    pub source: DrawSource,
    /// Bound texture, if any
    pub texture: Option<BackendTexture>,
    /// Translation applied to every vertex
    pub translation: Vector2<f32>,
    /// Active clip rectangle
    pub scissor: Option<ScissorRect>,
}

/// Recording render backend
#[derive(Debug)]
pub struct RecordingBackend {
    textures: HashMap<BackendTexture, TextureData>,
    meshes: HashMap<BackendMesh, MeshData>,
    next_id: u64,
    frame: Vec<DrawCommand>,
    scissor: Option<ScissorRect>,
    viewport: (u32, u32),
    projection: Matrix4<f32>,
    max_texture_size: u32,
}

impl RecordingBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::with_max_texture_size(DEFAULT_MAX_TEXTURE_SIZE)
    }

    /// Create an empty backend rejecting textures with an edge above `max`
    pub fn with_max_texture_size(max: u32) -> Self {
        Self {
            textures: HashMap::new(),
            meshes: HashMap::new(),
            next_id: 1,
            frame: Vec::new(),
            scissor: None,
            viewport: (0, 0),
            projection: Matrix4::identity(),
            max_texture_size: max,
        }
    }

    /// Take the draws recorded since the last call
    pub fn take_frame(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.frame)
    }

    /// Draws recorded so far in this frame
    pub fn frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    /// Look up an uploaded texture
    pub fn texture(&self, texture: BackendTexture) -> Option<&TextureData> {
        self.textures.get(&texture)
    }

    /// Look up an uploaded mesh
    pub fn mesh(&self, mesh: BackendMesh) -> Option<&MeshData> {
        self.meshes.get(&mesh)
    }

    /// Number of live textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of live meshes
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Current viewport size
    pub const fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Current projection matrix
    pub const fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    /// Current clip rectangle
    pub const fn scissor(&self) -> Option<ScissorRect> {
        self.scissor
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for RecordingBackend {
    fn create_texture(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<BackendTexture, Box<dyn std::error::Error>> {
        if width > self.max_texture_size || height > self.max_texture_size {
            return Err(format!(
                "texture {}x{} exceeds maximum size {}",
                width, height, self.max_texture_size
            )
            .into());
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(format!("expected {} bytes of RGBA8, got {}", expected, pixels.len()).into());
        }

        let texture = BackendTexture(self.allocate_id());
        self.textures.insert(
            texture,
            TextureData {
                width,
                height,
                pixels: pixels.to_vec(),
            },
        );
        Ok(texture)
    }

    fn destroy_texture(&mut self, texture: BackendTexture) {
        self.textures.remove(&texture);
    }

    fn upload_mesh(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> Result<BackendMesh, Box<dyn std::error::Error>> {
        let mesh = BackendMesh(self.allocate_id());
        self.meshes.insert(
            mesh,
            MeshData {
                vertices: vertices.to_vec(),
                indices: indices.to_vec(),
            },
        );
        Ok(mesh)
    }

    fn destroy_mesh(&mut self, mesh: BackendMesh) {
        self.meshes.remove(&mesh);
    }

    fn draw_mesh(&mut self, mesh: BackendMesh, texture: Option<BackendTexture>, translation: Vector2<f32>) {
        if !self.meshes.contains_key(&mesh) {
            log::warn!("Draw of unknown mesh {:?} skipped", mesh);
            return;
        }
        self.frame.push(DrawCommand {
            source: DrawSource::Mesh(mesh),
            texture,
            translation,
            scissor: self.scissor,
        });
    }

    fn draw_vertices(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<BackendTexture>,
        translation: Vector2<f32>,
    ) {
        self.frame.push(DrawCommand {
            source: DrawSource::Immediate {
                vertices: vertices.to_vec(),
                indices: indices.to_vec(),
            },
            texture,
            translation,
            scissor: self.scissor,
        });
    }

    fn set_scissor(&mut self, scissor: Option<ScissorRect>) {
        self.scissor = scissor;
    }

    fn set_viewport(&mut self, width: u32, height: u32, projection: Matrix4<f32>) {
        self.viewport = (width, height);
        self.projection = projection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_size_checks() {
        let mut backend = RecordingBackend::with_max_texture_size(8);
        assert!(backend.create_texture(&[0; 16 * 16 * 4], 16, 16).is_err());
        assert!(backend.create_texture(&[0; 3], 1, 1).is_err());

        let texture = backend.create_texture(&[255; 2 * 2 * 4], 2, 2).unwrap();
        assert_eq!(backend.texture(texture).unwrap().width, 2);
        backend.destroy_texture(texture);
        assert_eq!(backend.texture_count(), 0);
    }

    #[test]
    fn test_draws_capture_scissor() {
        let mut backend = RecordingBackend::new();
        let mesh = backend.upload_mesh(&[Vertex::new(0.0, 0.0, [255; 4], 0.0, 0.0)], &[0]).unwrap();
        let rect = ScissorRect { x: 1, y: 2, width: 3, height: 4 };

        backend.set_scissor(Some(rect));
        backend.draw_mesh(mesh, None, Vector2::new(5.0, 6.0));
        backend.set_scissor(None);
        backend.draw_mesh(mesh, None, Vector2::zeros());

        let frame = backend.take_frame();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[0].scissor, Some(rect));
        assert_eq!(frame[1].scissor, None);
        assert!(backend.frame().is_empty());
    }

    #[test]
    fn test_unknown_mesh_not_drawn() {
        let mut backend = RecordingBackend::new();
        backend.draw_mesh(BackendMesh(99), None, Vector2::zeros());
        assert!(backend.frame().is_empty());
    }
}
