//! Render service over a [`RenderBackend`]
//!
//! Translates the GUI library's drawing calls into backend primitives and
//! keeps the handle tables mapping GUI-side handles to backend resources.
//! The backend and window are shared with the host; this adapter never owns
//! them.

use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::{Matrix4, Vector2};

use crate::error::{GlueError, GlueResult};
use crate::foundation::collections::HandleMap;
use crate::gui::geometry::{tag, GeometryHandle, TextureHandle, Vertex};
use crate::gui::interfaces::{FileInterface, RenderInterface};
use crate::platform::window::WindowSurface;
use crate::render::backend::{BackendMesh, BackendTexture, RenderBackend, ScissorRect};

const READ_CHUNK: usize = 4096;

struct TextureEntry {
    texture: BackendTexture,
    dimensions: Vector2<i32>,
}

struct CompiledGeometry {
    mesh: BackendMesh,
    texture: Option<TextureHandle>,
}

/// [`RenderInterface`] implemented over a shared render backend and window
pub struct BackendRenderInterface<B: RenderBackend, W: WindowSurface> {
    backend: Rc<RefCell<B>>,
    window: Rc<RefCell<W>>,
    files: Rc<RefCell<dyn FileInterface>>,
    textures: HandleMap<tag::Texture, TextureEntry>,
    geometry: HandleMap<tag::Geometry, CompiledGeometry>,
    scissor_enabled: bool,
    scissor: ScissorRect,
}

impl<B: RenderBackend, W: WindowSurface> BackendRenderInterface<B, W> {
    /// Create the adapter; textures named by source are read through `files`
    pub fn new(backend: Rc<RefCell<B>>, window: Rc<RefCell<W>>, files: Rc<RefCell<dyn FileInterface>>) -> Self {
        Self {
            backend,
            window,
            files,
            textures: HandleMap::new(),
            geometry: HandleMap::new(),
            scissor_enabled: false,
            scissor: ScissorRect {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            },
        }
    }

    /// Number of live textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of live compiled geometries
    pub fn geometry_count(&self) -> usize {
        self.geometry.len()
    }

    /// Size of a live texture
    pub fn texture_dimensions(&self, texture: TextureHandle) -> Option<Vector2<i32>> {
        self.textures.get(texture).map(|entry| entry.dimensions)
    }

    /// Backend texture behind a handle
    pub fn backend_texture(&self, texture: TextureHandle) -> Option<BackendTexture> {
        self.textures.get(texture).map(|entry| entry.texture)
    }

    fn resolve_texture(&self, texture: Option<TextureHandle>) -> Result<Option<BackendTexture>, TextureHandle> {
        match texture {
            None => Ok(None),
            Some(handle) => self.textures.get(handle).map(|entry| Some(entry.texture)).ok_or(handle),
        }
    }

    fn read_source(&self, source: &str) -> GlueResult<Vec<u8>> {
        let mut files = self.files.borrow_mut();
        let file = files.open(source).ok_or_else(|| {
            GlueError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("cannot open texture source '{source}'"),
            ))
        })?;

        let mut bytes = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let read = files.read(&mut chunk, file);
            if read == 0 {
                break;
            }
            bytes.extend_from_slice(&chunk[..read]);
        }
        files.close(file);
        Ok(bytes)
    }

    fn upload(&mut self, pixels: &[u8], width: u32, height: u32) -> GlueResult<TextureHandle> {
        let texture = self
            .backend
            .borrow_mut()
            .create_texture(pixels, width, height)
            .map_err(|e| GlueError::Texture(e.to_string()))?;

        #[allow(clippy::cast_possible_wrap)]
        let dimensions = Vector2::new(width as i32, height as i32);
        let handle = self.textures.insert(TextureEntry { texture, dimensions });
        log::debug!("Uploaded {}x{} texture as {:?}", width, height, handle);
        Ok(handle)
    }

    fn load_texture_from(&mut self, source: &str) -> GlueResult<(TextureHandle, Vector2<i32>)> {
        let bytes = self.read_source(source)?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| GlueError::Texture(format!("failed to decode '{source}': {e}")))?
            .to_rgba8();
        let (width, height) = image.dimensions();

        let handle = self.upload(image.as_raw(), width, height)?;
        #[allow(clippy::cast_possible_wrap)]
        let dimensions = Vector2::new(width as i32, height as i32);
        Ok((handle, dimensions))
    }
}

fn validate_geometry(vertices: &[Vertex], indices: &[u32]) -> bool {
    if vertices.is_empty() || indices.is_empty() {
        log::warn!("Rejected empty geometry ({} vertices, {} indices)", vertices.len(), indices.len());
        return false;
    }
    if let Some(bad) = indices.iter().find(|&&index| index as usize >= vertices.len()) {
        log::warn!("Rejected geometry: index {} out of range for {} vertices", bad, vertices.len());
        return false;
    }
    true
}

impl<B: RenderBackend, W: WindowSurface> RenderInterface for BackendRenderInterface<B, W> {
    fn compile_geometry(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<TextureHandle>,
    ) -> Option<GeometryHandle> {
        if !validate_geometry(vertices, indices) {
            return None;
        }
        if let Err(handle) = self.resolve_texture(texture) {
            log::warn!("Rejected geometry referencing unknown texture {:?}", handle);
            return None;
        }

        let mesh = match self.backend.borrow_mut().upload_mesh(vertices, indices) {
            Ok(mesh) => mesh,
            Err(e) => {
                log::warn!("Backend rejected geometry: {}", e);
                return None;
            }
        };

        let handle = self.geometry.insert(CompiledGeometry { mesh, texture });
        log::debug!("Compiled {} vertices / {} indices as {:?}", vertices.len(), indices.len(), handle);
        Some(handle)
    }

    fn render_compiled_geometry(&mut self, geometry: GeometryHandle, translation: Vector2<f32>) {
        let Some(compiled) = self.geometry.get(geometry) else {
            log::warn!("Render of unknown geometry {:?}", geometry);
            return;
        };

        let texture = self.resolve_texture(compiled.texture).unwrap_or_else(|handle| {
            log::warn!("Texture {:?} released before its geometry; drawing untextured", handle);
            None
        });
        self.backend.borrow_mut().draw_mesh(compiled.mesh, texture, translation);
    }

    fn release_compiled_geometry(&mut self, geometry: GeometryHandle) {
        match self.geometry.remove(geometry) {
            Some(compiled) => self.backend.borrow_mut().destroy_mesh(compiled.mesh),
            None => log::warn!("Release of unknown geometry {:?}", geometry),
        }
    }

    fn render_geometry(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<TextureHandle>,
        translation: Vector2<f32>,
    ) {
        if !validate_geometry(vertices, indices) {
            return;
        }
        match self.resolve_texture(texture) {
            Ok(texture) => {
                self.backend.borrow_mut().draw_vertices(vertices, indices, texture, translation);
            }
            Err(handle) => log::warn!("Skipped geometry referencing unknown texture {:?}", handle),
        }
    }

    fn enable_scissor_region(&mut self, enable: bool) {
        self.scissor_enabled = enable;
        let scissor = enable.then_some(self.scissor);
        self.backend.borrow_mut().set_scissor(scissor);
    }

    fn set_scissor_region(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.scissor = ScissorRect { x, y, width, height };
        if self.scissor_enabled {
            self.backend.borrow_mut().set_scissor(Some(self.scissor));
        }
    }

    fn load_texture(&mut self, source: &str) -> Option<(TextureHandle, Vector2<i32>)> {
        match self.load_texture_from(source) {
            Ok(loaded) => Some(loaded),
            Err(e) => {
                log::warn!("Failed to load texture '{}': {}", source, e);
                None
            }
        }
    }

    fn generate_texture(&mut self, pixels: &[u8], dimensions: Vector2<i32>) -> Option<TextureHandle> {
        let (Ok(width), Ok(height)) = (u32::try_from(dimensions.x), u32::try_from(dimensions.y)) else {
            log::warn!("Rejected texture with negative dimensions {:?}", dimensions);
            return None;
        };
        if width == 0 || height == 0 {
            log::warn!("Rejected empty {}x{} texture", width, height);
            return None;
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            log::warn!("Rejected texture: {} bytes for {}x{} RGBA8 (expected {})", pixels.len(), width, height, expected);
            return None;
        }

        match self.upload(pixels, width, height) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("Failed to generate texture: {}", e);
                None
            }
        }
    }

    fn release_texture(&mut self, texture: TextureHandle) {
        match self.textures.remove(texture) {
            Some(entry) => self.backend.borrow_mut().destroy_texture(entry.texture),
            None => log::warn!("Release of unknown texture {:?}", texture),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn resize(&mut self) {
        let (width, height) = self.window.borrow().framebuffer_size();
        if width == 0 || height == 0 {
            // Minimized: keep the last projection until the window comes back
            log::debug!("Ignoring resize to empty framebuffer {}x{}", width, height);
            return;
        }
        // Window pixels: (0, 0) top-left, (width, height) bottom-right
        let projection = Matrix4::new_orthographic(0.0, width as f32, height as f32, 0.0, -1.0, 1.0);
        self.backend.borrow_mut().set_viewport(width, height, projection);
        log::debug!("Render viewport resized to {}x{}", width, height);
    }
}

impl<B: RenderBackend, W: WindowSurface> Drop for BackendRenderInterface<B, W> {
    fn drop(&mut self) {
        let Ok(mut backend) = self.backend.try_borrow_mut() else {
            log::error!("Render backend busy during shutdown; leaking GUI resources");
            return;
        };
        for compiled in self.geometry.drain() {
            backend.destroy_mesh(compiled.mesh);
        }
        for entry in self.textures.drain() {
            backend.destroy_texture(entry.texture);
        }
    }
}
