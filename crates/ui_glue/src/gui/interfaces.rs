//! Service interfaces the host supplies to the GUI library
//!
//! The GUI library never touches the platform directly: time, file access and
//! drawing all go through these traits. Implementations live in
//! [`crate::services`].

use std::io::SeekFrom;

use nalgebra::Vector2;

use super::geometry::{FileHandle, GeometryHandle, TextureHandle, Vertex};

/// Severity of a message emitted by the GUI library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Always shown
    Always,
    /// Recoverable error
    Error,
    /// Failed internal assertion
    Assert,
    /// Warning
    Warning,
    /// Informational
    Info,
    /// Debug detail
    Debug,
}

/// Time and diagnostics services
pub trait SystemInterface {
    /// Seconds elapsed since the platform timer started
    fn elapsed_time(&self) -> f32;

    /// Handle a diagnostic from the GUI library
    ///
    /// Returns `true` to continue execution, `false` to break into a debugger
    /// where the library supports it.
    fn log_message(&self, _level: LogLevel, _message: &str) -> bool {
        true
    }

    /// Translate a user-visible string; identity by default
    fn translate_string(&self, input: &str) -> String {
        input.to_string()
    }
}

/// Origin for [`FileInterface::seek`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// From the start of the file
    Start,
    /// From the current position
    Current,
    /// From the end of the file
    End,
}

impl SeekOrigin {
    /// Combine with an offset into a [`SeekFrom`]
    ///
    /// Returns `None` for a negative offset from the start.
    pub fn with_offset(self, offset: i64) -> Option<SeekFrom> {
        match self {
            Self::Start => u64::try_from(offset).ok().map(SeekFrom::Start),
            Self::Current => Some(SeekFrom::Current(offset)),
            Self::End => Some(SeekFrom::End(offset)),
        }
    }
}

/// Read-only file access used by the GUI library's asset loading
pub trait FileInterface {
    /// Open a file for reading
    fn open(&mut self, path: &str) -> Option<FileHandle>;

    /// Close a previously opened file
    fn close(&mut self, file: FileHandle);

    /// Read into `buffer`, returning the number of bytes actually read
    fn read(&mut self, buffer: &mut [u8], file: FileHandle) -> usize;

    /// Move the read position; `true` when the seek succeeded
    fn seek(&mut self, file: FileHandle, offset: i64, origin: SeekOrigin) -> bool;

    /// Current read position
    fn tell(&mut self, file: FileHandle) -> usize;

    /// Total length of the file, leaving the read position unchanged
    fn length(&mut self, file: FileHandle) -> usize {
        let current = self.tell(file);
        if !self.seek(file, 0, SeekOrigin::End) {
            return 0;
        }
        let length = self.tell(file);
        let restore = i64::try_from(current).unwrap_or(i64::MAX);
        if !self.seek(file, restore, SeekOrigin::Start) {
            log::warn!("Could not restore position {} after measuring {:?}", current, file);
            return 0;
        }
        length
    }
}

/// Drawing services
pub trait RenderInterface {
    /// Compile geometry the library expects to draw repeatedly
    fn compile_geometry(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<TextureHandle>,
    ) -> Option<GeometryHandle>;

    /// Draw compiled geometry offset by `translation`
    fn render_compiled_geometry(&mut self, geometry: GeometryHandle, translation: Vector2<f32>);

    /// Release compiled geometry
    fn release_compiled_geometry(&mut self, geometry: GeometryHandle);

    /// Draw geometry once without compiling it
    fn render_geometry(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
        texture: Option<TextureHandle>,
        translation: Vector2<f32>,
    );

    /// Enable or disable clipping to the scissor region
    fn enable_scissor_region(&mut self, enable: bool);

    /// Set the scissor region in window pixels
    fn set_scissor_region(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Load a texture from a named source, returning its handle and size
    fn load_texture(&mut self, source: &str) -> Option<(TextureHandle, Vector2<i32>)>;

    /// Build a texture from tightly packed RGBA8 pixels
    fn generate_texture(&mut self, pixels: &[u8], dimensions: Vector2<i32>) -> Option<TextureHandle>;

    /// Release a texture
    fn release_texture(&mut self, texture: TextureHandle);

    /// Recompute viewport and projection after the window changed size
    fn resize(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_origin_conversion() {
        assert_eq!(SeekOrigin::Start.with_offset(4), Some(SeekFrom::Start(4)));
        assert_eq!(SeekOrigin::Start.with_offset(-1), None);
        assert_eq!(SeekOrigin::Current.with_offset(-2), Some(SeekFrom::Current(-2)));
        assert_eq!(SeekOrigin::End.with_offset(0), Some(SeekFrom::End(0)));
    }

    /// Twelve-byte file whose absolute seeks fail once the end has been reached
    struct StuckAtEnd {
        position: usize,
    }

    impl FileInterface for StuckAtEnd {
        fn open(&mut self, _path: &str) -> Option<FileHandle> {
            None
        }

        fn close(&mut self, _file: FileHandle) {}

        fn read(&mut self, _buffer: &mut [u8], _file: FileHandle) -> usize {
            0
        }

        fn seek(&mut self, _file: FileHandle, _offset: i64, origin: SeekOrigin) -> bool {
            match origin {
                SeekOrigin::End => {
                    self.position = 12;
                    true
                }
                _ => false,
            }
        }

        fn tell(&mut self, _file: FileHandle) -> usize {
            self.position
        }
    }

    #[test]
    fn test_length_fails_when_position_cannot_be_restored() {
        let mut file = StuckAtEnd { position: 3 };
        let handle = FileHandle::new(slotmap::DefaultKey::default());
        assert_eq!(file.length(handle), 0);
    }
}
