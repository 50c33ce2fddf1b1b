//! File service backed by the host filesystem

use std::fs::File;
use std::io::{ErrorKind, Read, Seek};
use std::path::{Path, PathBuf};

use crate::foundation::collections::HandleMap;
use crate::gui::geometry::{tag, FileHandle};
use crate::gui::interfaces::{FileInterface, SeekOrigin};

/// [`FileInterface`] over `std::fs`
///
/// Relative paths are resolved against an optional asset root. Files still
/// open when the adapter is dropped are closed with it.
#[derive(Default)]
pub struct FsFileInterface {
    root: Option<PathBuf>,
    files: HandleMap<tag::File, File>,
}

impl FsFileInterface {
    /// Resolve paths relative to the working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            files: HandleMap::new(),
        }
    }

    /// Number of files currently open
    pub fn open_count(&self) -> usize {
        self.files.len()
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Directories open fine on some platforms but have no readable contents
fn regular_file(file: File, path: &Path) -> std::io::Result<File> {
    if file.metadata()?.is_file() {
        Ok(file)
    } else {
        Err(std::io::Error::new(
            ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        ))
    }
}

impl FileInterface for FsFileInterface {
    fn open(&mut self, path: &str) -> Option<FileHandle> {
        let resolved = self.resolve(path);
        match File::open(&resolved).and_then(|file| regular_file(file, &resolved)) {
            Ok(file) => {
                let handle = self.files.insert(file);
                log::debug!("Opened {:?} as {:?}", resolved, handle);
                Some(handle)
            }
            Err(e) => {
                log::warn!("Failed to open {:?}: {}", resolved, e);
                None
            }
        }
    }

    fn close(&mut self, file: FileHandle) {
        if self.files.remove(file).is_none() {
            log::warn!("Close of unknown file {:?}", file);
        }
    }

    fn read(&mut self, buffer: &mut [u8], file: FileHandle) -> usize {
        let Some(handle) = self.files.get_mut(file) else {
            log::warn!("Read from unknown file {:?}", file);
            return 0;
        };

        // Keep reading until the buffer is full or the file ends
        let mut total = 0;
        while total < buffer.len() {
            match handle.read(&mut buffer[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    log::warn!("Read from {:?} failed after {} bytes: {}", file, total, e);
                    break;
                }
            }
        }
        total
    }

    fn seek(&mut self, file: FileHandle, offset: i64, origin: SeekOrigin) -> bool {
        let Some(handle) = self.files.get_mut(file) else {
            log::warn!("Seek on unknown file {:?}", file);
            return false;
        };
        let Some(position) = origin.with_offset(offset) else {
            log::warn!("Invalid seek {:?}{:+} on {:?}", origin, offset, file);
            return false;
        };

        match handle.seek(position) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Seek {:?} on {:?} failed: {}", position, file, e);
                false
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn tell(&mut self, file: FileHandle) -> usize {
        let Some(handle) = self.files.get_mut(file) else {
            log::warn!("Tell on unknown file {:?}", file);
            return 0;
        };
        match handle.stream_position() {
            Ok(position) => position as usize,
            Err(e) => {
                log::warn!("Tell on {:?} failed: {}", file, e);
                0
            }
        }
    }
}
