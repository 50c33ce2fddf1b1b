//! GL capability table
//!
//! Every GL entry point a GL render backend needs is resolved once at startup
//! and stored in a [`GlFunctionTable`]. How an entry point is resolved depends
//! on the target and is chosen at build time:
//!
//! - desktop targets look symbols up through the window's context loader
//! - Android and iOS link GL statically, so every symbol is already present

use std::num::NonZeroUsize;

use crate::error::{GlueError, GlueResult};

#[cfg(not(any(target_os = "android", target_os = "ios")))]
#[path = "dynamic.rs"]
mod platform;

#[cfg(any(target_os = "android", target_os = "ios"))]
#[path = "linked.rs"]
mod platform;

/// Entry points a GL 2.1 context must provide; checked once at startup
pub const REQUIRED_FUNCTIONS: &[&str] = &[
    "glBindTexture",
    "glBlendFunc",
    "glColorPointer",
    "glDeleteTextures",
    "glDisable",
    "glDisableClientState",
    "glDrawElements",
    "glEnable",
    "glEnableClientState",
    "glGenTextures",
    "glLoadIdentity",
    "glMatrixMode",
    "glOrtho",
    "glPopMatrix",
    "glPushMatrix",
    "glScissor",
    "glTexCoordPointer",
    "glTexImage2D",
    "glTexParameteri",
    "glTranslatef",
    "glVertexPointer",
    "glViewport",
];

/// Source of GL procedure addresses
pub trait ProcLoader {
    /// Address of `name`, or `None` when the context does not provide it
    fn proc_address(&mut self, name: &str) -> Option<NonZeroUsize>;
}

impl ProcLoader for glfw::Window {
    fn proc_address(&mut self, name: &str) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.get_proc_address(name) as usize)
    }
}

/// Adapts a closure into a [`ProcLoader`]
pub struct FnLoader<F>(pub F);

impl<F> ProcLoader for FnLoader<F>
where
    F: FnMut(&str) -> Option<NonZeroUsize>,
{
    fn proc_address(&mut self, name: &str) -> Option<NonZeroUsize> {
        (self.0)(name)
    }
}

/// How a single entry point was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlEntryPoint {
    /// Looked up at runtime
    Dynamic(NonZeroUsize),
    /// Provided by the static linker
    Linked,
}

/// Resolved GL entry points, in [`REQUIRED_FUNCTIONS`] order
#[derive(Debug, Clone)]
pub struct GlFunctionTable {
    entries: Vec<(&'static str, GlEntryPoint)>,
}

impl GlFunctionTable {
    /// Resolve every required entry point
    ///
    /// Stops at the first missing function and reports it by name.
    pub fn load<L: ProcLoader + ?Sized>(loader: &mut L) -> GlueResult<Self> {
        Self::load_functions(loader, REQUIRED_FUNCTIONS)
    }

    /// Resolve an explicit list of entry points
    pub fn load_functions<L: ProcLoader + ?Sized>(
        loader: &mut L,
        names: &[&'static str],
    ) -> GlueResult<Self> {
        let mut entries = Vec::with_capacity(names.len());
        for &name in names {
            match platform::resolve(loader, name) {
                Some(entry) => entries.push((name, entry)),
                None => {
                    log::error!("Couldn't load GL function {}", name);
                    return Err(GlueError::MissingGlFunction { name });
                }
            }
        }

        log::debug!("Resolved {} GL entry points", entries.len());
        Ok(Self { entries })
    }

    /// Look up a resolved entry point by name
    pub fn get(&self, name: &str) -> Option<GlEntryPoint> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, entry)| *entry)
    }

    /// Number of resolved entry points
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_address(name: &str) -> Option<NonZeroUsize> {
        NonZeroUsize::new(0x1000 + name.len())
    }

    #[test]
    fn test_all_functions_resolve() {
        let mut loader = FnLoader(fake_address);
        let table = GlFunctionTable::load(&mut loader).unwrap();
        assert_eq!(table.len(), REQUIRED_FUNCTIONS.len());
        assert!(table.get("glViewport").is_some());
        assert!(table.get("glNotAFunction").is_none());
    }

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    #[test]
    fn test_missing_function_reported_by_name() {
        let mut loader = FnLoader(|name: &str| {
            if name == "glScissor" {
                None
            } else {
                fake_address(name)
            }
        });
        let err = GlFunctionTable::load(&mut loader).unwrap_err();
        assert!(matches!(err, GlueError::MissingGlFunction { name: "glScissor" }));
        assert_eq!(err.to_string(), "couldn't load GL function glScissor");
    }

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    #[test]
    fn test_dynamic_entries_keep_address() {
        let mut loader = FnLoader(fake_address);
        let table = GlFunctionTable::load_functions(&mut loader, &["glEnable"]).unwrap();
        assert_eq!(table.get("glEnable"), Some(GlEntryPoint::Dynamic(NonZeroUsize::new(0x1008).unwrap())));
    }
}
