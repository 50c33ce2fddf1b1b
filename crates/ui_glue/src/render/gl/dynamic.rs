//! Runtime symbol lookup through the context's procedure loader

use super::{GlEntryPoint, ProcLoader};

pub(super) fn resolve<L: ProcLoader + ?Sized>(loader: &mut L, name: &str) -> Option<GlEntryPoint> {
    loader.proc_address(name).map(GlEntryPoint::Dynamic)
}
