//! GL is linked statically on this target; every symbol is present

use super::{GlEntryPoint, ProcLoader};

pub(super) fn resolve<L: ProcLoader + ?Sized>(_loader: &mut L, _name: &str) -> Option<GlEntryPoint> {
    Some(GlEntryPoint::Linked)
}
