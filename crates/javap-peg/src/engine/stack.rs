//! Native stack growth for deeply nested input.
//!
//! Rule calls recurse on the native stack. When less than [`RED_ZONE`]
//! remains, another [`GROWTH`] segment is allocated before the call proceeds.
//! The recursion limit in [`super::Limits`] still bounds total depth.

const RED_ZONE: usize = 128 * 1024;

const GROWTH: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
