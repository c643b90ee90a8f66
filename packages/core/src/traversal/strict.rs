//! Thread-scoped strict retrieval
//!
//! While a strict [`Mapper`](crate::mapper::Mapper) runs, every retrieval on
//! the same thread behaves as if `strict` had been requested. Scopes nest.

use std::cell::Cell;

thread_local! {
    static STRICT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Whether a strict scope is active on this thread
#[inline]
#[must_use]
pub fn is_active() -> bool {
    STRICT_DEPTH.with(|depth| depth.get() > 0)
}

/// Run `f` with strict retrieval enabled on this thread
pub fn scoped<R>(f: impl FnOnce() -> R) -> R {
    let _guard = StrictGuard::enter();
    f()
}

/// Keeps a strict scope open until dropped
///
/// Dropping during unwinding closes the scope as well.
#[must_use]
pub struct StrictGuard {
    _private: (),
}

impl StrictGuard {
    pub fn enter() -> Self {
        STRICT_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self { _private: () }
    }
}

impl Drop for StrictGuard {
    fn drop(&mut self) {
        STRICT_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
