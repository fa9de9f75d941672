//! Stack safety for the recursive phases of the Jam toolchain.
//!
//! The parser, context checker, evaluator and value printer all recurse on
//! the shape of the program (or of the data it builds). Two guards keep that
//! recursion from taking the process down:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand, so deep
//!   but finite nesting succeeds.
//! - [`DepthCounter`] bounds the nesting depth itself, turning runaway
//!   recursion (an eager self-referential list, say) into a recoverable
//!   error instead of unbounded memory growth.
//!
//! On `wasm32` the stack cannot be grown and the first guard is a
//! passthrough.

use std::cell::Cell;
use std::fmt;

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f` with at least [`RED_ZONE`] bytes of stack available.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// The configured depth limit was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    pub limit: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maximum recursion depth of {} exceeded", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}

/// Tracks how deep a single-threaded recursive walk currently is.
///
/// `limit: None` never fails and only records the depth. The counter is
/// shared by reference between all frames of one walk; each frame holds a
/// [`DepthGuard`] that gives its level back when dropped, including on
/// early return through `?`.
#[derive(Debug, Default)]
pub struct DepthCounter {
    current: Cell<usize>,
    deepest: Cell<usize>,
    limit: Option<usize>,
}

impl DepthCounter {
    pub fn new(limit: Option<usize>) -> Self {
        DepthCounter {
            current: Cell::new(0),
            deepest: Cell::new(0),
            limit,
        }
    }

    /// Enter one more level of recursion.
    pub fn enter(&self) -> Result<DepthGuard<'_>, DepthExceeded> {
        let depth = self.current.get();
        if let Some(limit) = self.limit {
            if depth >= limit {
                return Err(DepthExceeded { limit });
            }
        }
        let depth = depth.saturating_add(1);
        self.current.set(depth);
        if depth > self.deepest.get() {
            self.deepest.set(depth);
        }
        Ok(DepthGuard { counter: self })
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.current.get()
    }

    /// Deepest level reached so far.
    #[inline]
    pub fn high_water_mark(&self) -> usize {
        self.deepest.get()
    }
}

/// One level held on a [`DepthCounter`].
#[must_use = "the depth is released as soon as the guard is dropped"]
pub struct DepthGuard<'a> {
    counter: &'a DepthCounter,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        let depth = self.counter.current.get();
        debug_assert!(depth > 0, "DepthGuard dropped on an empty counter");
        self.counter.current.set(depth.saturating_sub(1));
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
