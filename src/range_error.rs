//! RangeError: unified error type for range-views public APIs.
//!
//! Most protocol operations treat misuse (dereferencing an exhausted cursor,
//! comparing cursors from different owning ranges) as programming errors and
//! fail fast via assertions. The `try_*` constructors and queries that can
//! fail for data-dependent reasons return this type instead.

use thiserror::Error;

/// Unified error type for fallible range-views operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A counting range was requested with its upper bound below its lower bound.
    #[error("reversed bounds: lower bound is above upper bound")]
    ReversedBounds,
    /// A computed size (e.g. a cartesian-product size) does not fit in `usize`.
    #[error("size overflow: computed range size exceeds usize")]
    SizeOverflow,
}
