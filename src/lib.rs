//! # range-views
//!
//! range-views is a lazy-sequence library built around two interoperable
//! traversal protocols: a push protocol, where a range drives a [`Sink`]
//! callback and honors an early-break signal, and an index protocol, where
//! opaque per-range index tokens are incremented, decremented, and advanced
//! explicitly. On top of the protocols sit composable non-copying views
//! and an in-place container-compaction algorithm.
//!
//! ## Features
//! - Capability-tiered index protocol: forward, bidirectional, and
//!   random-access ranges, with the tier preserved through composition
//! - Push-mode traversal with full short-circuit through arbitrarily
//!   nested views
//! - Filter and cartesian-product views over any conforming source
//! - Adaptation of any common range into a standard `Iterator`, double
//!   ended when the range is bidirectional, with an exact remaining count
//!   for random-access ranges
//! - In-place compaction of `Vec`, `VecDeque`, `LinkedList`, and
//!   `BTreeSet` with a strategy picked per container, one predicate
//!   evaluation per element, and a guaranteed finalize on unwind
//!
//! ## Usage
//! ```
//! use range_views::prelude::*;
//!
//! let v = vec![1, 2, 3, 4, 5, 6];
//! let evens: Vec<i32> = filter(SliceRange::new(&v), |n: &&i32| **n % 2 == 0)
//!     .iter()
//!     .copied()
//!     .collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let mut v = v;
//! filter_inplace(&mut v, |n| n % 2 == 0);
//! assert_eq!(v, evens);
//! ```
//!
//! [`Sink`]: crate::traverse::Sink

pub mod compact;
pub mod range_error;
pub mod source;
pub mod traverse;
pub mod view;

pub use range_error::RangeError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::compact::{InPlaceFilter, filter_inplace, filter_inplace_from};
    pub use crate::range_error::RangeError;
    pub use crate::source::{IotaRange, IterRange, SliceRange, SliceRangeMut, iota};
    pub use crate::traverse::{
        BidirectionalRange, CommonRange, Cursor, Flow, IndexRange, IndexRangeExt, MidpointRange,
        PushRange, RandomAccessRange, RangeIter, Sink, SliceCursorMut, TraversalTier, each,
        for_each, from_fn, try_for_each,
    };
    pub use crate::view::{CartesianProduct, Filter, cartesian_product, filter};
}
