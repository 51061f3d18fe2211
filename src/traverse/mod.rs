//! The two boundary traversal protocols and their adapters.
//!
//! - [`push`]: callback-driven iteration with a synchronous continue/break
//!   signal ([`flow`]).
//! - [`index`]: cursor-driven iteration through opaque per-range indices,
//!   tiered by capability.
//! - [`cursor`], [`iter`], [`ext`]: cursors and std-iterator adaptation on top
//!   of the index protocol.

pub mod cursor;
pub mod ext;
pub mod flow;
pub mod index;
pub mod iter;
pub mod push;

pub use cursor::{Cursor, SliceCursorMut};
pub use ext::IndexRangeExt;
pub use flow::{EachSink, Flow, FnSink, Sink, each, from_fn};
pub use index::{
    BidirectionalRange, CommonRange, IndexRange, MidpointRange, RandomAccessRange, TraversalTier,
};
pub use iter::RangeIter;
pub use push::{PushRange, for_each, try_for_each};
