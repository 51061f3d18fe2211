//! Index protocol: cursor-driven range traversal.
//!
//! This module defines the [`IndexRange`] trait and its capability tiers. An
//! index is an opaque position token, meaningful only relative to the range
//! that issued it; a composite range's index is a tuple of its sources'
//! indices. Which optional operations a range supports determines its
//! traversal tier: forward-only if it can only increment, bidirectional if it
//! can also decrement, random-access if it can advance by arbitrary offsets
//! and measure distances.
//!
//! All operations are `&self`: traversal never mutates the range, only the
//! index handed back to the caller.

use std::fmt::Debug;

/// Classification of a range's traversal capability.
///
/// The capability itself is carried by which super-traits of [`IndexRange`] a
/// type implements; the enum exists so adaptors can declare (and tests can
/// check) the tier they preserve. A filter view, for example, caps its base's
/// tier at `Bidirectional`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraversalTier {
    Forward,
    Bidirectional,
    RandomAccess,
}

impl TraversalTier {
    /// The weaker of two tiers, usable in const contexts.
    #[inline]
    pub const fn min_with(self, other: TraversalTier) -> TraversalTier {
        if (self as u8) <= (other as u8) { self } else { other }
    }
}

/// Core cursor-driven traversal contract.
///
/// # Index validity
/// Indices obtained from one range instance are meaningless for any other
/// instance, including clones. Operations on foreign or exhausted indices are
/// programming errors; implementations fail fast with debug assertions rather
/// than reporting recoverable errors.
pub trait IndexRange {
    /// Opaque position token issued by this range.
    type Index: Clone + PartialEq + Debug;
    /// Element view produced by [`dereference_index`](Self::dereference_index).
    type Elem;

    /// Advisory traversal tier; adaptors compute theirs from their base's.
    const TIER: TraversalTier = TraversalTier::Forward;

    /// Index of the first element (or the end position when empty).
    fn begin_index(&self) -> Self::Index;
    /// Whether `idx` is one past the last element.
    fn at_end_index(&self, idx: &Self::Index) -> bool;
    /// Step `idx` forward by one element. `idx` must not be at the end.
    fn increment_index(&self, idx: &mut Self::Index);
    /// The element at `idx`. `idx` must not be at the end.
    fn dereference_index(&self, idx: &Self::Index) -> Self::Elem;
}

/// Ranges with a fixed end representation ("common" ranges).
///
/// `end_index()` equals the index reached by incrementing past the last
/// element, so `[begin_index, end_index)` delimits the whole range.
pub trait CommonRange: IndexRange {
    fn end_index(&self) -> Self::Index;
}

/// Ranges whose indices can step backward.
pub trait BidirectionalRange: IndexRange {
    /// Step `idx` back by one element. `idx` must not be at the begin position.
    fn decrement_index(&self, idx: &mut Self::Index);
}

/// Ranges supporting arbitrary-offset stepping and distance measurement.
pub trait RandomAccessRange: BidirectionalRange + CommonRange {
    /// Step `idx` by `n` elements (negative steps backward). The result must
    /// stay within `[begin_index, end_index]`.
    fn advance_index(&self, idx: &mut Self::Index, n: isize);
    /// Number of increments leading from `from` to `to`; negative when `to`
    /// precedes `from`.
    fn distance_to_index(&self, from: &Self::Index, to: &Self::Index) -> isize;
    /// Total number of elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ranges that can bisect a sub-interval of their indices.
///
/// Adaptors may provide only an approximate midpoint (the filter view walks
/// the raw midpoint back to the nearest kept element); consumers relying on
/// `middle_point` for balanced search must tolerate that.
pub trait MidpointRange: BidirectionalRange {
    /// Move `idx` to a position roughly halfway between `idx` and `idx_end`.
    /// `idx` must precede `idx_end`; afterwards `idx` stays in `[idx, idx_end)`.
    fn middle_point(&self, idx: &mut Self::Index, idx_end: &Self::Index);
}

impl<R: IndexRange> IndexRange for &R {
    type Index = R::Index;
    type Elem = R::Elem;

    const TIER: TraversalTier = R::TIER;

    #[inline]
    fn begin_index(&self) -> Self::Index {
        (**self).begin_index()
    }
    #[inline]
    fn at_end_index(&self, idx: &Self::Index) -> bool {
        (**self).at_end_index(idx)
    }
    #[inline]
    fn increment_index(&self, idx: &mut Self::Index) {
        (**self).increment_index(idx)
    }
    #[inline]
    fn dereference_index(&self, idx: &Self::Index) -> Self::Elem {
        (**self).dereference_index(idx)
    }
}

impl<R: CommonRange> CommonRange for &R {
    #[inline]
    fn end_index(&self) -> Self::Index {
        (**self).end_index()
    }
}

impl<R: BidirectionalRange> BidirectionalRange for &R {
    #[inline]
    fn decrement_index(&self, idx: &mut Self::Index) {
        (**self).decrement_index(idx)
    }
}

impl<R: RandomAccessRange> RandomAccessRange for &R {
    #[inline]
    fn advance_index(&self, idx: &mut Self::Index, n: isize) {
        (**self).advance_index(idx, n)
    }
    #[inline]
    fn distance_to_index(&self, from: &Self::Index, to: &Self::Index) -> isize {
        (**self).distance_to_index(from, to)
    }
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<R: MidpointRange> MidpointRange for &R {
    #[inline]
    fn middle_point(&self, idx: &mut Self::Index, idx_end: &Self::Index) {
        (**self).middle_point(idx, idx_end)
    }
}
