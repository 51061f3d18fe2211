//! Counting ranges over primitive integers.
//!
//! [`IotaRange`] enumerates the half-open interval `[lo, hi)` by value; its
//! index and element types are both the integer itself. Distance and advance
//! are signed-correct even for unsigned integer types.

use num_traits::{PrimInt, ToPrimitive};
use std::fmt::Debug;

use crate::range_error::RangeError;
use crate::traverse::flow::{Flow, Sink};
use crate::traverse::index::{
    BidirectionalRange, CommonRange, IndexRange, MidpointRange, RandomAccessRange, TraversalTier,
};
use crate::traverse::push::PushRange;

/// Counting range over `[lo, hi)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IotaRange<T> {
    lo: T,
    hi: T,
}

impl<T: PrimInt + Debug> IotaRange<T> {
    /// Construct `[lo, hi)`. Panics when `hi < lo`.
    pub fn new(lo: T, hi: T) -> Self {
        assert!(lo <= hi, "reversed iota bounds: {lo:?} > {hi:?}");
        IotaRange { lo, hi }
    }

    /// Fallible alternative to [`new`](Self::new).
    pub fn try_new(lo: T, hi: T) -> Result<Self, RangeError> {
        if lo <= hi {
            Ok(IotaRange { lo, hi })
        } else {
            Err(RangeError::ReversedBounds)
        }
    }

    #[inline]
    fn signed_gap(from: T, to: T) -> isize {
        if to >= from {
            (to - from).to_isize().expect("iota distance fits isize")
        } else {
            -(from - to).to_isize().expect("iota distance fits isize")
        }
    }
}

/// Counting range over `[lo, hi)`; panics when `hi < lo`.
#[inline]
pub fn iota<T: PrimInt + Debug>(lo: T, hi: T) -> IotaRange<T> {
    IotaRange::new(lo, hi)
}

impl<T: PrimInt + Debug> IndexRange for IotaRange<T> {
    type Index = T;
    type Elem = T;

    const TIER: TraversalTier = TraversalTier::RandomAccess;

    #[inline]
    fn begin_index(&self) -> T {
        self.lo
    }
    #[inline]
    fn at_end_index(&self, idx: &T) -> bool {
        *idx == self.hi
    }
    #[inline]
    fn increment_index(&self, idx: &mut T) {
        debug_assert!(*idx < self.hi);
        *idx = *idx + T::one();
    }
    #[inline]
    fn dereference_index(&self, idx: &T) -> T {
        *idx
    }
}

impl<T: PrimInt + Debug> CommonRange for IotaRange<T> {
    #[inline]
    fn end_index(&self) -> T {
        self.hi
    }
}

impl<T: PrimInt + Debug> BidirectionalRange for IotaRange<T> {
    #[inline]
    fn decrement_index(&self, idx: &mut T) {
        debug_assert!(*idx > self.lo);
        *idx = *idx - T::one();
    }
}

impl<T: PrimInt + Debug> RandomAccessRange for IotaRange<T> {
    fn advance_index(&self, idx: &mut T, n: isize) {
        // Widen before applying the step: an in-bounds move can exceed T's
        // own width (an i8 range advanced by +200, say), so converting n
        // into T first would reject valid steps.
        let pos = idx.to_i128().expect("iota index fits i128") + n as i128;
        *idx = T::from(pos).expect("iota advance stays within bounds");
        debug_assert!(self.lo <= *idx && *idx <= self.hi);
    }
    #[inline]
    fn distance_to_index(&self, from: &T, to: &T) -> isize {
        Self::signed_gap(*from, *to)
    }
    #[inline]
    fn len(&self) -> usize {
        (self.hi - self.lo).to_usize().expect("iota length fits usize")
    }
}

impl<T: PrimInt + Debug> MidpointRange for IotaRange<T> {
    fn middle_point(&self, idx: &mut T, idx_end: &T) {
        debug_assert!(*idx < *idx_end);
        let half = Self::signed_gap(*idx, *idx_end) / 2;
        self.advance_index(idx, half);
    }
}

impl<T: PrimInt + Debug> PushRange for IotaRange<T> {
    type Elem = T;

    fn for_each<S: Sink<T>>(&self, sink: &mut S) -> Flow {
        let mut v = self.lo;
        if S::ALWAYS_CONTINUES {
            while v < self.hi {
                let _ = sink.accept(v);
                v = v + T::one();
            }
            return Flow::Continue;
        }
        while v < self.hi {
            if sink.accept(v).is_break() {
                return Flow::Break;
            }
            v = v + T::one();
        }
        Flow::Continue
    }
}
