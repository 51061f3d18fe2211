//! Filter view: lazy predicate filtering over a base range.
//!
//! [`Filter`] owns a base range plus a predicate and exposes both traversal
//! protocols of its base. In push mode the predicate runs exactly once per
//! upstream element; in index mode the predicate may be re-invoked for the
//! same element during forward skipping, backward probing, and midpoint
//! correction, so it must be referentially transparent. The predicate always
//! receives an immutable element view.
//!
//! A filter's traversal tier is capped at bidirectional: there is no
//! `RandomAccessRange` impl, because the number of kept elements between two
//! indices cannot be computed in O(1).

use crate::traverse::flow::{Flow, Sink};
use crate::traverse::index::{
    BidirectionalRange, CommonRange, IndexRange, MidpointRange, TraversalTier,
};
use crate::traverse::push::PushRange;

/// Lazy filtering view over `{base, pred}`; owns no elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Filter<R, P> {
    base: R,
    pred: P,
}

/// Filter `rng` by `pred`.
///
/// # Example
/// ```
/// use range_views::prelude::*;
/// let v: Vec<i32> = (1..=20).collect();
/// let evens: Vec<i32> =
///     filter(SliceRange::new(&v), |n: &&i32| **n % 2 == 0).iter().copied().collect();
/// assert_eq!(evens, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
/// ```
pub fn filter<R, P>(rng: R, pred: P) -> Filter<R, P> {
    Filter { base: rng, pred }
}

impl<R, P> Filter<R, P> {
    pub fn base(&self) -> &R {
        &self.base
    }
}

// ---------------------------------------------------------------------------
// push mode

struct FilterSink<'a, P, S> {
    pred: &'a P,
    sink: &'a mut S,
}

impl<T, P, S> Sink<T> for FilterSink<'_, P, S>
where
    P: Fn(&T) -> bool,
    S: Sink<T>,
{
    // Skipping an element produces no signal of its own, so the composed sink
    // breaks only when the downstream one can.
    const ALWAYS_CONTINUES: bool = S::ALWAYS_CONTINUES;

    #[inline]
    fn accept(&mut self, item: T) -> Flow {
        if (self.pred)(&item) {
            self.sink.accept(item)
        } else {
            Flow::Continue
        }
    }
}

impl<R, P> PushRange for Filter<R, P>
where
    R: PushRange,
    P: Fn(&R::Elem) -> bool,
{
    type Elem = R::Elem;

    fn for_each<S: Sink<R::Elem>>(&self, sink: &mut S) -> Flow {
        self.base.for_each(&mut FilterSink { pred: &self.pred, sink })
    }
}

// ---------------------------------------------------------------------------
// index mode

impl<R, P> Filter<R, P>
where
    R: IndexRange,
    P: Fn(&R::Elem) -> bool,
{
    /// Walk `idx` forward to the next kept element (or the end).
    fn skip_rejected(&self, idx: &mut R::Index) {
        while !self.base.at_end_index(idx) && !(self.pred)(&self.base.dereference_index(idx)) {
            self.base.increment_index(idx);
        }
    }
}

impl<R, P> IndexRange for Filter<R, P>
where
    R: IndexRange,
    P: Fn(&R::Elem) -> bool,
{
    type Index = R::Index;
    type Elem = R::Elem;

    const TIER: TraversalTier = TraversalTier::Bidirectional.min_with(R::TIER);

    fn begin_index(&self) -> R::Index {
        let mut idx = self.base.begin_index();
        self.skip_rejected(&mut idx);
        idx
    }

    #[inline]
    fn at_end_index(&self, idx: &R::Index) -> bool {
        self.base.at_end_index(idx)
    }

    fn increment_index(&self, idx: &mut R::Index) {
        self.base.increment_index(idx);
        self.skip_rejected(idx);
    }

    #[inline]
    fn dereference_index(&self, idx: &R::Index) -> R::Elem {
        self.base.dereference_index(idx)
    }
}

impl<R, P> CommonRange for Filter<R, P>
where
    R: CommonRange,
    P: Fn(&R::Elem) -> bool,
{
    #[inline]
    fn end_index(&self) -> R::Index {
        self.base.end_index()
    }
}

impl<R, P> BidirectionalRange for Filter<R, P>
where
    R: BidirectionalRange,
    P: Fn(&R::Elem) -> bool,
{
    fn decrement_index(&self, idx: &mut R::Index) {
        // Entered unconditionally once: callers never decrement past a kept
        // element, so a kept element exists before idx.
        loop {
            self.base.decrement_index(idx);
            if (self.pred)(&self.base.dereference_index(idx)) {
                return;
            }
        }
    }
}

impl<R, P> MidpointRange for Filter<R, P>
where
    R: MidpointRange,
    P: Fn(&R::Elem) -> bool,
{
    /// Approximate median: the base's raw midpoint walked back to the nearest
    /// kept element, stopping if it returns to the starting index.
    fn middle_point(&self, idx: &mut R::Index, idx_end: &R::Index) {
        let start = idx.clone();
        self.base.middle_point(idx, idx_end);
        while *idx != start && !(self.pred)(&self.base.dereference_index(idx)) {
            self.base.decrement_index(idx);
        }
    }
}

// A filter is never random access, whatever its base supports.
#[cfg(test)]
static_assertions::assert_not_impl_any!(
    Filter<crate::source::slice::SliceRange<'static, i32>, fn(&&'static i32) -> bool>:
    crate::traverse::index::RandomAccessRange
);
