//! Protocol cursors: the iterator flavors over an index range.
//!
//! [`Cursor`] is the const flavor: it owns a cheap range handle plus one
//! index and exposes the protocol operations directly. [`SliceCursorMut`] is
//! the mutable flavor over a borrowed slice; it shares the same `usize` index
//! representation (the index is orthogonal to constness) and converts one way
//! into a const cursor via [`SliceCursorMut::into_const`]. There is no
//! const-to-mut conversion.
//!
//! Misusing a cursor (dereferencing or stepping past an end, comparing
//! cursors from different owning ranges) is a programming error and trips an
//! assertion rather than producing a recoverable result.

use super::index::{BidirectionalRange, IndexRange, RandomAccessRange};
use crate::source::slice::SliceRange;

/// Const-flavor cursor pairing a range handle with one of its indices.
///
/// Range handles are cheap by-value types (slice wrappers, counting bounds,
/// views over such), so the cursor owns its handle outright.
#[derive(Clone, Debug)]
pub struct Cursor<R: IndexRange> {
    range: R,
    idx: R::Index,
}

impl<R: IndexRange> Cursor<R> {
    /// Cursor at the first element of `range`.
    pub fn begin(range: R) -> Self {
        let idx = range.begin_index();
        Cursor { range, idx }
    }

    /// Cursor at a caller-supplied index of `range`.
    ///
    /// `idx` must have been issued by `range`.
    pub fn at(range: R, idx: R::Index) -> Self {
        Cursor { range, idx }
    }

    /// The underlying index.
    #[inline]
    pub fn index(&self) -> &R::Index {
        &self.idx
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.range.at_end_index(&self.idx)
    }

    /// Dereference. Panics in debug builds when the cursor is exhausted.
    pub fn get(&self) -> R::Elem {
        debug_assert!(!self.at_end(), "dereferencing an exhausted cursor");
        self.range.dereference_index(&self.idx)
    }

    /// Step forward one element. Panics in debug builds when exhausted.
    pub fn advance(&mut self) {
        debug_assert!(!self.at_end(), "advancing an exhausted cursor");
        self.range.increment_index(&mut self.idx);
    }

    /// Step back one element.
    pub fn retreat(&mut self)
    where
        R: BidirectionalRange,
    {
        self.range.decrement_index(&mut self.idx);
    }

    /// Step by `n` elements, negative `n` stepping backward.
    pub fn seek(&mut self, n: isize)
    where
        R: RandomAccessRange,
    {
        self.range.advance_index(&mut self.idx, n);
    }

    /// Number of increments from `self` to `other`.
    ///
    /// Both cursors must belong to the same owning range.
    pub fn distance_to(&self, other: &Cursor<R>) -> isize
    where
        R: RandomAccessRange + PartialEq,
    {
        debug_assert!(
            self.range == other.range,
            "measuring distance between cursors of different owning ranges"
        );
        self.range.distance_to_index(&self.idx, &other.idx)
    }
}

/// Equality compares indices, after asserting in debug builds that both
/// cursors belong to the same owning range (for slice ranges, the same
/// underlying slice).
impl<R: IndexRange + PartialEq> PartialEq for Cursor<R> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            self.range == other.range,
            "comparing cursors of different owning ranges"
        );
        self.idx == other.idx
    }
}

/// Mutable-flavor cursor over a borrowed slice.
///
/// Shares the `usize` index representation with `Cursor<SliceRange<_>>`; only
/// the reference type returned by dereference differs.
#[derive(Debug)]
pub struct SliceCursorMut<'a, T> {
    items: &'a mut [T],
    idx: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    pub fn begin(items: &'a mut [T]) -> Self {
        SliceCursorMut { items, idx: 0 }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.idx
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.idx == self.items.len()
    }

    pub fn get(&self) -> &T {
        debug_assert!(!self.at_end(), "dereferencing an exhausted cursor");
        &self.items[self.idx]
    }

    pub fn get_mut(&mut self) -> &mut T {
        debug_assert!(!self.at_end(), "dereferencing an exhausted cursor");
        &mut self.items[self.idx]
    }

    pub fn advance(&mut self) {
        debug_assert!(!self.at_end(), "advancing an exhausted cursor");
        self.idx += 1;
    }

    pub fn retreat(&mut self) {
        debug_assert!(self.idx > 0, "retreating past the begin position");
        self.idx -= 1;
    }

    /// Downgrade into the const flavor at the same position.
    ///
    /// One-way by construction: the exclusive borrow is consumed and only a
    /// shared view remains.
    pub fn into_const(self) -> Cursor<SliceRange<'a, T>> {
        let items: &'a [T] = self.items;
        Cursor::at(SliceRange::new(items), self.idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::slice::SliceRange;

    #[test]
    fn cursor_walks_slice() {
        let v = [10, 20, 30];
        let mut c = Cursor::begin(SliceRange::new(&v));
        assert_eq!(*c.get(), 10);
        c.advance();
        assert_eq!(*c.get(), 20);
        c.retreat();
        assert_eq!(*c.get(), 10);
        c.seek(2);
        assert_eq!(*c.get(), 30);
        c.advance();
        assert!(c.at_end());
    }

    #[test]
    fn cursor_distance_and_equality() {
        let v = [1, 2, 3, 4];
        let r = SliceRange::new(&v);
        let a = Cursor::begin(r);
        let mut b = Cursor::begin(r);
        b.seek(3);
        assert_eq!(a.distance_to(&b), 3);
        assert_eq!(b.distance_to(&a), -3);
        assert_ne!(a, b);
        let mut b2 = b.clone();
        b2.seek(-3);
        assert_eq!(a, b2);
    }

    #[test]
    #[should_panic(expected = "different owning ranges")]
    fn comparing_cursors_of_distinct_slices_asserts() {
        let u = [1, 2, 3];
        let v = [1, 2, 3];
        let a = Cursor::begin(SliceRange::new(&u));
        let b = Cursor::begin(SliceRange::new(&v));
        let _ = a == b;
    }

    #[test]
    fn mut_cursor_writes_then_converts() {
        let mut v = [1, 2, 3];
        let mut c = SliceCursorMut::begin(&mut v);
        c.advance();
        *c.get_mut() = 20;
        let cc = c.into_const();
        assert_eq!(*cc.get(), 20);
        assert_eq!(cc.index(), &1);
    }
}
