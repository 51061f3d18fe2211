//! Random-access ranges over borrowed slices.

use crate::traverse::flow::{Flow, Sink};
use crate::traverse::index::{
    BidirectionalRange, CommonRange, IndexRange, MidpointRange, RandomAccessRange, TraversalTier,
};
use crate::traverse::push::PushRange;

/// Shared-borrow range over a slice; `Index = usize`, elements by reference.
///
/// The handle is a thin wrapper and is `Copy`; views and cursors take it by
/// value.
#[derive(Debug)]
pub struct SliceRange<'a, T> {
    items: &'a [T],
}

impl<'a, T> SliceRange<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        SliceRange { items }
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Clone for SliceRange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for SliceRange<'_, T> {}

/// Identity semantics: two handles are equal iff they view the same slice
/// (same address and length), since indices transfer only between such
/// handles.
impl<T> PartialEq for SliceRange<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items)
    }
}
impl<T> Eq for SliceRange<'_, T> {}

impl<'a, T> IndexRange for SliceRange<'a, T> {
    type Index = usize;
    type Elem = &'a T;

    const TIER: TraversalTier = TraversalTier::RandomAccess;

    #[inline]
    fn begin_index(&self) -> usize {
        0
    }
    #[inline]
    fn at_end_index(&self, idx: &usize) -> bool {
        *idx == self.items.len()
    }
    #[inline]
    fn increment_index(&self, idx: &mut usize) {
        debug_assert!(*idx < self.items.len());
        *idx += 1;
    }
    #[inline]
    fn dereference_index(&self, idx: &usize) -> &'a T {
        &self.items[*idx]
    }
}

impl<T> CommonRange for SliceRange<'_, T> {
    #[inline]
    fn end_index(&self) -> usize {
        self.items.len()
    }
}

impl<T> BidirectionalRange for SliceRange<'_, T> {
    #[inline]
    fn decrement_index(&self, idx: &mut usize) {
        debug_assert!(*idx > 0);
        *idx -= 1;
    }
}

impl<T> RandomAccessRange for SliceRange<'_, T> {
    #[inline]
    fn advance_index(&self, idx: &mut usize, n: isize) {
        let pos = *idx as isize + n;
        debug_assert!(0 <= pos && pos <= self.items.len() as isize);
        *idx = pos as usize;
    }
    #[inline]
    fn distance_to_index(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> MidpointRange for SliceRange<'_, T> {
    #[inline]
    fn middle_point(&self, idx: &mut usize, idx_end: &usize) {
        debug_assert!(*idx < *idx_end);
        *idx += (*idx_end - *idx) / 2;
    }
}

impl<'a, T> PushRange for SliceRange<'a, T> {
    type Elem = &'a T;

    fn for_each<S: Sink<&'a T>>(&self, sink: &mut S) -> Flow {
        if S::ALWAYS_CONTINUES {
            // Sink can never break; skip the per-element signal check.
            for item in self.items {
                let _ = sink.accept(item);
            }
            return Flow::Continue;
        }
        for item in self.items {
            if sink.accept(item).is_break() {
                return Flow::Break;
            }
        }
        Flow::Continue
    }
}

/// Exclusive-borrow slice wrapper backing the mutable cursor flavor.
///
/// Navigation shares the `usize` index vocabulary of [`SliceRange`]; element
/// access goes through [`SliceCursorMut`](crate::traverse::cursor::SliceCursorMut).
#[derive(Debug)]
pub struct SliceRangeMut<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> SliceRangeMut<'a, T> {
    pub fn new(items: &'a mut [T]) -> Self {
        SliceRangeMut { items }
    }

    /// Cursor at the first element.
    pub fn cursor(self) -> crate::traverse::cursor::SliceCursorMut<'a, T> {
        crate::traverse::cursor::SliceCursorMut::begin(self.items)
    }

    /// Downgrade to the shared-borrow range.
    pub fn into_const(self) -> SliceRange<'a, T> {
        SliceRange::new(self.items)
    }
}
