//! Standard-iterator adaptation of the index protocol.
//!
//! [`RangeIter`] turns any common index range into a `std::iter::Iterator`,
//! gaining `DoubleEndedIterator` when the range is bidirectional. This is the
//! bridge between the protocol world and ordinary Rust iterator consumers.
//!
//! There is no `ExactSizeIterator` impl: that trait requires `size_hint` to
//! be exact, and one `Iterator` impl over all common ranges cannot count
//! elements (a filter view would have to traverse). Random-access ranges
//! report their exact count through [`RangeIter::remaining`] instead.

use std::iter::FusedIterator;

use super::index::{BidirectionalRange, CommonRange, IndexRange, RandomAccessRange};

/// Iterator over `[begin_index, end_index)` of a common range.
#[derive(Clone, Debug)]
pub struct RangeIter<R: CommonRange> {
    range: R,
    front: R::Index,
    back: R::Index,
}

impl<R: CommonRange> RangeIter<R> {
    pub fn new(range: R) -> Self {
        let front = range.begin_index();
        let back = range.end_index();
        RangeIter { range, front, back }
    }
}

impl<R: CommonRange> Iterator for RangeIter<R> {
    type Item = R::Elem;

    fn next(&mut self) -> Option<R::Elem> {
        if self.front == self.back {
            return None;
        }
        let elem = self.range.dereference_index(&self.front);
        self.range.increment_index(&mut self.front);
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Counting the elements of an arbitrary common range would require
        // traversing it.
        (0, None)
    }
}

impl<R: RandomAccessRange> RangeIter<R> {
    /// Exact number of elements left between the two ends.
    pub fn remaining(&self) -> usize {
        self.range.distance_to_index(&self.front, &self.back) as usize
    }
}

impl<R> DoubleEndedIterator for RangeIter<R>
where
    R: CommonRange + BidirectionalRange,
{
    fn next_back(&mut self) -> Option<R::Elem> {
        if self.front == self.back {
            return None;
        }
        self.range.decrement_index(&mut self.back);
        Some(self.range.dereference_index(&self.back))
    }
}

impl<R: CommonRange> FusedIterator for RangeIter<R> {}

// size_hint is conservative, so claiming ExactSizeIterator would break its
// contract; remaining() carries the exact count.
#[cfg(test)]
static_assertions::assert_not_impl_any!(
    RangeIter<crate::source::slice::SliceRange<'static, i32>>: ExactSizeIterator
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::slice::SliceRange;

    #[test]
    fn forward_and_backward() {
        let v = [1, 2, 3, 4];
        let fwd: Vec<_> = RangeIter::new(SliceRange::new(&v)).copied().collect();
        assert_eq!(fwd, vec![1, 2, 3, 4]);
        let bwd: Vec<_> = RangeIter::new(SliceRange::new(&v)).rev().copied().collect();
        assert_eq!(bwd, vec![4, 3, 2, 1]);
    }

    #[test]
    fn meets_in_the_middle() {
        let v = [1, 2, 3];
        let mut it = RangeIter::new(SliceRange::new(&v));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn remaining_tracks_both_ends() {
        let v = [0; 7];
        let mut it = RangeIter::new(SliceRange::new(&v));
        assert_eq!(it.remaining(), 7);
        it.next();
        it.next_back();
        assert_eq!(it.remaining(), 5);
        // size_hint stays conservative and never contradicts the count.
        assert_eq!(it.size_hint(), (0, None));
    }
}
