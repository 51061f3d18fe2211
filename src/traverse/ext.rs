//! Convenience extension methods on top of the core index protocol.

use super::cursor::Cursor;
use super::flow::{Flow, Sink};
use super::index::{CommonRange, IndexRange};
use super::iter::RangeIter;

/// Extension methods for index-capable ranges.
///
/// Bridges into std iteration and into push-mode contexts without modifying
/// the core trait.
pub trait IndexRangeExt: IndexRange + Sized {
    /// Consume the range handle into a std iterator over `[begin, end)`.
    fn iter(self) -> RangeIter<Self>
    where
        Self: CommonRange,
    {
        RangeIter::new(self)
    }

    /// Consume the range handle into a cursor at the begin position.
    fn cursor(self) -> Cursor<Self> {
        Cursor::begin(self)
    }

    /// Drive a sink over the elements via the index protocol.
    ///
    /// Lets an index-only source participate in push-mode composition.
    fn for_each_indexed<S: Sink<Self::Elem>>(&self, sink: &mut S) -> Flow {
        let mut idx = self.begin_index();
        while !self.at_end_index(&idx) {
            if sink.accept(self.dereference_index(&idx)).is_break() {
                return Flow::Break;
            }
            self.increment_index(&mut idx);
        }
        Flow::Continue
    }
}

impl<R: IndexRange + Sized> IndexRangeExt for R {}
