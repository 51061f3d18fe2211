//! In-place container compaction.
//!
//! [`InPlaceFilter`] rewrites a container so it holds exactly the elements a
//! predicate accepts, in their original relative order, with exactly one
//! predicate evaluation per element. The rewrite strategy is picked per
//! container type:
//!
//! * `Vec` and `VecDeque` compact by swapping kept elements onto a write
//!   cursor and truncating (see [`contiguous`]).
//! * `LinkedList` splices kept nodes back onto the scanned prefix without
//!   moving elements (see [`list`]).
//! * `BTreeSet` removes rejected elements as they are found, walking a
//!   "last kept" cursor through key order (see [`btree`]).
//!
//! All strategies share the same unwind contract: if the predicate panics,
//! the container still ends up holding exactly the elements retained so far.
//! Elements not yet scanned are dropped, never left behind in a
//! half-compacted container.

pub mod btree;
pub mod contiguous;
pub mod list;

pub use contiguous::{ContiguousMut, WriteCursor};

/// Containers that can be compacted in place by a predicate.
pub trait InPlaceFilter {
    type Item;

    /// Retain exactly the elements `pred` accepts, preserving order.
    fn filter_in_place<P>(&mut self, pred: P)
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter_in_place_from(0, pred);
    }

    /// Like [`filter_in_place`](Self::filter_in_place), but the first
    /// `start` elements are retained unconditionally and never passed to
    /// the predicate.
    fn filter_in_place_from<P>(&mut self, start: usize, pred: P)
    where
        P: FnMut(&Self::Item) -> bool;
}

/// Free-function form of [`InPlaceFilter::filter_in_place`].
///
/// # Example
/// ```
/// use range_views::compact::filter_inplace;
/// let mut v = vec![1, 2, 3, 4, 5, 6];
/// filter_inplace(&mut v, |n| n % 2 == 0);
/// assert_eq!(v, vec![2, 4, 6]);
/// ```
pub fn filter_inplace<C, P>(container: &mut C, pred: P)
where
    C: InPlaceFilter + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    container.filter_in_place(pred);
}

/// Free-function form of [`InPlaceFilter::filter_in_place_from`].
pub fn filter_inplace_from<C, P>(container: &mut C, start: usize, pred: P)
where
    C: InPlaceFilter + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    container.filter_in_place_from(start, pred);
}
