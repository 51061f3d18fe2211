//! Swap-and-truncate compaction for contiguous storage.

use std::collections::VecDeque;

use crate::compact::InPlaceFilter;

/// Storage a [`WriteCursor`] can compact: indexed access, element swap,
/// tail truncation.
pub trait ContiguousMut {
    type Item;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn get_at(&self, i: usize) -> &Self::Item;
    fn swap_at(&mut self, a: usize, b: usize);
    fn truncate_to(&mut self, n: usize);
}

impl<T> ContiguousMut for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn get_at(&self, i: usize) -> &T {
        &self[i]
    }
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
    fn truncate_to(&mut self, n: usize) {
        self.truncate(n);
    }
}

impl<T> ContiguousMut for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    fn get_at(&self, i: usize) -> &T {
        &self[i]
    }
    fn swap_at(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
    fn truncate_to(&mut self, n: usize) {
        self.truncate(n);
    }
}

/// Scoped compaction cursor over contiguous storage.
///
/// Elements below `write` are the retained prefix. [`keep`](Self::keep)
/// swaps a scanned element down onto the cursor; dropping the cursor
/// truncates the container to the retained prefix, on normal exit and on
/// unwind alike.
pub struct WriteCursor<'c, C: ContiguousMut> {
    container: &'c mut C,
    write: usize,
}

impl<'c, C: ContiguousMut> WriteCursor<'c, C> {
    /// Bind a cursor whose first `write` elements are already retained.
    pub fn new(container: &'c mut C, write: usize) -> Self {
        debug_assert!(
            write <= container.len(),
            "write cursor {} past container length {}",
            write,
            container.len()
        );
        WriteCursor { container, write }
    }

    /// Number of elements retained so far.
    pub fn retained(&self) -> usize {
        self.write
    }

    /// Retain the element at scan position `i`.
    ///
    /// The swap is skipped when `i` already coincides with the cursor, so
    /// an all-kept prefix is never touched.
    pub fn keep(&mut self, i: usize) {
        debug_assert!(i >= self.write, "scan position {} behind cursor {}", i, self.write);
        debug_assert!(i < self.container.len(), "scan position {} out of bounds", i);
        if i != self.write {
            self.container.swap_at(self.write, i);
        }
        self.write += 1;
    }

    /// Un-retain the most recently kept element; it is dropped when the
    /// cursor finalizes.
    pub fn pop_retained(&mut self) {
        debug_assert!(self.write > 0, "pop_retained on empty retained prefix");
        self.write -= 1;
    }
}

impl<C: ContiguousMut> Drop for WriteCursor<'_, C> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            log::debug!(
                "compaction unwinding; truncating to {} retained elements",
                self.write
            );
        }
        self.container.truncate_to(self.write);
    }
}

fn run<C, P>(container: &mut C, start: usize, mut pred: P)
where
    C: ContiguousMut,
    P: FnMut(&C::Item) -> bool,
{
    let len = container.len();
    let start = start.min(len);
    // Stay read-only through any leading all-kept run.
    let mut i = start;
    while i < len && pred(container.get_at(i)) {
        i += 1;
    }
    if i == len {
        return;
    }
    // First reject found at i; activate the cursor there and scan on.
    let mut cursor = WriteCursor::new(container, i);
    i += 1;
    while i < len {
        if pred(cursor.container.get_at(i)) {
            cursor.keep(i);
        }
        i += 1;
    }
}

impl<T> InPlaceFilter for Vec<T> {
    type Item = T;

    fn filter_in_place_from<P>(&mut self, start: usize, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        run(self, start, pred);
    }
}

impl<T> InPlaceFilter for VecDeque<T> {
    type Item = T;

    fn filter_in_place_from<P>(&mut self, start: usize, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        run(self, start, pred);
    }
}
