//! Erase-based compaction for `BTreeSet`.
//!
//! A set cannot be compacted by moving elements, so the strategy is a
//! "last kept" key cursor: each scan step looks up the next key past the
//! cursor, rejects are removed on the spot, keeps advance the cursor.
//! A scope guard trims everything past the cursor if the predicate
//! unwinds, so the set never retains unscanned keys after a panic.
//!
//! The cursor holds keys by value, so elements must be `Clone` here.

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::compact::InPlaceFilter;

struct EraseGuard<'c, T: Ord> {
    set: &'c mut BTreeSet<T>,
    last_kept: Option<T>,
    done: bool,
}

impl<T: Ord> EraseGuard<'_, T> {
    fn next_key(&self) -> Option<&T> {
        match &self.last_kept {
            None => self.set.iter().next(),
            Some(k) => self.set.range((Bound::Excluded(k), Bound::Unbounded)).next(),
        }
    }
}

impl<T: Ord> Drop for EraseGuard<'_, T> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        log::debug!("compaction unwinding; trimming keys past the retained cursor");
        match self.last_kept.take() {
            Some(k) => {
                let mut tail = self.set.split_off(&k);
                // split_off moved k itself into the tail; put it back.
                if let Some(kept) = tail.take(&k) {
                    self.set.insert(kept);
                }
            }
            None => self.set.clear(),
        }
    }
}

fn run<T, P>(set: &mut BTreeSet<T>, start: usize, mut pred: P)
where
    T: Ord + Clone,
    P: FnMut(&T) -> bool,
{
    let mut guard = EraseGuard { set, last_kept: None, done: false };
    let mut skipped = 0;
    loop {
        let Some(key) = guard.next_key().cloned() else {
            break;
        };
        if skipped < start {
            skipped += 1;
            guard.last_kept = Some(key);
        } else if pred(&key) {
            guard.last_kept = Some(key);
        } else {
            guard.set.remove(&key);
        }
    }
    guard.done = true;
}

impl<T: Ord + Clone> InPlaceFilter for BTreeSet<T> {
    type Item = T;

    fn filter_in_place_from<P>(&mut self, start: usize, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        run(self, start, pred);
    }
}
