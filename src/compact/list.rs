//! Node-splicing compaction for `LinkedList`.
//!
//! Kept nodes are spliced back onto the already-scanned prefix via
//! `split_off` and `append`, so elements are never moved or copied.
//! On unwind the unscanned tail is a local list and simply drops, leaving
//! the original list holding exactly the retained elements.

use std::collections::LinkedList;
use std::mem;

use crate::compact::InPlaceFilter;

fn run<T, P>(list: &mut LinkedList<T>, start: usize, mut pred: P)
where
    P: FnMut(&T) -> bool,
{
    let start = start.min(list.len());
    // Count the leading run that stays put: the unconditional prefix plus
    // every kept element up to the first reject, one eval each.
    let mut prefix = start;
    for x in list.iter().skip(start) {
        if !pred(x) {
            break;
        }
        prefix += 1;
    }
    if prefix == list.len() {
        return;
    }
    let mut tail = list.split_off(prefix);
    // Head of the tail is the reject that ended the scan above.
    let _ = tail.pop_front();
    while let Some(front) = tail.front() {
        let keep = pred(front);
        let rest = tail.split_off(1);
        let mut node = mem::replace(&mut tail, rest);
        if keep {
            list.append(&mut node);
        }
    }
}

impl<T> InPlaceFilter for LinkedList<T> {
    type Item = T;

    fn filter_in_place_from<P>(&mut self, start: usize, pred: P)
    where
        P: FnMut(&T) -> bool,
    {
        run(self, start, pred);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splices_kept_nodes() {
        let mut l: LinkedList<i32> = (0..10).collect();
        l.filter_in_place(|n| n % 2 == 0);
        assert_eq!(l.into_iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn all_kept_list_untouched() {
        let mut l: LinkedList<i32> = (0..4).collect();
        let mut evals = 0;
        l.filter_in_place(|_| {
            evals += 1;
            true
        });
        assert_eq!(evals, 4);
        assert_eq!(l.len(), 4);
    }

    #[test]
    fn start_prefix_skips_predicate() {
        let mut l: LinkedList<i32> = LinkedList::from([1, 1, 2, 3, 4]);
        l.filter_in_place_from(2, |n| n % 2 == 0);
        assert_eq!(l.into_iter().collect::<Vec<_>>(), vec![1, 1, 2, 4]);
    }

    #[test]
    fn panic_drops_unscanned_tail() {
        let mut l: LinkedList<i32> = LinkedList::from([2, 1, 4, 6, 8]);
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            l.filter_in_place(|n| {
                if *n == 6 {
                    panic!("boom");
                }
                n % 2 == 0
            });
        }));
        assert!(res.is_err());
        assert_eq!(l.into_iter().collect::<Vec<_>>(), vec![2, 4]);
    }
}
