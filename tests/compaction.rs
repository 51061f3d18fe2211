//! In-place compaction: identical observable behavior across all container
//! strategies.

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::panic::{AssertUnwindSafe, catch_unwind};

use range_views::prelude::*;

fn keep(n: &i32) -> bool {
    n % 3 != 0
}

#[test]
fn all_strategies_agree() {
    let data: Vec<i32> = (1..=30).collect();
    let expected: Vec<i32> = data.iter().copied().filter(keep).collect();

    let mut v = data.clone();
    filter_inplace(&mut v, keep);
    assert_eq!(v, expected);

    let mut d: VecDeque<i32> = data.iter().copied().collect();
    filter_inplace(&mut d, keep);
    assert_eq!(d.iter().copied().collect::<Vec<_>>(), expected);

    let mut l: LinkedList<i32> = data.iter().copied().collect();
    filter_inplace(&mut l, keep);
    assert_eq!(l.iter().copied().collect::<Vec<_>>(), expected);

    let mut s: BTreeSet<i32> = data.iter().copied().collect();
    filter_inplace(&mut s, keep);
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn always_true_leaves_container_unchanged() {
    let mut v: Vec<i32> = (0..50).collect();
    filter_inplace(&mut v, |_| true);
    assert_eq!(v, (0..50).collect::<Vec<_>>());
}

#[test]
fn always_false_empties_container() {
    let mut v: Vec<i32> = (0..50).collect();
    filter_inplace(&mut v, |_| false);
    assert!(v.is_empty());

    let mut l: LinkedList<i32> = (0..50).collect();
    filter_inplace(&mut l, |_| false);
    assert!(l.is_empty());
}

#[test]
fn idempotent_under_same_predicate() {
    let mut v = vec![5, 12, 7, 9, 30, 2, 18, 1];
    filter_inplace(&mut v, keep);
    let once = v.clone();
    filter_inplace(&mut v, keep);
    assert_eq!(v, once);
}

#[test]
fn result_is_order_preserving_subsequence() {
    let data = vec![9, 1, 6, 2, 3, 8, 12, 4];
    let mut v = data.clone();
    filter_inplace(&mut v, keep);
    assert_eq!(v, vec![1, 2, 8, 4]);
    assert!(v.len() <= data.len());
}

#[test]
fn start_offset_protects_prefix() {
    let mut v = vec![3, 6, 9, 4, 3, 5];
    filter_inplace_from(&mut v, 3, keep);
    assert_eq!(v, vec![3, 6, 9, 4, 5]);

    let mut l: LinkedList<i32> = [3, 6, 9, 4, 3, 5].into_iter().collect();
    filter_inplace_from(&mut l, 3, keep);
    assert_eq!(l.into_iter().collect::<Vec<_>>(), vec![3, 6, 9, 4, 5]);
}

#[test]
fn contiguous_and_list_need_no_clone() {
    struct NoClone(i32);

    let mut v: Vec<NoClone> = (0..10).map(NoClone).collect();
    filter_inplace(&mut v, |b| b.0 % 2 == 0);
    assert_eq!(v.iter().map(|b| b.0).collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);

    let mut l: LinkedList<NoClone> = (0..10).map(NoClone).collect();
    filter_inplace(&mut l, |b| b.0 % 2 == 0);
    assert_eq!(l.iter().map(|b| b.0).collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
}

#[test]
fn every_strategy_finalizes_on_unwind() {
    let panicky = |n: &i32| {
        if *n == 20 {
            panic!("predicate failure");
        }
        n % 3 != 0
    };
    let data: Vec<i32> = (1..=30).collect();
    let survivors: Vec<i32> = (1..20).filter(keep).collect();

    let mut v = data.clone();
    assert!(catch_unwind(AssertUnwindSafe(|| filter_inplace(&mut v, panicky))).is_err());
    assert_eq!(v, survivors);

    let mut l: LinkedList<i32> = data.iter().copied().collect();
    assert!(catch_unwind(AssertUnwindSafe(|| filter_inplace(&mut l, panicky))).is_err());
    assert_eq!(l.into_iter().collect::<Vec<_>>(), survivors);

    let mut s: BTreeSet<i32> = data.iter().copied().collect();
    assert!(catch_unwind(AssertUnwindSafe(|| filter_inplace(&mut s, panicky))).is_err());
    assert_eq!(s.into_iter().collect::<Vec<_>>(), survivors);
}
