//! Filter view behavior through both traversal protocols.

use range_views::prelude::*;

fn keep_even(n: &&i32) -> bool {
    **n % 2 == 0
}

#[test]
fn keep_even_over_one_to_twenty() {
    let v: Vec<i32> = (1..=20).collect();
    let evens: Vec<i32> = filter(SliceRange::new(&v), keep_even).iter().copied().collect();
    assert_eq!(evens, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
}

#[test]
fn stacked_filters_compose() {
    let v: Vec<i32> = (1..=20).collect();
    let coprime = filter(
        filter(
            filter(SliceRange::new(&v), |n: &&i32| **n % 2 != 0),
            |n: &&i32| **n % 3 != 0,
        ),
        |n: &&i32| **n % 5 != 0,
    );
    let survivors: Vec<i32> = coprime.iter().copied().collect();
    assert_eq!(survivors, vec![1, 7, 11, 13, 17, 19]);
}

#[test]
fn forward_equals_reversed_backward() {
    let v = vec![3, 8, 1, 4, 12, 7, 6, 9, 10];
    let f = filter(SliceRange::new(&v), keep_even);
    let fwd: Vec<i32> = f.iter().copied().collect();
    let mut bwd: Vec<i32> = f.iter().rev().copied().collect();
    bwd.reverse();
    assert_eq!(fwd, bwd);
}

#[test]
fn push_mode_matches_index_mode() {
    let v: Vec<i32> = (1..=20).collect();
    let f = filter(SliceRange::new(&v), keep_even);
    let indexed: Vec<i32> = f.iter().copied().collect();
    let mut pushed = Vec::new();
    for_each(&f, |n: &i32| pushed.push(*n));
    assert_eq!(indexed, pushed);
}

#[test]
fn push_mode_break_propagates_through_stack() {
    let v: Vec<i32> = (1..=20).collect();
    let f = filter(
        filter(SliceRange::new(&v), keep_even),
        |n: &&i32| **n % 3 == 0,
    );
    let mut seen = Vec::new();
    let flow = try_for_each(&f, |n: &i32| {
        seen.push(*n);
        if *n >= 12 { Flow::Break } else { Flow::Continue }
    });
    assert!(flow.is_break());
    assert_eq!(seen, vec![6, 12]);
}

#[test]
fn filter_over_iota_by_value() {
    let odds: Vec<u32> = filter(iota(0u32, 10u32), |n: &u32| n % 2 == 1).iter().collect();
    assert_eq!(odds, vec![1, 3, 5, 7, 9]);
}

#[test]
fn cursor_walks_kept_elements_only() {
    let v = vec![1, 2, 3, 4, 5, 6];
    let mut c = filter(SliceRange::new(&v), keep_even).cursor();
    assert_eq!(*c.get(), 2);
    c.advance();
    assert_eq!(*c.get(), 4);
    c.advance();
    assert_eq!(*c.get(), 6);
    c.retreat();
    assert_eq!(*c.get(), 4);
    c.advance();
    c.advance();
    assert!(c.at_end());
}
