//! Push-only source driving an ordinary iterator.
//!
//! [`IterRange`] is the generator-style entry point into push-mode
//! composition: any cloneable `Iterator` (a `Range`, a `map` chain, a custom
//! generator) becomes a re-traversable push range. It has no index protocol;
//! wrap an indexable source instead when cursors are needed.

use crate::traverse::flow::{Flow, Sink};
use crate::traverse::push::PushRange;

/// Re-traversable push range over a cloneable iterator.
#[derive(Copy, Clone, Debug)]
pub struct IterRange<I> {
    iter: I,
}

impl<I: Iterator + Clone> IterRange<I> {
    pub fn new(iter: I) -> Self {
        IterRange { iter }
    }
}

impl<I: Iterator + Clone> PushRange for IterRange<I> {
    type Elem = I::Item;

    fn for_each<S: Sink<I::Item>>(&self, sink: &mut S) -> Flow {
        if S::ALWAYS_CONTINUES {
            for item in self.iter.clone() {
                let _ = sink.accept(item);
            }
            return Flow::Continue;
        }
        for item in self.iter.clone() {
            if sink.accept(item).is_break() {
                return Flow::Break;
            }
        }
        Flow::Continue
    }
}
