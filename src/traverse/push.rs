//! Push protocol: callback-driven range traversal.
//!
//! A [`PushRange`] drives a [`Sink`] over its elements and reports whether the
//! traversal ran to completion or was broken off by the sink. This is the
//! minimal boundary contract a data source must implement to participate in
//! push-mode composition; sources that additionally implement the index
//! protocol get cursor-driven traversal too.

use super::flow::{Flow, Sink, each, from_fn};

/// Callback-driven traversal over a sequence of elements.
pub trait PushRange {
    /// Element view handed to the sink, one at a time.
    type Elem;

    /// Visit every element in order until exhausted or the sink breaks.
    ///
    /// Returns [`Flow::Break`] iff the sink broke; implementations must stop
    /// producing immediately in that case.
    fn for_each<S: Sink<Self::Elem>>(&self, sink: &mut S) -> Flow;
}

impl<R: PushRange> PushRange for &R {
    type Elem = R::Elem;

    #[inline]
    fn for_each<S: Sink<Self::Elem>>(&self, sink: &mut S) -> Flow {
        (**self).for_each(sink)
    }
}

/// Visit every element of `rng` with an infallible closure.
#[inline]
pub fn for_each<R: PushRange, F: FnMut(R::Elem)>(rng: &R, f: F) {
    let _ = rng.for_each(&mut each(f));
}

/// Visit elements of `rng` until `f` returns [`Flow::Break`].
///
/// Returns the final signal: `Break` if `f` broke, `Continue` if the range
/// ran to exhaustion.
#[inline]
pub fn try_for_each<R: PushRange, F: FnMut(R::Elem) -> Flow>(rng: &R, f: F) -> Flow {
    rng.for_each(&mut from_fn(f))
}
