//! Continue/break flow signal and the sink side of the push protocol.
//!
//! A [`Sink`] receives one element at a time and answers with a [`Flow`]
//! signal. Early termination is purely synchronous: every composing layer
//! checks the returned signal and hands it upward, so a `Break` from the
//! innermost consumer stops the outermost producer immediately.

/// Two-state signal returned by every sink invocation.
///
/// `Break` means "stop producing"; it must propagate through every level of
/// nested composition without buffering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Flow {
    /// Keep producing elements.
    Continue,
    /// Stop immediately; no further elements are visited.
    Break,
}

impl Flow {
    #[inline]
    pub fn is_break(self) -> bool {
        matches!(self, Flow::Break)
    }

    #[inline]
    pub fn is_continue(self) -> bool {
        matches!(self, Flow::Continue)
    }
}

/// Callback receiving one element at a time.
///
/// `ALWAYS_CONTINUES` statically marks sinks that can never return
/// [`Flow::Break`]; producers may use it to elide the per-element signal check
/// on hot paths. A sink wrapping another sink must forward the flag.
pub trait Sink<T> {
    /// True when `accept` is statically known to always return `Continue`.
    const ALWAYS_CONTINUES: bool = false;

    /// Visit one element.
    fn accept(&mut self, item: T) -> Flow;
}

impl<T, S: Sink<T>> Sink<T> for &mut S {
    const ALWAYS_CONTINUES: bool = S::ALWAYS_CONTINUES;

    #[inline]
    fn accept(&mut self, item: T) -> Flow {
        (**self).accept(item)
    }
}

/// Sink over a breakable closure.
pub struct FnSink<F>(F);

impl<T, F: FnMut(T) -> Flow> Sink<T> for FnSink<F> {
    #[inline]
    fn accept(&mut self, item: T) -> Flow {
        (self.0)(item)
    }
}

/// Sink over an infallible closure; statically known to always continue.
pub struct EachSink<F>(F);

impl<T, F: FnMut(T)> Sink<T> for EachSink<F> {
    const ALWAYS_CONTINUES: bool = true;

    #[inline]
    fn accept(&mut self, item: T) -> Flow {
        (self.0)(item);
        Flow::Continue
    }
}

/// Wrap a `FnMut(T) -> Flow` closure as a breakable sink.
#[inline]
pub fn from_fn<F>(f: F) -> FnSink<F> {
    FnSink(f)
}

/// Wrap a `FnMut(T)` closure as an always-continuing sink.
#[inline]
pub fn each<F>(f: F) -> EachSink<F> {
    EachSink(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_sink_always_continues() {
        let mut seen = Vec::new();
        let mut s = each(|x: i32| seen.push(x));
        assert!(s.accept(1).is_continue());
        assert!(s.accept(2).is_continue());
        fn flag<T, S: Sink<T>>(_: &S) -> bool {
            S::ALWAYS_CONTINUES
        }
        assert!(flag::<i32, _>(&s));
        drop(s);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn fn_sink_breaks() {
        let mut s = from_fn(|x: i32| if x > 1 { Flow::Break } else { Flow::Continue });
        assert!(s.accept(0).is_continue());
        assert!(s.accept(2).is_break());
        fn flag<T, S: Sink<T>>(_: &S) -> bool {
            S::ALWAYS_CONTINUES
        }
        assert!(!flag::<i32, _>(&s));
    }

    #[test]
    fn mut_ref_forwards_flag() {
        let mut s = each(|_: i32| {});
        fn flag<T, S: Sink<T>>(_: &S) -> bool {
            S::ALWAYS_CONTINUES
        }
        let r = &mut s;
        assert!(flag::<i32, _>(&r));
    }
}
