//! Cartesian-product view: multi-dimensional enumeration in odometer order.
//!
//! [`CartesianProduct`] composes a tuple of base ranges (arity 2 through 4)
//! into a view of element tuples, dimension 0 outermost and the last
//! dimension fastest-varying. Its composite index is the tuple of the
//! per-dimension indices.
//!
//! Index mode requires dimension 0 to be a [`CommonRange`] so the product has
//! exactly one canonical end representation: dimension 0 sits at its own end
//! index and every other dimension at its begin index. An empty product
//! (any dimension empty) is canonicalized to that same representation by
//! `begin_index`. Push mode has no such requirement and works over any
//! push-capable dimensions.

use crate::range_error::RangeError;
use crate::traverse::flow::{Flow, Sink, from_fn};
use crate::traverse::index::{
    BidirectionalRange, CommonRange, IndexRange, MidpointRange, RandomAccessRange, TraversalTier,
};
use crate::traverse::push::PushRange;

/// View of tuples over a tuple of base ranges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CartesianProduct<Rs> {
    dims: Rs,
}

/// Compose a tuple of 2..=4 ranges into a cartesian-product view.
///
/// # Example
/// ```
/// use range_views::prelude::*;
/// let pairs: Vec<(u32, u32)> =
///     cartesian_product((iota(0u32, 2u32), iota(0u32, 3u32))).iter().collect();
/// assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
/// ```
pub fn cartesian_product<Rs>(dims: Rs) -> CartesianProduct<Rs> {
    CartesianProduct { dims }
}

impl<Rs> CartesianProduct<Rs> {
    pub fn dims(&self) -> &Rs {
        &self.dims
    }
}

// Index-protocol impls, uniform over arity. `tail`/`tail_rev` list the
// non-head dimensions in forward and reverse order; carries and borrows run
// rightmost-first, so reverse-order bodies expand from `tail_rev`.
macro_rules! impl_product_index {
    (
        head = $H:ident,
        tail = ($( $T:ident . $ti:tt ),+),
        tail_rev = ($( $RT:ident . $ri:tt ),+)
    ) => {
        impl<$H, $($T),+> IndexRange for CartesianProduct<($H, $($T),+)>
        where
            $H: CommonRange,
            $($T: IndexRange),+
        {
            type Index = ($H::Index, $($T::Index),+);
            type Elem = ($H::Elem, $($T::Elem),+);

            const TIER: TraversalTier = {
                let mut t = $H::TIER;
                $( t = t.min_with($T::TIER); )+
                t
            };

            fn begin_index(&self) -> Self::Index {
                let mut idx = (self.dims.0.begin_index(), $(self.dims.$ti.begin_index()),+);
                // Any empty dimension empties the whole product; force the
                // canonical end representation.
                if self.dims.0.at_end_index(&idx.0)
                    $( || self.dims.$ti.at_end_index(&idx.$ti) )+
                {
                    idx.0 = self.dims.0.end_index();
                }
                idx
            }

            #[inline]
            fn at_end_index(&self, idx: &Self::Index) -> bool {
                self.dims.0.at_end_index(&idx.0)
            }

            fn increment_index(&self, idx: &mut Self::Index) {
                // Odometer carry: bump the last dimension; on overflow reset
                // it to begin and carry leftward. Dimension 0 never resets.
                $(
                    {
                        let dim = &self.dims.$ri;
                        dim.increment_index(&mut idx.$ri);
                        if !dim.at_end_index(&idx.$ri) {
                            return;
                        }
                        idx.$ri = dim.begin_index();
                    }
                )+
                self.dims.0.increment_index(&mut idx.0);
            }

            fn dereference_index(&self, idx: &Self::Index) -> Self::Elem {
                (
                    self.dims.0.dereference_index(&idx.0),
                    $( self.dims.$ti.dereference_index(&idx.$ti) ),+
                )
            }
        }

        impl<$H, $($T),+> CommonRange for CartesianProduct<($H, $($T),+)>
        where
            $H: CommonRange,
            $($T: IndexRange),+
        {
            fn end_index(&self) -> Self::Index {
                (self.dims.0.end_index(), $(self.dims.$ti.begin_index()),+)
            }
        }

        impl<$H, $($T),+> BidirectionalRange for CartesianProduct<($H, $($T),+)>
        where
            $H: CommonRange + BidirectionalRange,
            $($T: CommonRange + BidirectionalRange),+
        {
            fn decrement_index(&self, idx: &mut Self::Index) {
                // Borrow rightmost-first: a dimension at begin wraps to its
                // last element and the borrow moves leftward.
                $(
                    {
                        let dim = &self.dims.$ri;
                        if idx.$ri == dim.begin_index() {
                            let mut last = dim.end_index();
                            dim.decrement_index(&mut last);
                            idx.$ri = last;
                        } else {
                            dim.decrement_index(&mut idx.$ri);
                            return;
                        }
                    }
                )+
                self.dims.0.decrement_index(&mut idx.0);
            }
        }

        impl<$H, $($T),+> RandomAccessRange for CartesianProduct<($H, $($T),+)>
        where
            $H: RandomAccessRange,
            $($T: RandomAccessRange),+
        {
            fn advance_index(&self, idx: &mut Self::Index, n: isize) {
                if n == 0 {
                    return;
                }
                // Dimensions 1..k are mixed-radix digits (radix = dimension
                // size); euclidean division propagates carries and borrows
                // leftward, dimension 0 absorbing whatever remains.
                let mut carry = n;
                $(
                    {
                        let dim = &self.dims.$ri;
                        let radix = dim.len() as isize;
                        let old = dim.distance_to_index(&dim.begin_index(), &idx.$ri);
                        let shifted = old + carry;
                        carry = shifted.div_euclid(radix);
                        let new = shifted.rem_euclid(radix);
                        dim.advance_index(&mut idx.$ri, new - old);
                        if carry == 0 {
                            return;
                        }
                    }
                )+
                self.dims.0.advance_index(&mut idx.0, carry);
            }

            fn distance_to_index(&self, from: &Self::Index, to: &Self::Index) -> isize {
                // Mixed-radix decode, most significant digit first.
                let mut acc = self.dims.0.distance_to_index(&from.0, &to.0);
                $(
                    {
                        let dim = &self.dims.$ti;
                        acc = acc * dim.len() as isize
                            + dim.distance_to_index(&from.$ti, &to.$ti);
                    }
                )+
                acc
            }

            fn len(&self) -> usize {
                self.dims.0.len() $( * self.dims.$ti.len() )+
            }
        }

        impl<$H, $($T),+> MidpointRange for CartesianProduct<($H, $($T),+)>
        where
            $H: CommonRange + MidpointRange,
            $($T: CommonRange + MidpointRange),+
        {
            fn middle_point(&self, idx: &mut Self::Index, idx_end: &Self::Index) {
                // The first dimension whose own midpoint actually advances
                // wins; everything to its right resets to begin so the tuple
                // stays a valid lexicographic midpoint. A dimension that
                // differs but cannot advance ends the walk: components to its
                // right may sit past their idx_end counterparts, so bisecting
                // them would violate the base precondition.
                let mut advanced = false;
                let mut stopped = false;
                {
                    if idx.0 != idx_end.0 {
                        let before = idx.0.clone();
                        self.dims.0.middle_point(&mut idx.0, &idx_end.0);
                        advanced = before != idx.0;
                        stopped = !advanced;
                    }
                }
                $(
                    {
                        let dim = &self.dims.$ti;
                        if advanced {
                            idx.$ti = dim.begin_index();
                        } else if !stopped && idx.$ti != idx_end.$ti {
                            let before = idx.$ti.clone();
                            dim.middle_point(&mut idx.$ti, &idx_end.$ti);
                            advanced = before != idx.$ti;
                            stopped = !advanced;
                        }
                    }
                )+
                let _ = (advanced, stopped);
            }
        }

        impl<$H, $($T),+> CartesianProduct<($H, $($T),+)>
        where
            $H: RandomAccessRange,
            $($T: RandomAccessRange),+
        {
            /// Checked product size; `Err` when it does not fit in `usize`.
            pub fn try_len(&self) -> Result<usize, RangeError> {
                let mut n: usize = self.dims.0.len();
                $(
                    n = n
                        .checked_mul(self.dims.$ti.len())
                        .ok_or(RangeError::SizeOverflow)?;
                )+
                Ok(n)
            }
        }
    };
}

impl_product_index! {
    head = R0,
    tail = (R1.1),
    tail_rev = (R1.1)
}
impl_product_index! {
    head = R0,
    tail = (R1.1, R2.2),
    tail_rev = (R2.2, R1.1)
}
impl_product_index! {
    head = R0,
    tail = (R1.1, R2.2, R3.3),
    tail_rev = (R3.3, R2.2, R1.1)
}

// Push mode: one nesting level per dimension, a full short-circuit on break.
// Outer-dimension element views are cloned once per inner tuple.

impl<R0, R1> PushRange for CartesianProduct<(R0, R1)>
where
    R0: PushRange,
    R1: PushRange,
    R0::Elem: Clone,
{
    type Elem = (R0::Elem, R1::Elem);

    fn for_each<S: Sink<Self::Elem>>(&self, sink: &mut S) -> Flow {
        let (d0, d1) = (&self.dims.0, &self.dims.1);
        d0.for_each(&mut from_fn(|e0: R0::Elem| {
            d1.for_each(&mut from_fn(|e1: R1::Elem| sink.accept((e0.clone(), e1))))
        }))
    }
}

impl<R0, R1, R2> PushRange for CartesianProduct<(R0, R1, R2)>
where
    R0: PushRange,
    R1: PushRange,
    R2: PushRange,
    R0::Elem: Clone,
    R1::Elem: Clone,
{
    type Elem = (R0::Elem, R1::Elem, R2::Elem);

    fn for_each<S: Sink<Self::Elem>>(&self, sink: &mut S) -> Flow {
        let (d0, d1, d2) = (&self.dims.0, &self.dims.1, &self.dims.2);
        d0.for_each(&mut from_fn(|e0: R0::Elem| {
            d1.for_each(&mut from_fn(|e1: R1::Elem| {
                d2.for_each(&mut from_fn(|e2: R2::Elem| {
                    sink.accept((e0.clone(), e1.clone(), e2))
                }))
            }))
        }))
    }
}

impl<R0, R1, R2, R3> PushRange for CartesianProduct<(R0, R1, R2, R3)>
where
    R0: PushRange,
    R1: PushRange,
    R2: PushRange,
    R3: PushRange,
    R0::Elem: Clone,
    R1::Elem: Clone,
    R2::Elem: Clone,
{
    type Elem = (R0::Elem, R1::Elem, R2::Elem, R3::Elem);

    fn for_each<S: Sink<Self::Elem>>(&self, sink: &mut S) -> Flow {
        let (d0, d1, d2, d3) = (&self.dims.0, &self.dims.1, &self.dims.2, &self.dims.3);
        d0.for_each(&mut from_fn(|e0: R0::Elem| {
            d1.for_each(&mut from_fn(|e1: R1::Elem| {
                d2.for_each(&mut from_fn(|e2: R2::Elem| {
                    d3.for_each(&mut from_fn(|e3: R3::Elem| {
                        sink.accept((e0.clone(), e1.clone(), e2.clone(), e3))
                    }))
                }))
            }))
        }))
    }
}

// A product of random-access dimensions stays random access.
#[cfg(test)]
static_assertions::assert_impl_all!(
    CartesianProduct<(crate::source::iota::IotaRange<u32>, crate::source::iota::IotaRange<u32>)>:
    RandomAccessRange, MidpointRange
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::iota::iota;
    use crate::traverse::ext::IndexRangeExt;

    #[test]
    fn odometer_increment_carries() {
        let p = cartesian_product((iota(0u8, 2), iota(0u8, 3)));
        let mut idx = p.begin_index();
        let mut seen = Vec::new();
        while !p.at_end_index(&idx) {
            seen.push(p.dereference_index(&idx));
            p.increment_index(&mut idx);
        }
        assert_eq!(seen, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(idx, p.end_index());
    }

    #[test]
    fn empty_dimension_canonicalizes() {
        let p = cartesian_product((iota(0u8, 2), iota(0u8, 0)));
        assert_eq!(p.begin_index(), p.end_index());
        assert!(p.at_end_index(&p.begin_index()));
        assert_eq!(p.iter().count(), 0);
    }

    #[test]
    fn decrement_borrows() {
        let p = cartesian_product((iota(0u8, 2), iota(0u8, 3)));
        let mut idx = p.end_index();
        p.decrement_index(&mut idx);
        assert_eq!(idx, (1, 2));
        p.decrement_index(&mut idx);
        assert_eq!(idx, (1, 1));
        let mut idx = (1u8, 0u8);
        p.decrement_index(&mut idx);
        assert_eq!(idx, (0, 2));
    }

    #[test]
    fn advance_distance_mixed_radix() {
        let p = cartesian_product((iota(0i32, 3), iota(0i32, 4), iota(0i32, 5)));
        assert_eq!(p.len(), 60);
        let begin = p.begin_index();
        let end = p.end_index();
        assert_eq!(p.distance_to_index(&begin, &end), 60);
        let mut idx = begin.clone();
        p.advance_index(&mut idx, 37);
        // 37 = 1*20 + 3*5 + 2
        assert_eq!(idx, (1, 3, 2));
        assert_eq!(p.distance_to_index(&begin, &idx), 37);
        p.advance_index(&mut idx, -37);
        assert_eq!(idx, begin);
    }

    #[test]
    fn advance_spans_narrow_element_types() {
        // The dimension-1 delta approaches the full 255-element radix, well
        // past what fits in the i8 element type itself.
        let p = cartesian_product((iota(0i16, 4), iota(-128i8, 127i8)));
        let mut idx = p.begin_index();
        p.advance_index(&mut idx, 500);
        assert_eq!(p.distance_to_index(&p.begin_index(), &idx), 500);
        p.advance_index(&mut idx, -500);
        assert_eq!(idx, p.begin_index());
    }

    #[test]
    fn try_len_overflows() {
        let big = iota(0u64, u64::MAX / 2);
        let p = cartesian_product((big, big));
        assert_eq!(p.try_len(), Err(RangeError::SizeOverflow));
        let small = cartesian_product((iota(0u64, 4), iota(0u64, 4)));
        assert_eq!(small.try_len(), Ok(16));
    }

    #[test]
    fn midpoint_resets_right_dims() {
        let p = cartesian_product((iota(0i32, 8), iota(0i32, 8)));
        let mut idx = p.begin_index();
        let end = p.end_index();
        p.middle_point(&mut idx, &end);
        // dimension 0 advances to its own midpoint, dimension 1 resets
        assert_eq!(idx, (4, 0));
    }

    #[test]
    fn midpoint_within_one_row_bisects_tail() {
        let p = cartesian_product((iota(0i32, 4), iota(0i32, 8)));
        let mut idx = (2, 1);
        p.middle_point(&mut idx, &(2, 7));
        assert_eq!(idx, (2, 4));
    }

    #[test]
    fn midpoint_stays_put_when_head_cannot_advance() {
        // Head distance is one and the tail pair is inverted; the walk
        // stops with the index unchanged.
        let p = cartesian_product((iota(0i32, 4), iota(0i32, 8)));
        let mut idx = (2, 6);
        p.middle_point(&mut idx, &(3, 2));
        assert_eq!(idx, (2, 6));
    }
}
