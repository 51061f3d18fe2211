//! Concrete range sources: borrowed slices, counting ranges, and iterator
//! generators.

pub mod iota;
pub mod iter_range;
pub mod slice;

pub use iota::{IotaRange, iota};
pub use iter_range::IterRange;
pub use slice::{SliceRange, SliceRangeMut};
