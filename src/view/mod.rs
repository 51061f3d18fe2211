//! Lazy views over base ranges.

pub mod filter;
pub mod product;

pub use filter::{Filter, filter};
pub use product::{CartesianProduct, cartesian_product};
