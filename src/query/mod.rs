//! Non-persistent geometric queries.
//!
//! Every query of this module is a pure function: it holds no state across calls and
//! can be invoked concurrently from any number of threads.
//!
//! # Specific cases
//! The functions exported by the `details` submodule test one pair of shapes known at
//! compile-time. They have the form `intersection_test_[shape1]_[shape2]()` where
//! `[shape1]` and `[shape2]` are the types of the shapes passed to the function, e.g.,
//! `cuboid` or `triangle`.
//!
//! When a relative placement `pos12` is needed, it maps the local frame of the second
//! shape into the local frame of the first one.
//!
//! Every test takes an explicit, non-negative `tolerance`. A pair of shapes separated by
//! a gap smaller than or equal to `tolerance` is reported as intersecting. In particular,
//! touching shapes are always intersecting.

pub use self::intersection_test::TriangleTriangleIntersection;
pub use self::query_options::{BoundingMode, SatMode};

#[cfg(feature = "parallel")]
pub mod batch;
mod intersection_test;
mod query_options;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
