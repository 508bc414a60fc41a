/*!
overlap3d
=========

**overlap3d** is a small 3-dimensional geometric library providing discrete, pairwise
overlap tests between triangles, quads and oriented boxes, written with the rust
programming language.

All the tests are pure functions: they hold no state, perform no allocation (except for
the optional `parallel` batch helpers) and can be called concurrently from any number of
threads. Every test takes an explicit, non-negative `tolerance`, expressed in the same
linear unit as the input coordinates. A tolerance of `0.0` gives the exact (up to
floating-point rounding) classical behavior.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Matrix3, Matrix4, Point3, Unit, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The tolerance used by callers that want exact comparisons.
    ///
    /// Every overlap test takes its tolerance explicitly; this is only the value to pass
    /// when no slack is wanted.
    pub const DEFAULT_TOLERANCE: Real = 0.0;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point = Point3<Real>;

    /// The vector type.
    pub type Vector = Vector3<Real>;

    /// The unit vector type.
    pub type UnitVector = Unit<Vector3<Real>>;

    /// The 3x3 matrix type, used for rotations.
    pub type Matrix = Matrix3<Real>;

    /// The 4x4 homogeneous transformation matrix type.
    pub type HomogeneousMatrix = Matrix4<Real>;
}
