//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(hidden)]
pub mod aabb;
mod aabb_cuboid;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_cuboid::{aabb_from_obb, aabb_from_obb_with_relative};
}
