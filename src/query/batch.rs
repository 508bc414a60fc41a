//! Intersection tests between one shape and many cuboids, evaluated in parallel.
//!
//! Each test is independent: the results are the same as calling the corresponding
//! function of [`details`](crate::query::details) on each element, in order.

use crate::math::Real;
use crate::query::{details, SatMode};
use crate::shape::{Cuboid, Triangle};
use crate::utils::Placement;
use rayon::prelude::*;

/// Tests a triangle against each placed cuboid of `cuboids`.
///
/// Each cuboid comes with its placement in the frame of `triangle`. The returned vector
/// has one element per cuboid.
pub fn intersection_test_triangle_cuboids(
    triangle: &Triangle,
    cuboids: &[(Placement, Cuboid)],
    tolerance: Real,
    mode: SatMode,
) -> Vec<bool> {
    cuboids
        .par_iter()
        .map(|(pos12, cuboid2)| {
            details::intersection_test_triangle_cuboid(pos12, triangle, cuboid2, tolerance, mode)
        })
        .collect()
}

/// Tests a cuboid placed at `pos1` against each placed cuboid of `cuboids`.
///
/// All the placements are expressed in the same frame. The returned vector has one
/// element per cuboid.
pub fn intersection_test_cuboid_cuboids(
    pos1: &Placement,
    cuboid1: &Cuboid,
    cuboids: &[(Placement, Cuboid)],
    tolerance: Real,
    mode: SatMode,
) -> Vec<bool> {
    cuboids
        .par_iter()
        .map(|(pos2, cuboid2)| {
            let pos12 = pos1.inv_mul(pos2);
            details::intersection_test_cuboid_cuboid(&pos12, cuboid1, cuboid2, tolerance, mode)
        })
        .collect()
}
