use crate::math::{Real, UnitVector};
use crate::query::sat;
use crate::shape::Cuboid;

/// Tests if the plane `normal · x + d = 0` intersects a cuboid centered at the origin.
///
/// The plane intersects the cuboid if the cuboid is not entirely on one side of the
/// plane by more than `tolerance`.
#[inline]
pub fn intersection_test_plane_cuboid(
    normal: &UnitVector,
    d: Real,
    cuboid: &Cuboid,
    tolerance: Real,
) -> bool {
    sat::plane_cuboid_compute_separation(normal, d, cuboid) <= tolerance
}
