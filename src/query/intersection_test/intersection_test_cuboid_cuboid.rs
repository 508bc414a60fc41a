use crate::bounding_volume::details::{aabb_from_obb, aabb_from_obb_with_relative};
use crate::math::{HomogeneousMatrix, Real};
use crate::query::{sat, BoundingMode, SatMode};
use crate::shape::Cuboid;
use crate::utils::Placement;

/// Intersection test between cuboids.
///
/// `pos12` is the placement of `cuboid2` relative to `cuboid1`. The face normals of both
/// cuboids are tested first. With [`SatMode::Full`], the 9 cross products of their axes
/// are tested too, which makes the test exact. [`SatMode::Lite`] skips them: it may report
/// an intersection for disjoint cuboids, but never misses an actual intersection.
#[inline]
pub fn intersection_test_cuboid_cuboid(
    pos12: &Placement,
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    tolerance: Real,
    mode: SatMode,
) -> bool {
    let sep1 = sat::cuboid_cuboid_find_local_separating_normal_oneway(
        cuboid1, cuboid2, pos12, tolerance,
    )
    .0;
    if sep1 > tolerance {
        return false;
    }

    let pos21 = pos12.inverse();
    let sep2 = sat::cuboid_cuboid_find_local_separating_normal_oneway(
        cuboid2, cuboid1, &pos21, tolerance,
    )
    .0;
    if sep2 > tolerance {
        return false;
    }

    if mode.is_lite() {
        return true;
    }

    let sep3 =
        sat::cuboid_cuboid_find_local_separating_edge_twoway(cuboid1, cuboid2, pos12, tolerance).0;
    sep3 <= tolerance
}

/// Intersection test between two cuboids placed by homogeneous transforms.
///
/// `cuboid1` is placed by `xform1`. `cuboid2` is first moved by `relative2` and then
/// placed by `xform2`. Both transforms are decomposed with
/// [`Placement::from_homogeneous_unchecked`]: their rotation blocks must be orthonormal.
///
/// With [`BoundingMode::Obb`], this is equivalent to [`intersection_test_cuboid_cuboid`]
/// with the relative placement of the second cuboid. With [`BoundingMode::Aabb`], the
/// world-space AABBs of both cuboids are compared instead (and `mode` is ignored), which is
/// cheaper but conservative. Both modes give the same answer when the cuboids are swapped.
pub fn intersection_test_cuboid_cuboid_world(
    xform1: &HomogeneousMatrix,
    cuboid1: &Cuboid,
    xform2: &HomogeneousMatrix,
    relative2: &Placement,
    cuboid2: &Cuboid,
    tolerance: Real,
    mode: SatMode,
    bounding: BoundingMode,
) -> bool {
    match bounding {
        BoundingMode::Obb => {
            let pos1 = Placement::from_homogeneous_unchecked(xform1);
            let pos2 = Placement::from_homogeneous_unchecked(xform2) * *relative2;
            let pos12 = pos1.inv_mul(&pos2);
            intersection_test_cuboid_cuboid(&pos12, cuboid1, cuboid2, tolerance, mode)
        }
        BoundingMode::Aabb => {
            let aabb1 = aabb_from_obb(&cuboid1.half_extents, xform1);
            let aabb2 = aabb_from_obb_with_relative(&cuboid2.half_extents, xform2, relative2);
            aabb1.intersects_with_tolerance(&aabb2, tolerance)
        }
    }
}
