use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::query::{sat, SatMode};
use crate::shape::{Cuboid, Triangle};
use crate::utils::Placement;

/// Tests if a triangle intersects an AABB.
pub fn intersection_test_aabb_triangle(
    aabb1: &Aabb,
    triangle2: &Triangle,
    tolerance: Real,
    mode: SatMode,
) -> bool {
    let cuboid1 = Cuboid::new(aabb1.half_extents());
    let pos12 = Placement::from_translation(-aabb1.center().coords);
    intersection_test_cuboid_triangle(&pos12, &cuboid1, triangle2, tolerance, mode)
}

/// Tests if a triangle intersects a cuboid.
#[inline]
pub fn intersection_test_triangle_cuboid(
    pos12: &Placement,
    triangle1: &Triangle,
    cuboid2: &Cuboid,
    tolerance: Real,
    mode: SatMode,
) -> bool {
    intersection_test_cuboid_triangle(&pos12.inverse(), cuboid2, triangle1, tolerance, mode)
}

/// Tests if a triangle intersects a cuboid.
///
/// The triangle is first moved into the local frame of the cuboid by `pos12`. Then the
/// 3 face normals of the cuboid and the normal of the triangle are tested. With
/// [`SatMode::Full`], the 9 cross products between the cuboid axes and the triangle edges
/// are tested too. [`SatMode::Lite`] skips them: it may report an intersection for a
/// disjoint pair, but never misses an actual intersection.
///
/// The normal of a degenerate (zero-area) triangle is not tested.
#[inline]
pub fn intersection_test_cuboid_triangle(
    pos12: &Placement,
    cube1: &Cuboid,
    triangle2: &Triangle,
    tolerance: Real,
    mode: SatMode,
) -> bool {
    let triangle2 = triangle2.transformed(pos12);

    let sep1 =
        sat::cuboid_triangle_find_local_separating_normal_oneway(cube1, &triangle2, tolerance).0;
    if sep1 > tolerance {
        return false;
    }

    let sep2 = sat::point_cuboid_find_local_separating_normal_oneway(
        triangle2.a,
        triangle2.normal(),
        cube1,
    )
    .0;
    if sep2 > tolerance {
        return false;
    }

    if mode.is_lite() {
        return true;
    }

    let sep3 =
        sat::cuboid_triangle_find_local_separating_edge_twoway(cube1, &triangle2, tolerance).0;
    sep3 <= tolerance
}
