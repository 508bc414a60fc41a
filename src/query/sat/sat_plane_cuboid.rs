use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::Cuboid;

/// Computes the separation between a plane and a cuboid centered at the origin.
///
/// The plane is the set of points `x` such that `normal · x + d = 0`, so `d` is the signed
/// distance from the cuboid center to the plane. The result is positive if the cuboid
/// lies entirely on one side of the plane, and negative if the plane cuts through it.
#[inline]
pub fn plane_cuboid_compute_separation(normal: &UnitVector, d: Real, cuboid: &Cuboid) -> Real {
    let radius = normal.abs().dot(&cuboid.half_extents);
    d.abs() - radius
}

/// Computes the separation along the normal of a plane passing through `point1`.
///
/// Both the point and the normal are expressed in the local frame of `shape2`. Returns
/// `-Real::MAX` if there is no normal to test (e.g. for a degenerate triangle).
pub fn point_cuboid_find_local_separating_normal_oneway(
    point1: Point,
    normal1: Option<UnitVector>,
    shape2: &Cuboid,
) -> (Real, Vector) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    if let Some(normal1) = normal1 {
        let d = -normal1.dot(&point1.coords);
        let axis1 = if d >= 0.0 { normal1 } else { -normal1 };
        let separation = plane_cuboid_compute_separation(&normal1, d, shape2);

        if separation > best_separation {
            best_separation = separation;
            best_dir = *axis1;
        }
    }

    (best_separation, best_dir)
}
