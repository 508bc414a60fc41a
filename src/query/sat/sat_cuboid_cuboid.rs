use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::Cuboid;
use crate::utils::Placement;

/// Computes the separation between two cuboids along a given axis.
///
/// `axis1` is expressed in the local frame of `cuboid1` and does not need to be
/// normalized, though it must not be zero. The separation is expressed in the same
/// unit as the cuboid dimensions: positive if the projections of the cuboids on the axis
/// are disjoint, negative if they overlap.
///
/// Returns the separation and the axis, oriented from `cuboid1` toward `cuboid2`.
pub fn cuboid_cuboid_compute_separation_wrt_local_line(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Placement,
    axis1: &Vector,
) -> (Real, Vector) {
    let center_dist = pos12.translation.dot(axis1);
    let radius1 = axis1.abs().dot(&cuboid1.half_extents);
    let radius2 = pos12
        .inverse_transform_vector(axis1)
        .abs()
        .dot(&cuboid2.half_extents);

    let axis1 = if center_dist >= 0.0 { *axis1 } else { -axis1 };
    let separation = (center_dist.abs() - radius1 - radius2) / axis1.norm();

    (separation, axis1)
}

/// Finds the best separating axis among the cross products of an edge of `cuboid1` and
/// an edge of `cuboid2`.
///
/// There are 3 × 3 = 9 such axes. Axes generated by (almost) parallel edges are skipped:
/// the face normals tested by [`cuboid_cuboid_find_local_separating_normal_oneway`]
/// cover them.
///
/// The search stops as soon as an axis with a separation greater than `tolerance` is found.
/// Otherwise, the maximum separation found is returned.
pub fn cuboid_cuboid_find_local_separating_edge_twoway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Placement,
    tolerance: Real,
) -> (Real, Vector) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    let x2 = pos12.rotation.column(0).into_owned();
    let y2 = pos12.rotation.column(1).into_owned();
    let z2 = pos12.rotation.column(2).into_owned();

    // We have 3 * 3 = 9 axes to test.
    let axes = [
        // Vector::{x, y ,z}().cross(x2)
        Vector::new(0.0, -x2.z, x2.y),
        Vector::new(x2.z, 0.0, -x2.x),
        Vector::new(-x2.y, x2.x, 0.0),
        // Vector::{x, y ,z}().cross(y2)
        Vector::new(0.0, -y2.z, y2.y),
        Vector::new(y2.z, 0.0, -y2.x),
        Vector::new(-y2.y, y2.x, 0.0),
        // Vector::{x, y ,z}().cross(z2)
        Vector::new(0.0, -z2.z, z2.y),
        Vector::new(z2.z, 0.0, -z2.x),
        Vector::new(-z2.y, z2.x, 0.0),
    ];

    for axis1 in &axes {
        if axis1.norm_squared() > DEFAULT_EPSILON {
            let (separation, axis1) =
                cuboid_cuboid_compute_separation_wrt_local_line(cuboid1, cuboid2, pos12, axis1);

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis1;

                if separation > tolerance {
                    break;
                }
            }
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating axis among the face normals of `cuboid1`.
///
/// For each local axis `i` of `cuboid1`, the separation is
/// `|T_i| - ra_i - Σ_j rb_j |R_ij|` where `(R, T)` is `pos12`. Testing the face normals of
/// `cuboid2` is done by calling this function again with swapped arguments and the inverse
/// placement.
///
/// The search stops as soon as an axis with a separation greater than `tolerance` is found.
/// Otherwise, the maximum separation found is returned.
pub fn cuboid_cuboid_find_local_separating_normal_oneway(
    cuboid1: &Cuboid,
    cuboid2: &Cuboid,
    pos12: &Placement,
    tolerance: Real,
) -> (Real, Vector) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();
    let radii2 = pos12.absolute_transform_vector(&cuboid2.half_extents);

    for i in 0..DIM {
        let t = pos12.translation[i];
        let separation = t.abs() - cuboid1.half_extents[i] - radii2[i];

        if separation > best_separation {
            let sign = Real::copysign(1.0, t);
            best_separation = separation;
            best_dir = Vector::ith(i, sign);

            if separation > tolerance {
                break;
            }
        }
    }

    (best_separation, best_dir)
}
