use crate::math::{Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::{Cuboid, Triangle};

/// Finds the best separating axis among the face normals of `cube1`.
///
/// `triangle2` must already be expressed in the local frame of `cube1`, so these axes
/// reduce to comparing the coordinate extrema of the triangle with the half-extents.
///
/// The search stops as soon as an axis with a separation greater than `tolerance` is found.
pub fn cuboid_triangle_find_local_separating_normal_oneway(
    cube1: &Cuboid,
    triangle2: &Triangle,
    tolerance: Real,
) -> (Real, Vector) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for i in 0..DIM {
        let (min, max) = triangle2.extents_on_dir(&Vector::ith(i, 1.0));
        let he = cube1.half_extents[i];
        let (separation, sign) = if min - he >= -he - max {
            (min - he, 1.0)
        } else {
            (-he - max, -1.0)
        };

        if separation > best_separation {
            best_separation = separation;
            best_dir = Vector::ith(i, sign);

            if separation > tolerance {
                break;
            }
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating axis among the cross products of an edge of `cube1` and
/// an edge of `triangle2`.
///
/// `triangle2` must already be expressed in the local frame of `cube1`. Axes generated by
/// an edge (almost) parallel to a box axis are skipped.
///
/// The search stops as soon as an axis with a separation greater than `tolerance` is found.
pub fn cuboid_triangle_find_local_separating_edge_twoway(
    cube1: &Cuboid,
    triangle2: &Triangle,
    tolerance: Real,
) -> (Real, Vector) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for edge in &triangle2.edges_scaled_directions() {
        let threshold = DEFAULT_EPSILON * edge.norm_squared();

        // Vector::{x, y ,z}().cross(edge)
        let axes = [
            Vector::new(0.0, -edge.z, edge.y),
            Vector::new(edge.z, 0.0, -edge.x),
            Vector::new(-edge.y, edge.x, 0.0),
        ];

        for axis1 in &axes {
            if axis1.norm_squared() <= threshold {
                continue;
            }

            let (min, max) = triangle2.extents_on_dir(axis1);
            let radius = axis1.abs().dot(&cube1.half_extents);
            let (separation, axis1) = if min - radius >= -radius - max {
                (min - radius, *axis1)
            } else {
                (-radius - max, -axis1)
            };
            let separation = separation / axis1.norm();

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis1;

                if separation > tolerance {
                    return (best_separation, best_dir);
                }
            }
        }
    }

    (best_separation, best_dir)
}
