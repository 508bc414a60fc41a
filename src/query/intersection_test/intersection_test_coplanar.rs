use crate::math::{Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{Quad, Triangle};
use na::{Unit, Vector2};

/// Tests if two coplanar triangles intersect.
///
/// The triangles are assumed to lie on the same plane: the plane normal is taken from the
/// triangle with the largest area. See [`intersection_test_coplanar_triangles_wrt_normal`].
///
/// If both triangles are degenerate, the plane containing the longest edge and the
/// centers of both triangles is used instead.
pub fn intersection_test_coplanar_triangles(
    triangle1: &Triangle,
    triangle2: &Triangle,
    tolerance: Real,
) -> bool {
    let normal = if triangle1.normal().is_none() && triangle2.normal().is_none() {
        log::debug!("Coplanar test between two degenerate triangles.");
        degenerate_pair_normal(triangle1, triangle2)
    } else {
        largest(triangle1.scaled_normal(), triangle2.scaled_normal())
    };

    intersection_test_coplanar_triangles_wrt_normal(&normal, triangle1, triangle2, tolerance)
}

/// Tests if two triangles lying on a plane with the given normal intersect.
///
/// Both triangles are projected on the coordinate plane obtained by dropping the
/// component of `normal` with the largest magnitude. A 2D separating axis test is then
/// performed with the normals of the 6 projected edges. The `normal` does not need to
/// be normalized.
///
/// The gaps measured on the projection are scaled back to lengths on the plane, so
/// `tolerance` is an actual distance between the triangles.
pub fn intersection_test_coplanar_triangles_wrt_normal(
    normal: &Vector,
    triangle1: &Triangle,
    triangle2: &Triangle,
    tolerance: Real,
) -> bool {
    let projection = PlaneProjection::new(normal);
    let pts1 = projection.project(triangle1);
    let pts2 = projection.project(triangle2);

    if projection.find_separating_edge_normal(&pts1, &pts2, tolerance)
        || projection.find_separating_edge_normal(&pts2, &pts1, tolerance)
    {
        return false;
    }

    if is_degenerate(&pts1) || is_degenerate(&pts2) {
        // Edge normals are not enough to separate segments or points.
        let [d0, d1, d2] = edge_directions(&pts1);
        let [d3, d4, d5] = edge_directions(&pts2);
        let axes = [d0, d1, d2, d3, d4, d5, center(&pts2) - center(&pts1)];
        return !axes
            .iter()
            .any(|axis| projection.is_separating_axis(axis, &pts1, &pts2, tolerance));
    }

    true
}

/// Tests if two coplanar quads intersect.
///
/// Each quad is dissected into two triangles (see [`Quad::dissect`]) and the four pairs
/// of triangles are tested with [`intersection_test_coplanar_triangles_wrt_normal`]. The
/// plane normal is taken from the quad with the largest area.
pub fn intersection_test_coplanar_quads(quad1: &Quad, quad2: &Quad, tolerance: Real) -> bool {
    let normal = largest(quad1.scaled_normal(), quad2.scaled_normal());
    let dissection1 = quad1.dissect(tolerance);
    let dissection2 = quad2.dissect(tolerance);

    dissection1.triangles().iter().any(|tri1| {
        dissection2.triangles().iter().any(|tri2| {
            intersection_test_coplanar_triangles_wrt_normal(&normal, tri1, tri2, tolerance)
        })
    })
}

fn largest(n1: Vector, n2: Vector) -> Vector {
    if n1.norm_squared() >= n2.norm_squared() {
        n1
    } else {
        n2
    }
}

fn degenerate_pair_normal(triangle1: &Triangle, triangle2: &Triangle) -> Vector {
    let dcenter = triangle2.center() - triangle1.center();
    let mut longest = triangle1
        .edges_scaled_directions()
        .iter()
        .chain(triangle2.edges_scaled_directions().iter())
        .fold(Vector::zeros(), |best, edge| {
            if edge.norm_squared() > best.norm_squared() {
                *edge
            } else {
                best
            }
        });

    if longest == Vector::zeros() {
        // Both triangles are points.
        longest = dcenter;
    }

    let normal = longest.cross(&dcenter);
    if normal.norm_squared() > DEFAULT_EPSILON * longest.norm_squared() * dcenter.norm_squared() {
        normal
    } else {
        longest.cross(&Vector::ith(longest.iamin(), 1.0))
    }
}

/// Projection of the 3D space on a coordinate plane.
struct PlaneProjection {
    dims: (usize, usize),
    normal: Option<UnitVector>,
}

impl PlaneProjection {
    fn new(normal: &Vector) -> Self {
        let abs = normal.abs();
        let dims = if abs.x >= abs.y && abs.x >= abs.z {
            (1, 2)
        } else if abs.y >= abs.z {
            (2, 0)
        } else {
            (0, 1)
        };

        let normal = Unit::try_new(*normal, 0.0);
        if normal.is_none() {
            log::debug!("Coplanar triangle test with a degenerate normal.");
        }

        PlaneProjection { dims, normal }
    }

    fn project(&self, triangle: &Triangle) -> [Vector2<Real>; 3] {
        let (i, j) = self.dims;
        triangle.vertices().map(|pt| Vector2::new(pt[i], pt[j]))
    }

    /// The length, on the plane, of a unit step along the projected `axis`.
    ///
    /// Projected distances along `axis` must be divided by this factor to become actual
    /// distances on the plane.
    fn axis_scale(&self, axis: &Vector2<Real>) -> Real {
        let mut axis3 = Vector::zeros();
        axis3[self.dims.0] = axis.x;
        axis3[self.dims.1] = axis.y;

        match &self.normal {
            Some(n) => (axis3 - n.into_inner() * n.dot(&axis3)).norm(),
            None => axis3.norm(),
        }
    }

    fn is_separating_axis(
        &self,
        axis: &Vector2<Real>,
        pts1: &[Vector2<Real>; 3],
        pts2: &[Vector2<Real>; 3],
        tolerance: Real,
    ) -> bool {
        if axis.norm_squared() == 0.0 {
            return false;
        }

        let (min1, max1) = extents_on_dir(pts1, axis);
        let (min2, max2) = extents_on_dir(pts2, axis);
        let margin = tolerance * self.axis_scale(axis);

        min2 - max1 > margin || min1 - max2 > margin
    }

    fn find_separating_edge_normal(
        &self,
        pts1: &[Vector2<Real>; 3],
        pts2: &[Vector2<Real>; 3],
        tolerance: Real,
    ) -> bool {
        (0..3).any(|k| {
            let edge = pts1[(k + 1) % 3] - pts1[k];
            let axis = Vector2::new(-edge.y, edge.x);
            self.is_separating_axis(&axis, pts1, pts2, tolerance)
        })
    }
}

fn extents_on_dir(pts: &[Vector2<Real>; 3], dir: &Vector2<Real>) -> (Real, Real) {
    pts.iter().fold((Real::MAX, -Real::MAX), |(min, max), pt| {
        let proj = pt.dot(dir);
        (min.min(proj), max.max(proj))
    })
}

fn is_degenerate(pts: &[Vector2<Real>; 3]) -> bool {
    let ab = pts[1] - pts[0];
    let ac = pts[2] - pts[0];
    let longest = ab
        .norm_squared()
        .max(ac.norm_squared())
        .max((pts[2] - pts[1]).norm_squared());

    ab.perp(&ac).abs() <= DEFAULT_EPSILON * longest
}

fn center(pts: &[Vector2<Real>; 3]) -> Vector2<Real> {
    (pts[0] + pts[1] + pts[2]) / 3.0
}

fn edge_directions(pts: &[Vector2<Real>; 3]) -> [Vector2<Real>; 3] {
    [pts[1] - pts[0], pts[2] - pts[1], pts[0] - pts[2]]
}
