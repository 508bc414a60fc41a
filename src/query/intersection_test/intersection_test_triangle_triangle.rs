use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::details::{
    intersection_test_coplanar_triangles, intersection_test_coplanar_triangles_wrt_normal,
};
use crate::shape::Triangle;
use na::Unit;

/// The result of an intersection test between two triangles.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TriangleTriangleIntersection {
    /// Do the triangles intersect?
    pub overlaps: bool,
    /// `true` if the triangles were found to be coplanar and the intersection was decided by
    /// the coplanar test.
    pub coplanar: bool,
    /// The endpoints of the intersection segment.
    ///
    /// Only set if the triangles intersect and are not coplanar. Both points lie on the line
    /// where the planes of the triangles meet. If the triangles are only within tolerance
    /// of each other, these are the closest ends of the two intervals, in no particular
    /// order.
    pub segment: Option<(Point, Point)>,
}

impl TriangleTriangleIntersection {
    fn disjoint() -> Self {
        Self::default()
    }

    fn coplanar(overlaps: bool) -> Self {
        Self {
            overlaps,
            coplanar: true,
            segment: None,
        }
    }
}

/// Tests if two triangles intersect.
///
/// See [`triangle_triangle_intersection`] for details.
#[inline]
pub fn intersection_test_triangle_triangle(
    triangle1: &Triangle,
    triangle2: &Triangle,
    tolerance: Real,
) -> bool {
    triangle_triangle_intersection(triangle1, triangle2, tolerance).overlaps
}

/// Tests if two triangles intersect and computes their intersection segment.
///
/// The vertices of each triangle are first classified against the plane of the other
/// triangle. A vertex at a distance smaller than `tolerance` from the plane is considered
/// to be on it. If all the vertices of one triangle lie strictly on the same side of the
/// other plane, the triangles don't intersect.
///
/// Otherwise, each triangle covers an interval of the line where both planes meet: the
/// points where its edges cross the other plane, and its vertices lying on that plane,
/// are projected on the line. The triangles intersect if these intervals overlap (within
/// `tolerance`). The crossing points are computed from the exact distances, so raising
/// the tolerance can only grow the intervals.
///
/// If all the vertices of one triangle lie on the other plane, the triangles are flagged
/// as coplanar and [`intersection_test_coplanar_triangles`] is also tried. It decides
/// alone when the planes are parallel.
///
/// A degenerate (zero-area) triangle has no plane. If only one triangle is degenerate, the
/// part of it lying on the plane of the other is tested against it. If both are
/// degenerate, they are tested as if they were coplanar.
pub fn triangle_triangle_intersection(
    triangle1: &Triangle,
    triangle2: &Triangle,
    tolerance: Real,
) -> TriangleTriangleIntersection {
    let normal1 = triangle1.normal();
    let normal2 = triangle2.normal();

    // Distances of the vertices of each triangle to the plane of the other.
    let dists2 = plane_distances(normal1.as_ref(), triangle1, triangle2);
    if !straddles(&dists2, tolerance) {
        return TriangleTriangleIntersection::disjoint();
    }

    let dists1 = plane_distances(normal2.as_ref(), triangle2, triangle1);
    if !straddles(&dists1, tolerance) {
        return TriangleTriangleIntersection::disjoint();
    }

    let (normal1, normal2) = match (normal1, normal2) {
        (Some(n1), Some(n2)) => (n1, n2),
        (None, Some(n2)) => {
            return crossing_degenerate(triangle1, &dists1, triangle2, &n2, tolerance)
        }
        (Some(n1), None) => {
            return crossing_degenerate(triangle2, &dists2, triangle1, &n1, tolerance)
        }
        (None, None) => {
            log::debug!("Intersection test between two degenerate triangles.");
            return TriangleTriangleIntersection::coplanar(intersection_test_coplanar_triangles(
                triangle1, triangle2, tolerance,
            ));
        }
    };

    let coplanar = on_plane(&dists1, tolerance) || on_plane(&dists2, tolerance);

    // Both normals are unit vectors, so this threshold is independent of the scale.
    let dir = normal1.into_inner().cross(&normal2.into_inner());
    let Some(dir) = Unit::try_new(dir, DEFAULT_EPSILON) else {
        log::debug!("Triangle planes are almost parallel: falling back to the coplanar test.");
        return TriangleTriangleIntersection::coplanar(intersection_test_coplanar_triangles(
            triangle1, triangle2, tolerance,
        ));
    };

    let crossing1 = plane_crossing(triangle1, &dists1, tolerance);
    let crossing2 = plane_crossing(triangle2, &dists2, tolerance);
    let interval1 = LineInterval::new(dir.as_ref(), &crossing1);
    let interval2 = LineInterval::new(dir.as_ref(), &crossing2);
    let intervals_overlap = interval1.max >= interval2.min - tolerance
        && interval2.max >= interval1.min - tolerance;

    if coplanar {
        // A triangle lies on the other plane within tolerance, but the planes still meet
        // along a line: either test is enough to report an overlap.
        return TriangleTriangleIntersection::coplanar(
            intervals_overlap
                || intersection_test_coplanar_triangles(triangle1, triangle2, tolerance),
        );
    }

    if !intervals_overlap {
        return TriangleTriangleIntersection::disjoint();
    }

    let start = if interval1.min >= interval2.min {
        interval1.min_pt
    } else {
        interval2.min_pt
    };
    let end = if interval1.max <= interval2.max {
        interval1.max_pt
    } else {
        interval2.max_pt
    };

    TriangleTriangleIntersection {
        overlaps: true,
        coplanar: false,
        segment: Some((start, end)),
    }
}

/// The signed distances of the vertices of `triangle` to the plane of `plane_triangle`.
///
/// All distances are zero if the plane is undefined.
fn plane_distances(
    normal: Option<&UnitVector>,
    plane_triangle: &Triangle,
    triangle: &Triangle,
) -> [Real; 3] {
    let Some(normal) = normal else {
        return [0.0; 3];
    };

    triangle
        .vertices()
        .map(|pt| normal.dot(&(pt - plane_triangle.a)))
}

fn straddles(dists: &[Real; 3], tolerance: Real) -> bool {
    !(dists.iter().all(|d| *d > tolerance) || dists.iter().all(|d| *d < -tolerance))
}

fn on_plane(dists: &[Real; 3], tolerance: Real) -> bool {
    dists.iter().all(|d| d.abs() <= tolerance)
}

/// The points of `triangle` that lie on a plane, given the signed distances of its
/// vertices to that plane.
///
/// These are the points where the edges cross the plane, and the vertices at a distance
/// smaller than `tolerance` from it. Raising the tolerance only ever adds points.
fn plane_crossing(triangle: &Triangle, dists: &[Real; 3], tolerance: Real) -> [Option<Point>; 6] {
    let pts = triangle.vertices();
    let mut res = [None; 6];

    for i in 0..3 {
        let j = (i + 1) % 3;

        if dists[i].abs() <= tolerance {
            res[i] = Some(pts[i]);
        }

        if dists[i] * dists[j] < 0.0 {
            let t = dists[i] / (dists[i] - dists[j]);
            res[3 + i] = Some(pts[i] + (pts[j] - pts[i]) * t);
        }
    }

    res
}

/// The part of a line covered by a set of points, parametrized along the line direction.
///
/// The interval is empty (`min > max`) if there are no points.
struct LineInterval {
    min: Real,
    max: Real,
    min_pt: Point,
    max_pt: Point,
}

impl LineInterval {
    fn new(dir: &Vector, pts: &[Option<Point>]) -> Self {
        let mut res = LineInterval {
            min: Real::MAX,
            max: -Real::MAX,
            min_pt: Point::origin(),
            max_pt: Point::origin(),
        };

        for pt in pts.iter().flatten() {
            let t = dir.dot(&pt.coords);

            if t < res.min {
                res.min = t;
                res.min_pt = *pt;
            }
            if t > res.max {
                res.max = t;
                res.max_pt = *pt;
            }
        }

        res
    }
}

/// Intersection between a degenerate triangle and the plane of a regular one.
///
/// The part of the degenerate triangle lying on the plane is tested against the regular
/// triangle on its plane.
fn crossing_degenerate(
    degenerate: &Triangle,
    dists: &[Real; 3],
    regular: &Triangle,
    normal: &UnitVector,
    tolerance: Real,
) -> TriangleTriangleIntersection {
    if on_plane(dists, tolerance) {
        return TriangleTriangleIntersection::coplanar(
            intersection_test_coplanar_triangles_wrt_normal(normal, degenerate, regular, tolerance),
        );
    }

    // The degenerate triangle is a segment: its points on the plane are bounded along
    // its longest edge.
    let dir = degenerate
        .edges_scaled_directions()
        .into_iter()
        .fold(Vector::zeros(), |best, edge| {
            if edge.norm_squared() > best.norm_squared() {
                edge
            } else {
                best
            }
        });
    let interval = LineInterval::new(&dir, &plane_crossing(degenerate, dists, tolerance));
    let crossing = Triangle::new(interval.min_pt, interval.max_pt, interval.max_pt);

    if interval.min > interval.max
        || !intersection_test_coplanar_triangles_wrt_normal(normal, &crossing, regular, tolerance)
    {
        return TriangleTriangleIntersection::disjoint();
    }

    TriangleTriangleIntersection {
        overlaps: true,
        coplanar: false,
        segment: Some((interval.min_pt, interval.max_pt)),
    }
}
