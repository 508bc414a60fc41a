use crate::utils::{rand_cuboid, rand_placement, rand_point, rand_real, rand_triangle};
use oorandom::Rand32;
use overlap3d::math::{Point, UnitVector, Vector};
use overlap3d::na::Unit;
use overlap3d::query::details::{
    intersection_test_coplanar_quads, intersection_test_cuboid_cuboid,
    intersection_test_cuboid_triangle, intersection_test_plane_cuboid,
    intersection_test_triangle_triangle,
};
use overlap3d::query::SatMode;
use overlap3d::shape::{Quad, Triangle};
use overlap3d::utils::Placement;

const TOLERANCES: [f64; 5] = [0.0, 0.01, 0.05, 0.2, 1.0];

/// Checks that, once `test` returns `true` for a tolerance, it does for all the larger ones.
fn assert_monotonic(mut test: impl FnMut(f64) -> bool) {
    let mut overlapped = false;

    for tolerance in TOLERANCES {
        let overlaps = test(tolerance);
        assert!(!overlapped || overlaps, "lost overlap at tolerance {}", tolerance);
        overlapped = overlaps;
    }
}

#[test]
fn cuboid_cuboid_tolerance_monotonicity() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..1000 {
        let cuboid1 = rand_cuboid(&mut rng);
        let cuboid2 = rand_cuboid(&mut rng);
        let pos12 = rand_placement(&mut rng, 2.0);

        for mode in [SatMode::Full, SatMode::Lite] {
            assert_monotonic(|tol| {
                intersection_test_cuboid_cuboid(&pos12, &cuboid1, &cuboid2, tol, mode)
            });
        }
    }
}

#[test]
fn cuboid_triangle_tolerance_monotonicity() {
    let mut rng = oorandom::Rand32::new(12);

    for _ in 0..1000 {
        let cuboid = rand_cuboid(&mut rng);
        let triangle = rand_triangle(&mut rng, 1.5);
        let pos12 = rand_placement(&mut rng, 1.0);

        for mode in [SatMode::Full, SatMode::Lite] {
            assert_monotonic(|tol| {
                intersection_test_cuboid_triangle(&pos12, &cuboid, &triangle, tol, mode)
            });
        }
    }
}

#[test]
fn plane_cuboid_tolerance_monotonicity() {
    let mut rng = oorandom::Rand32::new(13);

    for _ in 0..1000 {
        let cuboid = rand_cuboid(&mut rng);
        let dir = rand_point(&mut rng, 1.0).coords + Vector::repeat(1.0e-3);
        let normal = Unit::new_normalize(dir);
        let d = rand_real(&mut rng, -2.0, 2.0);

        assert_monotonic(|tol| intersection_test_plane_cuboid(&normal, d, &cuboid, tol));
    }
}

#[test]
fn coplanar_quads_tolerance_monotonicity() {
    let square = |x: f64, y: f64| {
        Quad::new(
            Point::new(x, y, 0.0),
            Point::new(x + 1.0, y, 0.0),
            Point::new(x + 1.0, y + 1.0, 0.0),
            Point::new(x, y + 1.0, 0.0),
        )
    };

    for shift in [0.5, 1.0, 1.005, 1.03, 1.1, 1.5, 3.0] {
        assert_monotonic(|tol| {
            intersection_test_coplanar_quads(&square(0.0, 0.0), &square(shift, 0.3), tol)
        });
    }
}

#[test]
fn triangle_triangle_tolerance_monotonicity() {
    let horizontal = Triangle::new(
        Point::new(-1.0, -1.0, 0.0),
        Point::new(1.0, -1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    let vertical = Triangle::new(
        Point::new(-0.5, 0.0, -1.0),
        Point::new(0.5, 0.0, -1.0),
        Point::new(0.0, 0.0, 1.0),
    );

    // Lifted above the plane of `horizontal`, or moved sideways along the intersection line.
    for shift in [
        Vector::new(0.0, 0.0, 1.005),
        Vector::new(0.0, 0.0, 1.1),
        Vector::new(0.0, 0.0, 3.0),
        Vector::new(0.8, 0.0, 0.0),
        Vector::new(1.1, 0.0, 0.0),
        Vector::new(0.0, 0.0, 1.0e-3),
    ] {
        let moved = vertical.transformed(&Placement::from_translation(shift));
        assert_monotonic(|tol| intersection_test_triangle_triangle(&horizontal, &moved, tol));
    }

    // Almost coplanar.
    for dz in [1.0e-3, 0.03, 0.1] {
        let lift = Placement::from_translation(Vector::new(0.3, 0.0, dz));
        let lifted = horizontal.transformed(&lift);
        assert_monotonic(|tol| intersection_test_triangle_triangle(&horizontal, &lifted, tol));
    }
}

/// A random point at a distance smaller than `max_dist` from the plane of `triangle`.
fn rand_point_near_plane(
    rng: &mut Rand32,
    triangle: &Triangle,
    normal: &UnitVector,
    max_dist: f64,
) -> Point {
    let u = rand_real(rng, -0.5, 1.5);
    let v = rand_real(rng, -0.5, 1.5);
    triangle.a
        + (triangle.b - triangle.a) * u
        + (triangle.c - triangle.a) * v
        + normal.into_inner() * rand_real(rng, -max_dist, max_dist)
}

#[test]
fn triangle_triangle_tolerance_monotonicity_near_planes() {
    let mut rng = Rand32::new(14);
    let mut num_exact_overlaps = 0;

    for i in 0..5000 {
        let tri1 = rand_triangle(&mut rng, 1.0);
        let Some(normal) = tri1.normal() else {
            continue;
        };

        // One, two or all three vertices close to the plane of `tri1`.
        let num_near = 1 + i % 3;
        let pts: [Point; 3] = core::array::from_fn(|k| {
            if k < num_near {
                rand_point_near_plane(&mut rng, &tri1, &normal, 0.3)
            } else {
                rand_point(&mut rng, 1.5)
            }
        });
        let tri2 = Triangle::from(pts);

        for (a, b) in [(&tri1, &tri2), (&tri2, &tri1)] {
            assert_monotonic(|tol| intersection_test_triangle_triangle(a, b, tol));

            // Actual intersections are never lost by raising the tolerance.
            if intersection_test_triangle_triangle(a, b, 0.0) {
                num_exact_overlaps += 1;

                for tolerance in TOLERANCES {
                    assert!(
                        intersection_test_triangle_triangle(a, b, tolerance),
                        "{:?} {:?} {}",
                        a,
                        b,
                        tolerance
                    );
                }
            }
        }
    }

    assert!(num_exact_overlaps > 0);
}
