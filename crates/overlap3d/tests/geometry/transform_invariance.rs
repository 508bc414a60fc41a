use crate::utils::{rand_cuboid, rand_placement, rand_point, rand_real, rand_triangle};
use overlap3d::math::{Point, Vector};
use overlap3d::query::details::{
    intersection_test_coplanar_triangles, intersection_test_cuboid_cuboid,
    intersection_test_cuboid_cuboid_world, intersection_test_cuboid_triangle,
    intersection_test_triangle_triangle,
};
use overlap3d::query::{BoundingMode, SatMode};
use overlap3d::shape::Triangle;
use overlap3d::utils::Placement;

fn rand_flat_triangle(rng: &mut oorandom::Rand32) -> Triangle {
    let mut pt = || Point::new(rand_real(rng, -1.0, 1.0), rand_real(rng, -1.0, 1.0), 0.0);
    Triangle::new(pt(), pt(), pt())
}

#[test]
fn triangle_triangle_is_invariant_under_rigid_motions() {
    let mut rng = oorandom::Rand32::new(0xdead);

    for _ in 0..2000 {
        let tri1 = rand_triangle(&mut rng, 1.0);
        let tri2 = rand_triangle(&mut rng, 1.0);
        let pos = rand_placement(&mut rng, 10.0);

        assert_eq!(
            intersection_test_triangle_triangle(&tri1, &tri2, 0.0),
            intersection_test_triangle_triangle(
                &tri1.transformed(&pos),
                &tri2.transformed(&pos),
                0.0
            ),
        );
    }
}

#[test]
fn coplanar_triangles_are_invariant_under_rigid_motions() {
    let mut rng = oorandom::Rand32::new(77);

    for _ in 0..2000 {
        let tri1 = rand_flat_triangle(&mut rng);
        let tri2 = rand_flat_triangle(&mut rng);
        let pos = rand_placement(&mut rng, 10.0);

        for tolerance in [0.0, 0.1] {
            assert_eq!(
                intersection_test_coplanar_triangles(&tri1, &tri2, tolerance),
                intersection_test_coplanar_triangles(
                    &tri1.transformed(&pos),
                    &tri2.transformed(&pos),
                    tolerance
                ),
            );
        }
    }
}

#[test]
fn cuboid_triangle_is_invariant_under_rigid_motions() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..2000 {
        let cuboid = rand_cuboid(&mut rng);
        let triangle = rand_triangle(&mut rng, 1.2);
        let pos = rand_placement(&mut rng, 10.0);

        // The cuboid is moved to `pos`: the triangle, moved along with it, must be brought
        // back into the cuboid frame.
        let moved = triangle.transformed(&pos);

        for mode in [SatMode::Full, SatMode::Lite] {
            assert_eq!(
                intersection_test_cuboid_triangle(
                    &Placement::identity(),
                    &cuboid,
                    &triangle,
                    0.0,
                    mode
                ),
                intersection_test_cuboid_triangle(&pos.inverse(), &cuboid, &moved, 0.0, mode),
            );
        }
    }
}

#[test]
fn cuboid_cuboid_world_is_invariant_under_rigid_motions() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..2000 {
        let cuboid1 = rand_cuboid(&mut rng);
        let cuboid2 = rand_cuboid(&mut rng);
        let pos1 = rand_placement(&mut rng, 1.0);
        let pos2 = rand_placement(&mut rng, 1.0);
        let relative2 = rand_placement(&mut rng, 0.5);
        let world = rand_placement(&mut rng, 10.0);

        // World-space AABBs change with the world frame: only oriented boxes are invariant.
        for mode in [SatMode::Full, SatMode::Lite] {
            assert_eq!(
                intersection_test_cuboid_cuboid_world(
                    &pos1.to_homogeneous(),
                    &cuboid1,
                    &pos2.to_homogeneous(),
                    &relative2,
                    &cuboid2,
                    0.0,
                    mode,
                    BoundingMode::Obb
                ),
                intersection_test_cuboid_cuboid_world(
                    &(world * pos1).to_homogeneous(),
                    &cuboid1,
                    &(world * pos2).to_homogeneous(),
                    &relative2,
                    &cuboid2,
                    0.0,
                    mode,
                    BoundingMode::Obb
                ),
            );
        }

        let pos12 = pos1.inv_mul(&(pos2 * relative2));
        assert_eq!(
            intersection_test_cuboid_cuboid(&pos12, &cuboid1, &cuboid2, 0.0, SatMode::Full),
            intersection_test_cuboid_cuboid_world(
                &pos1.to_homogeneous(),
                &cuboid1,
                &pos2.to_homogeneous(),
                &relative2,
                &cuboid2,
                0.0,
                SatMode::Full,
                BoundingMode::Obb
            ),
        );
    }
}

#[test]
fn separated_points_stay_separated() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..100 {
        let pt = rand_point(&mut rng, 1.0);
        let tri1 = Triangle::new(pt, pt, pt);
        let tri2 = Triangle::new(pt + Vector::x(), pt + Vector::x(), pt + Vector::x());

        assert!(!intersection_test_coplanar_triangles(&tri1, &tri2, 0.5));
        assert!(intersection_test_coplanar_triangles(&tri1, &tri2, 1.5));
        assert!(intersection_test_coplanar_triangles(&tri1, &tri1, 0.0));
    }
}
