use crate::utils::{rand_cuboid, rand_placement, rand_triangle};
use overlap3d::query::details::{
    intersection_test_cuboid_cuboid, intersection_test_cuboid_cuboid_world,
    intersection_test_cuboid_triangle,
};
use overlap3d::query::{BoundingMode, SatMode};

#[test]
fn lite_cuboid_cuboid_never_misses_an_overlap() {
    let mut rng = oorandom::Rand32::new(21);
    let mut false_positives = 0;

    for _ in 0..5000 {
        let cuboid1 = rand_cuboid(&mut rng);
        let cuboid2 = rand_cuboid(&mut rng);
        let pos12 = rand_placement(&mut rng, 2.0);

        for tolerance in [0.0, 0.1] {
            let test = |mode| {
                intersection_test_cuboid_cuboid(&pos12, &cuboid1, &cuboid2, tolerance, mode)
            };
            let full = test(SatMode::Full);
            let lite = test(SatMode::Lite);

            assert!(!full || lite, "{:?} {:?} {:?}", cuboid1, cuboid2, pos12);
            false_positives += (lite && !full) as usize;
        }
    }

    // Dropping the edge-edge axes must make a difference on such a sample.
    assert!(false_positives > 0);
}

#[test]
fn lite_cuboid_triangle_never_misses_an_overlap() {
    let mut rng = oorandom::Rand32::new(22);

    for _ in 0..5000 {
        let cuboid = rand_cuboid(&mut rng);
        let triangle = rand_triangle(&mut rng, 1.5);
        let pos12 = rand_placement(&mut rng, 1.0);

        for tolerance in [0.0, 0.1] {
            let test = |mode| {
                intersection_test_cuboid_triangle(&pos12, &cuboid, &triangle, tolerance, mode)
            };
            let full = test(SatMode::Full);
            let lite = test(SatMode::Lite);
            assert!(!full || lite, "{:?} {:?} {:?}", cuboid, triangle, pos12);
        }
    }
}

#[test]
fn aabb_bounding_never_misses_an_overlap() {
    let mut rng = oorandom::Rand32::new(23);

    for _ in 0..5000 {
        let cuboid1 = rand_cuboid(&mut rng);
        let cuboid2 = rand_cuboid(&mut rng);
        let xform1 = rand_placement(&mut rng, 2.0).to_homogeneous();
        let xform2 = rand_placement(&mut rng, 2.0).to_homogeneous();
        let relative2 = rand_placement(&mut rng, 0.5);

        for tolerance in [0.0, 0.1] {
            let test = |bounding| {
                intersection_test_cuboid_cuboid_world(
                    &xform1,
                    &cuboid1,
                    &xform2,
                    &relative2,
                    &cuboid2,
                    tolerance,
                    SatMode::Full,
                    bounding,
                )
            };
            assert!(!test(BoundingMode::Obb) || test(BoundingMode::Aabb));
        }
    }
}
