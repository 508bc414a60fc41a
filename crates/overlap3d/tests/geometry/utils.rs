use core::f64::consts::{FRAC_PI_2, PI};
use oorandom::Rand32;
use overlap3d::math::{Point, Real, Vector};
use overlap3d::na::Rotation3;
use overlap3d::shape::{Cuboid, Triangle};
use overlap3d::utils::Placement;

pub fn rand_real(rng: &mut Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

pub fn rand_point(rng: &mut Rand32, extent: Real) -> Point {
    Point::new(
        rand_real(rng, -extent, extent),
        rand_real(rng, -extent, extent),
        rand_real(rng, -extent, extent),
    )
}

pub fn rand_placement(rng: &mut Rand32, extent: Real) -> Placement {
    let rotation = Rotation3::from_euler_angles(
        rand_real(rng, -PI, PI),
        rand_real(rng, -FRAC_PI_2, FRAC_PI_2),
        rand_real(rng, -PI, PI),
    );
    Placement::new(rotation.into_inner(), rand_point(rng, extent).coords)
}

pub fn rand_triangle(rng: &mut Rand32, extent: Real) -> Triangle {
    Triangle::new(
        rand_point(rng, extent),
        rand_point(rng, extent),
        rand_point(rng, extent),
    )
}

pub fn rand_cuboid(rng: &mut Rand32) -> Cuboid {
    Cuboid::new(Vector::new(
        rand_real(rng, 0.1, 1.0),
        rand_real(rng, 0.1, 1.0),
        rand_real(rng, 0.1, 1.0),
    ))
}
