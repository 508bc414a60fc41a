//! Implementation details of the intersection tests.

pub use self::intersection_test_coplanar::{
    intersection_test_coplanar_quads, intersection_test_coplanar_triangles,
    intersection_test_coplanar_triangles_wrt_normal,
};
pub use self::intersection_test_cuboid_cuboid::{
    intersection_test_cuboid_cuboid, intersection_test_cuboid_cuboid_world,
};
pub use self::intersection_test_cuboid_triangle::{
    intersection_test_aabb_triangle, intersection_test_cuboid_triangle,
    intersection_test_triangle_cuboid,
};
pub use self::intersection_test_plane_cuboid::intersection_test_plane_cuboid;
pub use self::intersection_test_triangle_triangle::{
    intersection_test_triangle_triangle, triangle_triangle_intersection,
    TriangleTriangleIntersection,
};

mod intersection_test_coplanar;
mod intersection_test_cuboid_cuboid;
mod intersection_test_cuboid_triangle;
mod intersection_test_plane_cuboid;
mod intersection_test_triangle_triangle;
