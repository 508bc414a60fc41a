//! Application of the Separating Axis Theorem (SAT) for overlap testing.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For polyhedra, only a finite set of candidate axes
//! needs to be checked:
//!
//! - the face normals of each shape,
//! - the cross products of an edge of the first shape with an edge of the second shape.
//!
//! # Separation and tolerance
//!
//! The functions of this module return a *separation*: the signed gap between the two
//! projections, measured along the normalized axis. It is positive if the shapes are
//! separated along that axis, zero if they touch, and negative if the projections overlap.
//!
//! An axis is only considered separating if its separation is strictly greater than the
//! tolerance given by the caller. The `find_*` functions stop as soon as such an axis is
//! found: the returned separation is then the one of the first separating axis, not
//! necessarily the greatest one. If no axis is separating, the greatest separation is
//! returned.
//!
//! # Module Organization
//!
//! - **Cuboid-Cuboid**: face normals of each box, and the 9 edge-edge axes.
//! - **Cuboid-Triangle**: face normals of the box, and the 9 edge-edge axes.
//! - **Plane-Cuboid**: a single axis, the plane normal (used for the triangle normal).

pub use self::sat_cuboid_cuboid::*;
pub use self::sat_cuboid_triangle::*;
pub use self::sat_plane_cuboid::*;

mod sat_cuboid_cuboid;
mod sat_cuboid_triangle;
mod sat_plane_cuboid;
