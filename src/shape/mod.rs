//! Shapes supported by the overlap tests.

pub use self::cuboid::Cuboid;
pub use self::quad::{Quad, QuadDissection};
pub use self::triangle::Triangle;

mod cuboid;
mod quad;
mod triangle;
