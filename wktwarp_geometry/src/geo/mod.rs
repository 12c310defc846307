mod compare;
mod geometry;
mod point;
mod variant;

pub use compare::*;
pub use geometry::*;
pub use point::*;
pub use variant::*;
