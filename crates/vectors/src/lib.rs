//! A 2-dimensional vector value type for geometry and navigation.
//!
//! A [Vector2D] knows its components, the points it spans, its magnitude, and its direction both as a standard angle
//! and as a quadrant [Bearing].

mod bearing;
mod errors;
mod ops;
mod report;
mod vector2d;

pub use bearing::*;
pub use errors::*;
pub use report::*;
pub use vector2d::*;
