//! Catmull-Rom core algorithms: segment resolution and the blending
//! polynomial with its derivative.

pub mod blend;
pub mod segment;

pub use blend::{position, velocity};
pub use segment::locate;
