//! Catmull-Rom path evaluation over externally owned control points.

pub mod catmull;
pub mod curve;
pub mod sample;
pub mod source;
pub mod vertex;

pub use curve::{CatmullRomSpline, Curve};
pub use source::PointSource;
pub use vertex::SplineVertex;
