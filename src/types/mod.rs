//! Geometry value types shared by the layout engine.

mod geometry;
mod index;

pub use geometry::*;
pub use index::*;
