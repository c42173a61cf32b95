//! Pure math/data shared by the FAB reveal crates
//!
//! Geometry primitives, colors and density-independent units. Nothing in
//! here knows about animation or about the host toolkit.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::Dp;
}
