//! Pure math/data for colors, geometry & paint in Refreshkit
//!
//! This crate contains the geometry primitives, color definitions, and
//! stroke descriptions shared by the widget layers. No dependencies.

mod color;
mod geometry;
mod paint;

pub use color::*;
pub use geometry::*;
pub use paint::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, RoundedCornerShape, Size};
    pub use crate::paint::BorderStroke;
}
