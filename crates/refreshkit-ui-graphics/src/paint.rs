//! Stroke descriptions for painting element outlines

use crate::color::Color;
use crate::geometry::RoundedCornerShape;

/// Complete outline description for a bordered element.
///
/// Color, width, and shape always travel together: any change to one of
/// them rebuilds the whole stroke so the painter never observes a
/// half-updated outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderStroke {
    pub color: Color,
    pub width: f32,
    pub shape: RoundedCornerShape,
}

impl BorderStroke {
    pub const fn new(color: Color, width: f32, shape: RoundedCornerShape) -> Self {
        Self {
            color,
            width,
            shape,
        }
    }

    /// Invisible zero-width stroke with square corners.
    pub const NONE: BorderStroke = BorderStroke {
        color: Color::TRANSPARENT,
        width: 0.0,
        shape: RoundedCornerShape::uniform(0.0),
    };
}

impl Default for BorderStroke {
    fn default() -> Self {
        Self::NONE
    }
}
