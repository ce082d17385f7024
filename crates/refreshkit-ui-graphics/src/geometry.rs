//! Geometric primitives: Point, Size, EdgeInsets, corner shapes

/// A position or displacement in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Spacing values for each edge of a rectangle, used for margins and padding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub const fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// Rounded-rectangle outline description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedCornerShape {
    radii: CornerRadii,
}

impl RoundedCornerShape {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            radii: CornerRadii::uniform(radius),
        }
    }

    pub const fn with_radii(radii: CornerRadii) -> Self {
        Self { radii }
    }

    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    /// Clamps each corner radius to fit within the given rectangle size.
    pub fn resolve(&self, width: f32, height: f32) -> CornerRadii {
        let max_width = (width / 2.0).max(0.0);
        let max_height = (height / 2.0).max(0.0);
        let clamp = |radius: f32| radius.clamp(0.0, max_width).min(max_height);
        CornerRadii {
            top_left: clamp(self.radii.top_left),
            top_right: clamp(self.radii.top_right),
            bottom_right: clamp(self.radii.bottom_right),
            bottom_left: clamp(self.radii.bottom_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_insets_sums() {
        let insets = EdgeInsets::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal_sum(), 4.0);
        assert_eq!(insets.vertical_sum(), 6.0);
        assert!(!insets.is_zero());
        assert!(EdgeInsets::default().is_zero());
    }

    #[test]
    fn resolve_clamps_oversized_radii() {
        let shape = RoundedCornerShape::uniform(100.0);
        let resolved = shape.resolve(40.0, 20.0);
        assert_eq!(resolved.top_left, 10.0);
        assert_eq!(resolved.bottom_right, 10.0);
    }

    #[test]
    fn resolve_leaves_small_radii_untouched() {
        let shape = RoundedCornerShape::uniform(4.0);
        assert_eq!(shape.resolve(100.0, 100.0), CornerRadii::uniform(4.0));
    }
}
