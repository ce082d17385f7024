use refreshkit_ui_graphics::{BorderStroke, Color};

/// Decorative outer border wrapping the content grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub stroke: BorderStroke,
    pub background: Color,
}

impl Border {
    pub fn new(stroke: BorderStroke, background: Color) -> Self {
        Self { stroke, background }
    }
}
