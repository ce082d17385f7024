use refreshkit_ui_graphics::{Color, EdgeInsets, Point, Size};
use refreshkit_ui_layout::{Alignment, HorizontalAlignment, VerticalAlignment};

/// Vertical grouping of spinner + label, positioned within the grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorStack {
    pub is_visible: bool,
    pub alignment: Alignment,
    pub padding: EdgeInsets,
    pub min_size: Size,
    pub background: Color,
}

impl IndicatorStack {
    pub fn new(padding: EdgeInsets, min_size: Size) -> Self {
        Self {
            is_visible: false,
            alignment: Alignment::CENTER,
            padding,
            min_size,
            background: Color::TRANSPARENT,
        }
    }

    /// Repositions the stack vertically; horizontal centering is fixed.
    pub fn set_vertical_alignment(&mut self, vertical: VerticalAlignment) {
        self.alignment = Alignment::new(HorizontalAlignment::CenterHorizontally, vertical);
    }

    /// Resolves the stack origin inside a container, honoring the minimum
    /// size requests when the measured content is smaller.
    pub fn aligned_origin(&self, container: Size, content: Size) -> Point {
        let occupied = Size::new(
            content.width.max(self.min_size.width),
            content.height.max(self.min_size.height),
        );
        self.alignment.offset_in(container, occupied)
    }
}
