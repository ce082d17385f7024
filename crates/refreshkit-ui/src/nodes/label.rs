use refreshkit_ui_graphics::{Color, EdgeInsets};

/// Text element shown under the spinner while refreshing.
///
/// The text is never cleared when refreshing ends; only visibility drops.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub is_visible: bool,
    pub text: String,
    pub color: Color,
    pub padding: EdgeInsets,
}

impl Label {
    pub fn new(color: Color, padding: EdgeInsets) -> Self {
        Self {
            is_visible: false,
            text: String::new(),
            color,
            padding,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}
