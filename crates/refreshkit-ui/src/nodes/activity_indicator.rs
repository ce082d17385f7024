use refreshkit_ui_graphics::{Color, EdgeInsets};

/// Spinner element shown while a refresh is in progress.
///
/// Starts hidden and stopped; visibility and animation follow the
/// widget's refresh flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityIndicator {
    pub is_visible: bool,
    pub is_running: bool,
    pub color: Color,
    pub margin: EdgeInsets,
}

impl ActivityIndicator {
    pub fn new(color: Color, margin: EdgeInsets) -> Self {
        Self {
            is_visible: false,
            is_running: false,
            color,
            margin,
        }
    }
}
