use refreshkit_ui_layout::VerticalAlignment;

/// Vertical placement of the indicator stack within the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorPosition {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl IndicatorPosition {
    /// The stack alignment this position maps to.
    pub fn vertical_alignment(self) -> VerticalAlignment {
        match self {
            IndicatorPosition::Top => VerticalAlignment::Top,
            IndicatorPosition::Middle => VerticalAlignment::CenterVertically,
            IndicatorPosition::Bottom => VerticalAlignment::Bottom,
        }
    }
}
