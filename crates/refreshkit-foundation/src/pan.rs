use refreshkit_ui_graphics::Point;

/// One step of a pan gesture as delivered by the host toolkit.
///
/// A gesture arrives as `Started`, zero or more `Updated` steps each
/// carrying the displacement since the previous step, and a terminal
/// `Ended` or `Canceled`. Delivery is strictly sequential on the UI
/// dispatch context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Started,
    Updated { delta: Point },
    Ended,
    Canceled,
}

impl PanEvent {
    /// Convenience constructor for a purely vertical update step.
    pub fn moved_by(dy: f32) -> Self {
        Self::Updated {
            delta: Point::new(0.0, dy),
        }
    }
}
