//! Pan-gesture input model and drag tracking for Refreshkit

mod drag;
mod gesture_constants;
mod pan;

pub use drag::*;
pub use gesture_constants::*;
pub use pan::*;

pub mod prelude {
    pub use crate::drag::DragTracker;
    pub use crate::gesture_constants::REFRESH_DISTANCE_THRESHOLD;
    pub use crate::pan::PanEvent;
}
