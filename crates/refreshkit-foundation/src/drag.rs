//! Drag tracking: accumulates vertical pan displacement per gesture.

use crate::gesture_constants::REFRESH_DISTANCE_THRESHOLD;
use crate::pan::PanEvent;

/// Tracks one pan interaction at a time.
///
/// Nothing commits until the gesture ends: an interrupted gesture leaves
/// no lasting effect, and every `Started` resets the running total, so
/// back-to-back gestures are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    total_y: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed vertical total accumulated by the in-flight gesture.
    pub fn total_y(&self) -> f32 {
        self.total_y
    }

    /// Feeds one pan step into the tracker.
    ///
    /// Returns `true` exactly when the step is `Ended` and the accumulated
    /// vertical distance exceeds [`REFRESH_DISTANCE_THRESHOLD`].
    pub fn on_pan(&mut self, event: PanEvent) -> bool {
        match event {
            PanEvent::Started => {
                self.total_y = 0.0;
                false
            }
            PanEvent::Updated { delta } => {
                self.total_y += delta.y;
                false
            }
            PanEvent::Ended => {
                let exceeded = self.total_y > REFRESH_DISTANCE_THRESHOLD;
                if exceeded {
                    log::debug!(
                        "pan ended at {:.1}px, past the refresh threshold",
                        self.total_y
                    );
                }
                exceeded
            }
            PanEvent::Canceled => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(tracker: &mut DragTracker, deltas: &[f32]) -> bool {
        tracker.on_pan(PanEvent::Started);
        for &dy in deltas {
            tracker.on_pan(PanEvent::moved_by(dy));
        }
        tracker.on_pan(PanEvent::Ended)
    }

    #[test]
    fn total_at_threshold_does_not_trigger() {
        let mut tracker = DragTracker::new();
        assert!(!drive(&mut tracker, &[50.0]));
    }

    #[test]
    fn single_step_past_threshold_triggers() {
        let mut tracker = DragTracker::new();
        assert!(drive(&mut tracker, &[60.0]));
    }

    #[test]
    fn partitioning_does_not_matter() {
        let mut tracker = DragTracker::new();
        assert!(drive(&mut tracker, &[10.0; 6]));
    }

    #[test]
    fn reversed_drag_subtracts() {
        let mut tracker = DragTracker::new();
        assert!(!drive(&mut tracker, &[10.0, -5.0]));
        assert_eq!(tracker.total_y(), 5.0);
    }

    #[test]
    fn new_gesture_resets_previous_total() {
        let mut tracker = DragTracker::new();
        assert!(drive(&mut tracker, &[80.0]));
        assert!(!drive(&mut tracker, &[20.0]));
    }

    #[test]
    fn canceled_gesture_commits_nothing() {
        let mut tracker = DragTracker::new();
        tracker.on_pan(PanEvent::Started);
        tracker.on_pan(PanEvent::moved_by(120.0));
        assert!(!tracker.on_pan(PanEvent::Canceled));
    }

    #[test]
    fn updates_without_start_still_accumulate() {
        // The host is expected to send Started first, but the tracker
        // stays well-defined if it does not.
        let mut tracker = DragTracker::new();
        tracker.on_pan(PanEvent::moved_by(60.0));
        assert!(tracker.on_pan(PanEvent::Ended));
    }
}
