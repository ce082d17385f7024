//! Robot testing harness for driving a RefreshView programmatically.
//!
//! The robot owns a [`RefreshView`] wired to a counting refresh command,
//! so tests can script pan gestures and refresh cycles and then assert on
//! how often the command fired and what the display tree looks like.
//!
//! # Example
//!
//! ```
//! use refreshkit_testing::robot::RefreshRobot;
//!
//! let mut robot = RefreshRobot::new();
//! robot.drag(&[30.0, 25.0]);
//! assert_eq!(robot.refresh_count(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;

use refreshkit_foundation::PanEvent;
use refreshkit_ui::RefreshView;

/// Programmatic driver around a [`RefreshView`] under test.
pub struct RefreshRobot {
    view: RefreshView,
    refresh_count: Rc<Cell<usize>>,
}

impl RefreshRobot {
    /// Creates a robot whose view's refresh command counts invocations.
    pub fn new() -> Self {
        let refresh_count = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&refresh_count);

        let mut view = RefreshView::new();
        view.on_refresh(move || counter.set(counter.get() + 1));

        Self {
            view,
            refresh_count,
        }
    }

    /// Creates a robot around a caller-configured view, leaving whatever
    /// refresh command the caller installed in place.
    pub fn with_view(view: RefreshView) -> Self {
        Self {
            view,
            refresh_count: Rc::new(Cell::new(0)),
        }
    }

    pub fn view(&self) -> &RefreshView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut RefreshView {
        &mut self.view
    }

    /// How many times the counting refresh command has fired.
    pub fn refresh_count(&self) -> usize {
        self.refresh_count.get()
    }

    // --- gesture scripting ---

    pub fn pan_start(&mut self) {
        self.view.on_pan(PanEvent::Started);
    }

    pub fn pan_by(&mut self, dy: f32) {
        self.view.on_pan(PanEvent::moved_by(dy));
    }

    pub fn pan_end(&mut self) {
        self.view.on_pan(PanEvent::Ended);
    }

    pub fn pan_cancel(&mut self) {
        self.view.on_pan(PanEvent::Canceled);
    }

    /// Scripts one complete gesture from the given vertical steps.
    pub fn drag(&mut self, steps: &[f32]) {
        self.pan_start();
        for &dy in steps {
            self.pan_by(dy);
        }
        self.pan_end();
    }

    // --- refresh-cycle scripting ---

    /// What a host does once its refresh operation starts.
    pub fn begin_refresh(&mut self) {
        self.view.set_is_refreshing(true);
    }

    /// What a host does once its refresh operation completes.
    pub fn end_refresh(&mut self) {
        self.view.set_is_refreshing(false);
    }
}

impl Default for RefreshRobot {
    fn default() -> Self {
        Self::new()
    }
}
