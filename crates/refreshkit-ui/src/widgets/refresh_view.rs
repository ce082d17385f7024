//! Pull-to-refresh container widget.

use std::cell::RefCell;
use std::rc::Rc;

use refreshkit_foundation::{DragTracker, PanEvent};
use refreshkit_ui_graphics::{BorderStroke, Color, EdgeInsets, RoundedCornerShape, Size};

use crate::nodes::{ActivityIndicator, Border, Grid, HostedView, IndicatorStack, Label};
use crate::position::IndicatorPosition;
use crate::visibility;

/// Caller-supplied action invoked when a drag past the refresh threshold
/// completes. Shared so the host can keep its own handle to the closure.
pub type RefreshCommand = Rc<RefCell<dyn FnMut()>>;

const DEFAULT_INDICATOR_MARGIN: EdgeInsets = EdgeInsets::uniform(10.0);
const DEFAULT_INDICATOR_MIN_SIZE: Size = Size::new(200.0, 150.0);

/// Pull-to-refresh container composing spinner, label, indicator stack,
/// content grid, and decorative border.
///
/// The host dispatches pan events into [`on_pan`](Self::on_pan) and drives
/// [`set_is_refreshing`](Self::set_is_refreshing) around its own refresh
/// operation. Every visual attribute is an independent setter applying one
/// immediate side effect to the owned display tree; all setters are total
/// and out-of-range values pass through to the painter unvalidated.
pub struct RefreshView {
    tracker: DragTracker,
    is_refreshing: bool,
    position: IndicatorPosition,
    refresh_command: Option<RefreshCommand>,
    border_color: Color,
    border_thickness: f32,
    border_corner_radius: f32,

    spinner: ActivityIndicator,
    label: Label,
    stack: IndicatorStack,
    grid: Grid,
    border: Border,
}

impl RefreshView {
    pub fn new() -> Self {
        let spinner = ActivityIndicator::new(Color::GRAY, DEFAULT_INDICATOR_MARGIN);
        let label = Label::new(Color::GRAY, DEFAULT_INDICATOR_MARGIN);
        let stack = IndicatorStack::new(DEFAULT_INDICATOR_MARGIN, DEFAULT_INDICATOR_MIN_SIZE);
        let grid = Grid::new(Color::TRANSPARENT);
        let border = Border::new(BorderStroke::NONE, Color::TRANSPARENT);

        Self {
            tracker: DragTracker::new(),
            is_refreshing: false,
            position: IndicatorPosition::default(),
            refresh_command: None,
            border_color: Color::TRANSPARENT,
            border_thickness: 0.0,
            border_corner_radius: 0.0,
            spinner,
            label,
            stack,
            grid,
            border,
        }
    }

    // --- gesture entry point ---

    /// Feeds one pan step from the host's gesture recognizer.
    ///
    /// When a gesture ends past the accumulated-distance threshold the
    /// refresh command runs synchronously, exactly once. An unset command
    /// is a silent no-op.
    pub fn on_pan(&mut self, event: PanEvent) {
        if self.tracker.on_pan(event) {
            match &self.refresh_command {
                Some(command) => (command.borrow_mut())(),
                None => log::trace!("refresh threshold passed with no command attached"),
            }
        }
    }

    // --- refresh state ---

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    /// Toggles the refresh flag and recomputes element visibility.
    /// Re-applying the current value is a visible no-op.
    pub fn set_is_refreshing(&mut self, is_refreshing: bool) {
        self.is_refreshing = is_refreshing;
        log::trace!("is_refreshing set to {is_refreshing}");
        self.apply_visibility();
    }

    // --- indicator configuration ---

    pub fn indicator_position(&self) -> IndicatorPosition {
        self.position
    }

    pub fn set_indicator_position(&mut self, position: IndicatorPosition) {
        self.position = position;
        self.stack
            .set_vertical_alignment(position.vertical_alignment());
    }

    pub fn indicator_text(&self) -> &str {
        &self.label.text
    }

    /// Updates the label text and recomputes only the label's visibility:
    /// shown iff refreshing and non-empty. Spinner state is untouched.
    pub fn set_indicator_text(&mut self, text: impl Into<String>) {
        self.label.text = text.into();
        self.label.is_visible = self.is_refreshing && self.label.has_text();
    }

    pub fn refresh_color(&self) -> Color {
        self.spinner.color
    }

    pub fn set_refresh_color(&mut self, color: Color) {
        self.spinner.color = color;
    }

    pub fn refresh_command(&self) -> Option<&RefreshCommand> {
        self.refresh_command.as_ref()
    }

    pub fn set_refresh_command(&mut self, command: Option<RefreshCommand>) {
        self.refresh_command = command;
    }

    /// Convenience wrapper installing a closure as the refresh command.
    pub fn on_refresh<F>(&mut self, action: F)
    where
        F: FnMut() + 'static,
    {
        self.refresh_command = Some(Rc::new(RefCell::new(action)));
    }

    pub fn refresh_content(&self) -> Option<&HostedView> {
        self.grid.hosted_view()
    }

    /// Swaps the hosted content view; the previous one (if any) leaves the
    /// slot so exactly one hosted view is ever present.
    pub fn set_refresh_content(&mut self, content: Option<HostedView>) {
        self.grid.set_hosted_view(content);
    }

    pub fn indicator_background(&self) -> Color {
        self.stack.background
    }

    pub fn set_indicator_background(&mut self, color: Color) {
        self.stack.background = color;
    }

    pub fn indicator_text_color(&self) -> Color {
        self.label.color
    }

    pub fn set_indicator_text_color(&mut self, color: Color) {
        self.label.color = color;
    }

    pub fn indicator_margin(&self) -> EdgeInsets {
        self.stack.padding
    }

    pub fn set_indicator_margin(&mut self, margin: EdgeInsets) {
        self.stack.padding = margin;
    }

    pub fn indicator_minimum_width_request(&self) -> f32 {
        self.stack.min_size.width
    }

    pub fn set_indicator_minimum_width_request(&mut self, width: f32) {
        self.stack.min_size.width = width;
    }

    pub fn indicator_minimum_height_request(&self) -> f32 {
        self.stack.min_size.height
    }

    pub fn set_indicator_minimum_height_request(&mut self, height: f32) {
        self.stack.min_size.height = height;
    }

    // --- border configuration ---

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.apply_border_stroke();
    }

    pub fn border_thickness(&self) -> f32 {
        self.border_thickness
    }

    pub fn set_border_thickness(&mut self, thickness: f32) {
        self.border_thickness = thickness;
        self.apply_border_stroke();
    }

    pub fn border_corner_radius(&self) -> f32 {
        self.border_corner_radius
    }

    pub fn set_border_corner_radius(&mut self, radius: f32) {
        self.border_corner_radius = radius;
        self.apply_border_stroke();
    }

    // --- display tree views (read-only, for painters and tests) ---

    pub fn spinner(&self) -> &ActivityIndicator {
        &self.spinner
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn indicator_stack(&self) -> &IndicatorStack {
        &self.stack
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    // --- internal change handlers ---

    fn apply_visibility(&mut self) {
        visibility::apply(
            self.is_refreshing,
            &mut self.spinner,
            &mut self.label,
            &mut self.stack,
        );
    }

    /// Rebuilds the border stroke atomically whenever color, thickness, or
    /// corner radius changes.
    fn apply_border_stroke(&mut self) {
        self.border.stroke = BorderStroke::new(
            self.border_color,
            self.border_thickness,
            RoundedCornerShape::uniform(self.border_corner_radius),
        );
    }
}

impl Default for RefreshView {
    fn default() -> Self {
        Self::new()
    }
}
