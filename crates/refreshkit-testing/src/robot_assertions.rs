//! Assertion utilities for robot testing
//!
//! Helpers for validating the widget's display tree against the two states
//! it presents: idle (everything hidden) and refreshing (spinner animating,
//! label following its text).

use refreshkit_ui_graphics::{Point, Size};

use crate::robot::RefreshRobot;

/// Assert that a value is within an expected range.
///
/// Useful for fuzzy matching of offsets and sizes.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the idle presentation: spinner hidden and stopped, stack hidden,
/// label hidden.
pub fn assert_idle_visuals(robot: &RefreshRobot, msg: &str) {
    let view = robot.view();
    assert!(!view.spinner().is_visible, "{}: spinner visible", msg);
    assert!(!view.spinner().is_running, "{}: spinner running", msg);
    assert!(
        !view.indicator_stack().is_visible,
        "{}: indicator stack visible",
        msg
    );
    assert!(!view.label().is_visible, "{}: label visible", msg);
}

/// Assert where the indicator stack would be placed inside a container of
/// the given size, for measured content of the given size.
pub fn assert_indicator_origin(
    robot: &RefreshRobot,
    container: Size,
    content: Size,
    expected: Point,
    msg: &str,
) {
    let origin = robot.view().indicator_stack().aligned_origin(container, content);
    assert_approx_eq(origin.x, expected.x, 0.5, &format!("{} - x", msg));
    assert_approx_eq(origin.y, expected.y, 0.5, &format!("{} - y", msg));
}

/// Assert the refreshing presentation: spinner visible and animating, stack
/// visible, label visibility matching `expect_label`.
pub fn assert_refreshing_visuals(robot: &RefreshRobot, expect_label: bool, msg: &str) {
    let view = robot.view();
    assert!(view.spinner().is_visible, "{}: spinner hidden", msg);
    assert!(view.spinner().is_running, "{}: spinner stopped", msg);
    assert!(
        view.indicator_stack().is_visible,
        "{}: indicator stack hidden",
        msg
    );
    assert_eq!(
        view.label().is_visible,
        expect_label,
        "{}: unexpected label visibility",
        msg
    );
}
