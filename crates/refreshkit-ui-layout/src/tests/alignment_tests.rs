use super::super::{Alignment, HorizontalAlignment, VerticalAlignment};
use refreshkit_ui_graphics::{Point, Size};

#[test]
fn vertical_top_pins_to_leading_edge() {
    assert_eq!(VerticalAlignment::Top.align(100.0, 30.0), 0.0);
}

#[test]
fn vertical_center_splits_remaining_space() {
    assert_eq!(VerticalAlignment::CenterVertically.align(100.0, 30.0), 35.0);
}

#[test]
fn vertical_bottom_pins_to_trailing_edge() {
    assert_eq!(VerticalAlignment::Bottom.align(100.0, 30.0), 70.0);
}

#[test]
fn oversized_content_never_gets_negative_offset() {
    assert_eq!(VerticalAlignment::CenterVertically.align(20.0, 50.0), 0.0);
    assert_eq!(VerticalAlignment::Bottom.align(20.0, 50.0), 0.0);
    assert_eq!(HorizontalAlignment::End.align(20.0, 50.0), 0.0);
}

#[test]
fn offset_in_combines_both_axes() {
    let alignment = Alignment::new(HorizontalAlignment::CenterHorizontally, VerticalAlignment::Bottom);
    let origin = alignment.offset_in(Size::new(200.0, 150.0), Size::new(100.0, 50.0));
    assert_eq!(origin, Point::new(50.0, 100.0));
}
