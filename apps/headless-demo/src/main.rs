use std::cell::Cell;
use std::rc::Rc;

use refreshkit_foundation::PanEvent;
use refreshkit_ui::prelude::*;
use refreshkit_ui_graphics::{Color, EdgeInsets};

/// Stand-in for a host application's feed view.
struct FeedView {
    title: &'static str,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Refreshkit Headless Demo ===");
    println!("Simulates a pull-to-refresh cycle without a window:");
    println!("  - a short drag that stays under the threshold");
    println!("  - a full pull that commits a refresh");
    println!();

    let mut view = RefreshView::new();
    view.set_indicator_text("Refreshing feed...");
    view.set_refresh_color(Color::from_rgb_u8(0, 120, 215));
    view.set_indicator_background(Color::BLACK.with_alpha(0.5));
    view.set_indicator_text_color(Color::WHITE);
    view.set_indicator_margin(EdgeInsets::uniform(12.0));
    view.set_border_color(Color::GRAY);
    view.set_border_thickness(1.0);
    view.set_border_corner_radius(8.0);
    view.set_indicator_position(IndicatorPosition::Top);
    view.set_refresh_content(Some(HostedView::new(FeedView { title: "Inbox" })));

    let refresh_requested = Rc::new(Cell::new(false));
    let flag = Rc::clone(&refresh_requested);
    view.on_refresh(move || flag.set(true));

    // Hesitant pull: released before the threshold, nothing happens.
    dispatch_pan(&mut view, &[10.0, 15.0]);
    report(&view, refresh_requested.get(), "after a 25px pull");

    // Committed pull: 30 + 35 = 65px, past the 50px threshold.
    dispatch_pan(&mut view, &[30.0, 35.0]);
    report(&view, refresh_requested.get(), "after a 65px pull");

    if refresh_requested.get() {
        // The host reacts to its command firing by flipping the flag,
        // running its refresh operation, then flipping it back.
        view.set_is_refreshing(true);
        report(&view, true, "while the host refreshes");

        view.set_is_refreshing(false);
        report(&view, true, "once the refresh completes");
    }

    if let Some(content) = view.refresh_content() {
        if let Some(feed) = content.downcast_ref::<FeedView>() {
            log::info!("hosted content still in place: {}", feed.title);
        }
    }
}

fn dispatch_pan(view: &mut RefreshView, steps: &[f32]) {
    view.on_pan(PanEvent::Started);
    for &dy in steps {
        view.on_pan(PanEvent::moved_by(dy));
    }
    view.on_pan(PanEvent::Ended);
}

fn report(view: &RefreshView, requested: bool, when: &str) {
    println!(
        "{:<28} refresh requested: {:<5} spinner: {} label: {:?} ({})",
        when,
        requested,
        if view.spinner().is_running {
            "animating"
        } else {
            "stopped"
        },
        view.indicator_text(),
        if view.indicator_stack().is_visible {
            "indicator shown"
        } else {
            "indicator hidden"
        },
    );
}
