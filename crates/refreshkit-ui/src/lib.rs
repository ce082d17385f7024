//! Configurable pull-to-refresh container widget for Refreshkit
//!
//! [`RefreshView`](widgets::RefreshView) composes an activity indicator, a
//! label, a vertical indicator stack, a content grid, and a decorative
//! border into one widget. The host toolkit dispatches pan events into it
//! and drives the refresh flag; every visual attribute is an independent
//! setter with an immediate side effect on the owned display tree.

pub mod nodes;
mod position;
mod visibility;
pub mod widgets;

pub use position::IndicatorPosition;
pub use widgets::{RefreshCommand, RefreshView};

pub mod prelude {
    pub use crate::nodes::HostedView;
    pub use crate::position::IndicatorPosition;
    pub use crate::widgets::{RefreshCommand, RefreshView};
}
