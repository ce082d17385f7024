//! Widget implementations

mod refresh_view;

pub use refresh_view::{RefreshCommand, RefreshView};
