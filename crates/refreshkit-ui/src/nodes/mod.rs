//! The widget's owned display-node tree.
//!
//! Each node is a plain struct of paint/layout attributes the configuration
//! layer writes into directly. Rendering is the host's concern; the nodes
//! only carry the state a painter would read.

mod activity_indicator;
mod border;
mod grid;
mod hosted;
mod label;
mod stack;

pub use activity_indicator::ActivityIndicator;
pub use border::Border;
pub use grid::{Grid, GridSlot};
pub use hosted::HostedView;
pub use label::Label;
pub use stack::IndicatorStack;
