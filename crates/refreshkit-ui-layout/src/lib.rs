//! Layout contracts for Refreshkit

mod alignment;

pub use alignment::*;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
}
