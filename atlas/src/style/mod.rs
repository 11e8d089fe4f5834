//! Numeric normalization and style post-processing shared by widgets.

mod prefix;
mod ratio;

pub use prefix::prefix;
pub use ratio::{is_degenerate, ratio};
