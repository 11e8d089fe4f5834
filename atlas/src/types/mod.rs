mod class_names;
mod style;

pub use class_names::{ClassNames, compose};
pub use style::StyleMap;
