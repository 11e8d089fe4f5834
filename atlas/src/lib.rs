//! Presentational UI widgets that render to a host-agnostic element tree.
//!
//! The centerpiece is [`ProgressBar`], which maps a value (or a `from..to`
//! span) onto a linear bar, a circular arc, or a range span. The dialog,
//! switch and dropdown list are thin markup wrappers around the same
//! [`Element`] and [`Theme`] machinery.

extern crate self as atlas;

pub mod dialog;
pub mod dropdown;
pub mod element;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod progress;
pub mod style;
pub mod switch;
pub mod theme;
pub mod types;
pub mod widget;

pub use atlas_derive::ThemeKey;
pub use dialog::{Dialog, DialogKey, DialogKind};
pub use dropdown::{DropdownKey, DropdownList};
pub use element::{Content, Element, Tag, find_by_ref, find_element};
pub use error::{Error, Result};
pub use overlay::{Backdrop, Overlay, OverlayKey};
pub use progress::{Kind, Mode, ProgressBar, ProgressKey, ProgressValue, Strategy, StrategyStyle};
pub use style::{prefix, ratio};
pub use switch::{Switch, SwitchKey, SwitchSize};
pub use theme::{Theme, ThemeKey, Themed, UnknownKeyPolicy};
pub use types::{ClassNames, StyleMap, compose};
pub use widget::Widget;
