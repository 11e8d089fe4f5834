//! Widget trait for render-tree components.
//!
//! Widgets are stateless records that:
//! - Hold the full configuration for one render
//! - Produce an [`Element`] tree from it on demand
//!
//! The host owns any state that changes over time and hands widgets a fresh
//! record on every pass.

use crate::element::Element;

/// A component that renders to an element tree.
///
/// # Example
///
/// ```
/// use atlas::{Element, Widget};
///
/// struct Badge(&'static str);
///
/// impl Widget for Badge {
///     fn render(&self) -> Element {
///         Element::text(self.0).class_name("badge")
///     }
/// }
///
/// assert_eq!(Badge("new").to_markup(), "<span class=\"badge\">new</span>");
/// ```
pub trait Widget {
    fn render(&self) -> Element;

    fn to_markup(&self) -> String {
        self.render().to_markup()
    }
}
