//! Overlay layer that dialogs render inside.

use atlas_derive::ThemeKey;

use crate::element::Element;
use crate::theme::Theme;

/// Data key under which click handler ids are stored.
pub const ON_CLICK: &str = "on_click";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ThemeKey)]
#[theme(namespace = "ra_overlay")]
pub enum OverlayKey {
    Overlay,
    Active,
    Backdrop,
}

/// Something that can wrap content in a modal layer.
///
/// `on_click` is the host's handler id for clicks on the backdrop.
pub trait Overlay {
    fn render(&self, active: bool, on_click: Option<&str>, children: Element) -> Element;
}

/// Default overlay: a container with a clickable backdrop behind the
/// content.
#[derive(Debug, Clone, Default)]
pub struct Backdrop {
    pub theme: Theme<OverlayKey>,
}

impl Backdrop {
    pub fn new(theme: Theme<OverlayKey>) -> Self {
        Self { theme }
    }
}

impl Overlay for Backdrop {
    fn render(&self, active: bool, on_click: Option<&str>, children: Element) -> Element {
        let keys: &[OverlayKey] = if active {
            &[OverlayKey::Overlay, OverlayKey::Active]
        } else {
            &[OverlayKey::Overlay]
        };

        let mut backdrop =
            Element::div().themed(self.theme.themed(2, &[OverlayKey::Backdrop]));
        if let Some(handler) = on_click {
            backdrop = backdrop.data(ON_CLICK, handler);
        }

        Element::div()
            .themed(self.theme.themed(1, keys))
            .attr("aria-hidden", !active)
            .child(backdrop)
            .child(children)
    }
}
