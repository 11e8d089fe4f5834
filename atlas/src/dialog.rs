//! Modal dialog rendered inside an [`Overlay`].

use atlas_derive::ThemeKey;

use crate::element::Element;
use crate::overlay::{Backdrop, Overlay};
use crate::theme::Theme;
use crate::widget::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ThemeKey)]
#[theme(namespace = "ra_dialog")]
pub enum DialogKey {
    Dialog,
    Active,
    Inactive,
    Small,
    Normal,
    Large,
    Fullscreen,
    Body,
}

/// Dialog size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    Small,
    #[default]
    Normal,
    Large,
    Fullscreen,
}

impl DialogKind {
    fn semantic_key(self) -> DialogKey {
        match self {
            Self::Small => DialogKey::Small,
            Self::Normal => DialogKey::Normal,
            Self::Large => DialogKey::Large,
            Self::Fullscreen => DialogKey::Fullscreen,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dialog {
    pub active: bool,
    pub kind: DialogKind,
    /// Extra class on the dialog box.
    pub class_name: String,
    /// Extra class on the body section.
    pub body_class: String,
    /// Handler id for clicks on the overlay backdrop.
    pub on_overlay_click: Option<String>,
    pub children: Vec<Element>,
    pub theme: Theme<DialogKey>,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn kind(mut self, kind: DialogKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn body_class(mut self, body_class: impl Into<String>) -> Self {
        self.body_class = body_class.into();
        self
    }

    pub fn on_overlay_click(mut self, handler: impl Into<String>) -> Self {
        self.on_overlay_click = Some(handler.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn theme(mut self, theme: Theme<DialogKey>) -> Self {
        self.theme = theme;
        self
    }

    /// Render inside a caller-supplied overlay.
    pub fn render_with(&self, overlay: &dyn Overlay) -> Element {
        let state = if self.active {
            DialogKey::Active
        } else {
            DialogKey::Inactive
        };
        let keys = [DialogKey::Dialog, state, self.kind.semantic_key()];

        let body = Element::section()
            .themed(self.theme.themed(2, &[DialogKey::Body]))
            .add_class(&self.body_class)
            .children(self.children.iter().cloned());

        let dialog = Element::div()
            .themed(self.theme.themed(1, &keys))
            .add_class(&self.class_name)
            .attr("role", "dialog")
            .child(body);

        overlay.render(self.active, self.on_overlay_click.as_deref(), dialog)
    }
}

impl Widget for Dialog {
    fn render(&self) -> Element {
        self.render_with(&Backdrop::default())
    }
}
