//! Dropdown option list.

use atlas_derive::ThemeKey;

use crate::element::Element;
use crate::theme::Theme;
use crate::types::ClassNames;
use crate::widget::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ThemeKey)]
#[theme(namespace = "ra_dropdown")]
pub enum DropdownKey {
    List,
}

/// The list half of a dropdown. Positioning is left to the host.
#[derive(Debug, Clone, Default)]
pub struct DropdownList {
    pub class_name: String,
    pub children: Vec<Element>,
    pub theme: Theme<DropdownKey>,
}

impl DropdownList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append an `li` holding `text`.
    pub fn item(self, text: impl Into<String>) -> Self {
        let item = Element::li().child(Element::text(text));
        self.child(item)
    }

    pub fn theme(mut self, theme: Theme<DropdownKey>) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for DropdownList {
    fn render(&self) -> Element {
        let themed = self.theme.themed(1, &[DropdownKey::List]);
        // Caller class first, then the list class.
        let class_name = ClassNames::new()
            .add(&self.class_name)
            .add(&themed.class_name)
            .build();
        Element::ul()
            .key(themed.key)
            .class_name(class_name)
            .children(self.children.iter().cloned())
    }
}
