use std::collections::BTreeMap;

use serde::Serialize;

use super::Content;
use crate::theme::Themed;
use crate::types::{ClassNames, StyleMap};

/// Markup tag of a render-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    Span,
    Section,
    Label,
    Input,
    Ul,
    Li,
    Svg,
    Circle,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Section => "section",
            Self::Label => "label",
            Self::Input => "input",
            Self::Ul => "ul",
            Self::Li => "li",
            Self::Svg => "svg",
            Self::Circle => "circle",
        }
    }

    /// Tags that never carry children and close themselves in markup.
    pub fn is_void(self) -> bool {
        matches!(self, Self::Input | Self::Circle)
    }
}

/// A node of the render tree handed to the host's rendering pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: Tag,

    /// Resolved class names, space separated.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class_name: String,

    /// Theme lookup key (`<index>-<semantic keys>`), stable per position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Markup attributes (`aria-*`, `data-ref`, svg geometry, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,

    /// Inline style. `None` means no style was computed, which is not the
    /// same as an empty one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,

    #[serde(skip_serializing_if = "Content::is_none")]
    pub content: Content,

    // Custom data storage (handler ids, etc.)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            class_name: String::new(),
            key: None,
            attrs: BTreeMap::new(),
            style: None,
            content: Content::None,
            data: BTreeMap::new(),
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn section() -> Self {
        Self::new(Tag::Section)
    }

    pub fn label() -> Self {
        Self::new(Tag::Label)
    }

    pub fn input() -> Self {
        Self::new(Tag::Input)
    }

    pub fn ul() -> Self {
        Self::new(Tag::Ul)
    }

    pub fn li() -> Self {
        Self::new(Tag::Li)
    }

    pub fn svg() -> Self {
        Self::new(Tag::Svg)
    }

    pub fn circle() -> Self {
        Self::new(Tag::Circle)
    }

    /// A span holding plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::span()
        }
    }

    // Classes
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Append classes to the existing ones, skipping empties and repeats.
    pub fn add_class(mut self, class_name: impl AsRef<str>) -> Self {
        self.class_name = ClassNames::new()
            .add(&self.class_name)
            .add(class_name)
            .build();
        self
    }

    /// Apply a theme lookup: its class names and its key.
    pub fn themed(mut self, themed: Themed) -> Self {
        self.class_name = themed.class_name;
        self.key = Some(themed.key);
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.insert(name.into(), value.to_string());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    // Visual
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Set or clear the inline style.
    pub fn style_opt(mut self, style: Option<StyleMap>) -> Self {
        self.style = style;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children

    /// Append a child. Text already held by this node is kept as a leading
    /// text child.
    pub fn child(self, child: Element) -> Self {
        self.children([child])
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        let mut children = match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            Content::Text(text) => vec![Element::text(text)],
            Content::None => Vec::new(),
        };
        children.extend(new_children);
        self.content = Content::Children(children);
        self
    }

    /// Child elements, empty for text or empty nodes.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Whether `class` is one of this element's classes.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|name| name == class)
    }
}
