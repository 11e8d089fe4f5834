//! On/off switch: a checkbox restyled as a slider with a handle.

use atlas_derive::ThemeKey;

use crate::element::Element;
use crate::theme::Theme;
use crate::types::StyleMap;
use crate::widget::Widget;

/// Data key under which change handler ids are stored.
pub const ON_CHANGE: &str = "on_change";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ThemeKey)]
#[theme(namespace = "ra_switch")]
pub enum SwitchKey {
    SliderSmall,
    SliderMedium,
    SliderLarge,
    InputSmall,
    InputMedium,
    InputLarge,
    HandleSmall,
    HandleMedium,
    HandleLarge,
    OnColorSmall,
    OnColorMedium,
    OnColorLarge,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SwitchSize {
    fn slider(self) -> SwitchKey {
        match self {
            Self::Small => SwitchKey::SliderSmall,
            Self::Medium => SwitchKey::SliderMedium,
            Self::Large => SwitchKey::SliderLarge,
        }
    }

    fn input(self) -> SwitchKey {
        match self {
            Self::Small => SwitchKey::InputSmall,
            Self::Medium => SwitchKey::InputMedium,
            Self::Large => SwitchKey::InputLarge,
        }
    }

    fn handle(self) -> SwitchKey {
        match self {
            Self::Small => SwitchKey::HandleSmall,
            Self::Medium => SwitchKey::HandleMedium,
            Self::Large => SwitchKey::HandleLarge,
        }
    }

    fn on_color(self) -> SwitchKey {
        match self {
            Self::Small => SwitchKey::OnColorSmall,
            Self::Medium => SwitchKey::OnColorMedium,
            Self::Large => SwitchKey::OnColorLarge,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Switch {
    pub checked: bool,
    pub disabled: bool,
    pub size: SwitchSize,
    pub name: Option<String>,
    /// Track background when on.
    pub on_color: Option<String>,
    /// Track background when off.
    pub off_color: Option<String>,
    pub button_color: Option<String>,
    pub class_name: String,
    /// Handler id for toggles.
    pub on_change: Option<String>,
    pub theme: Theme<SwitchKey>,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn size(mut self, size: SwitchSize) -> Self {
        self.size = size;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_color(mut self, color: impl Into<String>) -> Self {
        self.on_color = Some(color.into());
        self
    }

    pub fn off_color(mut self, color: impl Into<String>) -> Self {
        self.off_color = Some(color.into());
        self
    }

    pub fn button_color(mut self, color: impl Into<String>) -> Self {
        self.button_color = Some(color.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    pub fn theme(mut self, theme: Theme<SwitchKey>) -> Self {
        self.theme = theme;
        self
    }

    /// Size key plus `disabled` when the part greys out.
    fn keys(&self, size_key: SwitchKey, dims: bool) -> Vec<SwitchKey> {
        let mut keys = vec![size_key];
        if dims && self.disabled {
            keys.push(SwitchKey::Disabled);
        }
        keys
    }
}

fn background(color: Option<&str>) -> Option<StyleMap> {
    color.map(|color| [("background", color)].into_iter().collect())
}

impl Widget for Switch {
    fn render(&self) -> Element {
        let size = self.size;

        let mut input = Element::input()
            .themed(self.theme.themed(2, &self.keys(size.input(), true)))
            .style_opt(background(self.on_color.as_deref()))
            .attr("type", "checkbox");
        if self.checked {
            input = input.attr("checked", "checked");
        }
        if self.disabled {
            input = input.attr("disabled", "disabled");
        }
        if let Some(name) = &self.name {
            input = input.attr("name", name);
        }
        if let Some(handler) = &self.on_change {
            input = input.data(ON_CHANGE, handler.as_str());
        }

        let handle = Element::div()
            .themed(self.theme.themed(3, &self.keys(size.handle(), true)))
            .style_opt(background(self.button_color.as_deref()));

        let on_color = Element::div()
            .themed(self.theme.themed(4, &self.keys(size.on_color(), false)))
            .style_opt(background(self.on_color.as_deref()));

        Element::label()
            .themed(self.theme.themed(1, &self.keys(size.slider(), true)))
            .add_class(&self.class_name)
            .style_opt(background(self.off_color.as_deref()))
            .child(input)
            .child(handle)
            .child(on_color)
    }
}
