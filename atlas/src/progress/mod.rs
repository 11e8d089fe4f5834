//! Progress indicator: linear bar, circular arc, or range span, in
//! determinate or indeterminate mode.
//!
//! Rendering is a pure function of a [`ProgressBar`] record:
//!
//! ```text
//! ProgressBar ──dispatch──► Strategy ──compute──► StrategyStyle
//!                                                      │
//!                               Theme lookups ──► Element tree
//! ```
//!
//! Nothing is remembered between renders. Hosts animate by rendering again
//! with a new `value`.

mod dispatch;
mod keys;
mod strategy;
mod value;

use serde::{Deserialize, Serialize};

pub use dispatch::{Dispatch, Strategy, dispatch};
pub use keys::ProgressKey;
pub use strategy::{
    CIRCLE_CENTER, CIRCLE_RADIUS, StrategyStyle, circular_style, range_style, scale_style,
};
pub use value::{Kind, Mode, ProgressValue};

use crate::element::Element;
use crate::error::Result;
use crate::style::{is_degenerate, ratio};
use crate::theme::Theme;
use crate::types::StyleMap;
use crate::widget::Widget;

// Theme indices of the rendered parts.
const CIRCLE_INDEX: usize = 1;
const PATH_INDEX: usize = 2;
const BUFFER_INDEX: usize = 3;
const VALUE_INDEX: usize = 4;
const RANGE_INDEX: usize = 5;
const CONTAINER_INDEX: usize = 6;

/// Configuration of one progress bar render.
///
/// Every field has a default (see [`ProgressBar::default`]), so hosts only
/// set what they need. As JSON the field names are camelCase and `kind` is
/// spelled `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressBar {
    /// Position, or `{from, to}` span for a range bar.
    pub value: ProgressValue,
    /// Secondary value, shown by determinate linear bars only.
    pub buffer: f64,
    pub min: f64,
    pub max: f64,
    pub mode: Mode,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Passed through verbatim as the CSS transition duration.
    pub transition_duration: String,
    /// Adds the `multicolor` class so the theme can cycle colors.
    pub multicolor: bool,
    /// Styles a range span with `disabled` instead of `value`.
    pub disabled: bool,
    /// Extra container class, appended as is.
    pub class_name: String,
    pub theme: Theme<ProgressKey>,
}

impl Default for ProgressBar {
    /// `value = 0`, `buffer = 0`, domain `[0, 100]`, indeterminate linear,
    /// `.35s` transitions, built-in theme.
    fn default() -> Self {
        Self {
            value: ProgressValue::default(),
            buffer: 0.0,
            min: 0.0,
            max: 100.0,
            mode: Mode::default(),
            kind: Kind::default(),
            transition_duration: ".35s".to_string(),
            multicolor: false,
            disabled: false,
            class_name: String::new(),
            theme: Theme::default(),
        }
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn value(mut self, value: impl Into<ProgressValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn transition_duration(mut self, duration: impl Into<String>) -> Self {
        self.transition_duration = duration.into();
        self
    }

    pub fn multicolor(mut self, multicolor: bool) -> Self {
        self.multicolor = multicolor;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn theme(mut self, theme: Theme<ProgressKey>) -> Self {
        self.theme = theme;
        self
    }

    /// Position of `value` within this bar's domain, in `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        ratio(value, self.min, self.max)
    }

    pub fn dispatch(&self) -> Dispatch {
        dispatch(self.kind, self.mode, self.value)
    }

    pub fn styles(&self) -> StrategyStyle {
        strategy::compute(self, &self.dispatch())
    }

    /// Build the render tree.
    ///
    /// `aria-valuenow` carries the raw value, unclamped, and is omitted for
    /// ranges. Only the computed geometry is clamped to the domain.
    pub fn render(&self) -> Element {
        let dispatch = self.dispatch();
        log::debug!(
            "[progress] render {:?} strategy, {:?}",
            dispatch.strategy,
            dispatch.mode
        );
        if is_degenerate(self.min, self.max) {
            log::warn!(
                "[progress] degenerate domain [{}, {}], ratios may be NaN",
                self.min,
                self.max
            );
        }

        let inner = match strategy::compute(self, &dispatch) {
            StrategyStyle::Circular { path } => self.render_circular(path),
            StrategyStyle::Linear { buffer, value } => self.render_linear(buffer, value),
            StrategyStyle::Range { value } => self.render_range(value),
        };

        let mut container_keys = vec![self.kind.semantic_key(), self.mode.semantic_key()];
        if self.multicolor {
            container_keys.push(ProgressKey::Multicolor);
        }

        let mut container = Element::div()
            .themed(self.theme.themed(CONTAINER_INDEX, &container_keys))
            .add_class(&self.class_name);
        if let Some(value) = self.value.as_number() {
            container = container.attr("aria-valuenow", value);
        }
        container
            .attr("aria-valuemin", self.min)
            .attr("aria-valuemax", self.max)
            .child(inner)
    }

    fn render_circular(&self, path: Option<StyleMap>) -> Element {
        Element::svg()
            .themed(self.theme.themed(CIRCLE_INDEX, &[ProgressKey::Circle]))
            .child(
                Element::circle()
                    .themed(self.theme.themed(PATH_INDEX, &[ProgressKey::Path]))
                    .style_opt(path)
                    .attr("cx", CIRCLE_CENTER)
                    .attr("cy", CIRCLE_CENTER)
                    .attr("r", CIRCLE_RADIUS),
            )
    }

    fn render_linear(
        &self,
        buffer: Option<StyleMap>,
        value: Option<StyleMap>,
    ) -> Element {
        Element::div()
            .child(
                Element::span()
                    .attr("data-ref", "buffer")
                    .themed(self.theme.themed(BUFFER_INDEX, &[ProgressKey::Buffer]))
                    .style_opt(buffer),
            )
            .child(
                Element::span()
                    .attr("data-ref", "value")
                    .themed(self.theme.themed(VALUE_INDEX, &[ProgressKey::Value]))
                    .style_opt(value),
            )
    }

    fn render_range(&self, value: StyleMap) -> Element {
        let key = if self.disabled {
            ProgressKey::Disabled
        } else {
            ProgressKey::Value
        };
        Element::span()
            .attr("data-ref", "value")
            .themed(self.theme.themed(RANGE_INDEX, &[key]))
            .style(value)
    }
}

impl Widget for ProgressBar {
    fn render(&self) -> Element {
        ProgressBar::render(self)
    }
}
