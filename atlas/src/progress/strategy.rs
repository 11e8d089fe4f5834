use std::f64::consts::PI;

use super::ProgressBar;
use super::dispatch::{Dispatch, Strategy};
use crate::style::{prefix, ratio};
use crate::types::StyleMap;

/// Circle geometry in SVG user units.
pub const CIRCLE_CENTER: f64 = 30.0;
pub const CIRCLE_RADIUS: f64 = 25.0;

/// Gap after the dash, long enough to hide the rest of the circle.
const DASH_GAP: u32 = 400;

/// Styles computed for the selected strategy.
///
/// `None` marks a part whose visual is driven by the indeterminate class
/// rather than by a computed style.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyStyle {
    Circular {
        path: Option<StyleMap>,
    },
    Linear {
        buffer: Option<StyleMap>,
        value: Option<StyleMap>,
    },
    Range {
        value: StyleMap,
    },
}

impl StrategyStyle {
    /// True when nothing was computed (indeterminate linear or circular).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Circular { path } => path.is_none(),
            Self::Linear { buffer, value } => buffer.is_none() && value.is_none(),
            Self::Range { .. } => false,
        }
    }
}

/// Compute the styles for `dispatch` from `config`.
pub fn compute(config: &ProgressBar, dispatch: &Dispatch) -> StrategyStyle {
    let value = config.value.as_number().unwrap_or_default();
    let style = match dispatch.strategy {
        Strategy::Circular => StrategyStyle::Circular {
            path: (!dispatch.is_time_based()).then(|| circular_style(config.ratio(value))),
        },
        Strategy::Linear if dispatch.is_time_based() => StrategyStyle::Linear {
            buffer: None,
            value: None,
        },
        Strategy::Linear => StrategyStyle::Linear {
            buffer: Some(scale_style(config.ratio(config.buffer), &config.transition_duration)),
            value: Some(scale_style(config.ratio(value), &config.transition_duration)),
        },
        Strategy::Range { from, to } => StrategyStyle::Range {
            value: range_style(config.ratio(from), config.ratio(to - from)),
        },
    };
    log::trace!("[progress] computed {:?}", style);
    style
}

/// Dash pattern covering `ratio` of the circumference.
pub fn circular_style(ratio: f64) -> StyleMap {
    let dash = 2.0 * PI * CIRCLE_RADIUS * ratio;
    prefix(StyleMap::new().set("stroke-dasharray", format!("{dash}, {DASH_GAP}")))
}

/// Horizontal scale with the configured transition.
pub fn scale_style(ratio: f64, transition_duration: &str) -> StyleMap {
    prefix(
        StyleMap::new()
            .set("transform", format!("scaleX({ratio})"))
            .set("transition-duration", transition_duration),
    )
}

/// Offset by `offset` of the track and scale to `length` of it.
pub fn range_style(offset: f64, length: f64) -> StyleMap {
    let percent = offset * 100.0;
    prefix(StyleMap::new().set("transform", format!("translateX({percent}%) scaleX({length})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_style() {
        let style = scale_style(0.5, ".35s");
        assert_eq!(style.get("transform"), Some("scaleX(0.5)"));
        assert_eq!(style.get("-webkit-transform"), Some("scaleX(0.5)"));
        assert_eq!(style.get("transition-duration"), Some(".35s"));
    }

    #[test]
    fn test_range_style() {
        let style = range_style(0.1, 0.7);
        assert_eq!(style.get("transform"), Some("translateX(10%) scaleX(0.7)"));
    }

    #[test]
    fn test_circular_style_full_and_empty() {
        assert_eq!(circular_style(0.0).get("stroke-dasharray"), Some("0, 400"));
        let full = 2.0 * PI * CIRCLE_RADIUS;
        assert_eq!(
            circular_style(1.0).get("stroke-dasharray"),
            Some(format!("{full}, 400").as_str())
        );
    }

    #[test]
    fn test_nan_ratio_is_emitted_verbatim() {
        assert_eq!(scale_style(f64::NAN, "1s").get("transform"), Some("scaleX(NaN)"));
    }
}
