use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::ProgressKey;

/// What a progress bar displays: a single position or a span.
///
/// Deserializes from either a bare number or a `{"from": .., "to": ..}`
/// record, so the shape is decided once at the boundary. JSON has no NaN or
/// infinities, so those numbers are written as `"NaN"`, `"inf"` and `"-inf"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressValue {
    Determinate(#[serde(with = "number")] f64),
    Range {
        #[serde(with = "number")]
        from: f64,
        #[serde(with = "number")]
        to: f64,
    },
}

/// `f64` that falls back to a string for non-finite values.
mod number {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;
    use serde::Serializer;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.parse::<f64>() {
                Ok(value) if !value.is_finite() => Ok(value),
                _ => Err(de::Error::custom(format!("expected a number, got \"{text}\""))),
            },
        }
    }
}

impl ProgressValue {
    pub fn range(from: f64, to: f64) -> Self {
        Self::Range { from, to }
    }

    /// The single value, if this is not a range.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Determinate(value) => Some(*value),
            Self::Range { .. } => None,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

impl Default for ProgressValue {
    fn default() -> Self {
        Self::Determinate(0.0)
    }
}

impl From<f64> for ProgressValue {
    fn from(value: f64) -> Self {
        Self::Determinate(value)
    }
}

impl From<Range<f64>> for ProgressValue {
    fn from(range: Range<f64>) -> Self {
        Self::Range {
            from: range.start,
            to: range.end,
        }
    }
}

/// Temporal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Progress tracks a known value.
    Determinate,
    /// Ongoing work of unknown length; the visual loops on its own.
    #[default]
    Indeterminate,
}

impl Mode {
    pub fn semantic_key(self) -> ProgressKey {
        match self {
            Self::Determinate => ProgressKey::Determinate,
            Self::Indeterminate => ProgressKey::Indeterminate,
        }
    }
}

/// Visual encoding (the `type` axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Linear,
    Circular,
}

impl Kind {
    pub fn semantic_key(self) -> ProgressKey {
        match self {
            Self::Linear => ProgressKey::Linear,
            Self::Circular => ProgressKey::Circular,
        }
    }
}
