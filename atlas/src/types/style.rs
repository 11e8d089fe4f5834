use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered map of CSS-like property names to values.
///
/// Property names use their CSS spelling (`transform`, `transition-duration`,
/// `stroke-dasharray`). Iteration is in property-name order so rendered
/// output is stable across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: BTreeMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleMap::insert`].
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Inline declaration form: `a: 1; b: 2`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (property, value) in iter {
            style.insert(property, value);
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css_is_ordered() {
        let style = StyleMap::new()
            .set("transition-duration", ".35s")
            .set("transform", "scaleX(0.5)");
        assert_eq!(style.to_css(), "transform: scaleX(0.5); transition-duration: .35s");
    }

    #[test]
    fn test_set_overwrites() {
        let style = StyleMap::new().set("background", "red").set("background", "blue");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("background"), Some("blue"));
    }
}
