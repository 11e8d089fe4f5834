use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Theme, ThemeKey};
use crate::error::{Error, Result};

/// What to do with override keys outside a widget's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// Skip the entry and log a warning.
    #[default]
    Ignore,
    /// Fail with [`Error::UnknownThemeKey`].
    Reject,
}

impl<K: ThemeKey> Theme<K> {
    /// Merge string-keyed overrides over the built-in defaults.
    pub fn from_overrides<I, N, C>(overrides: I, policy: UnknownKeyPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: Into<String>,
    {
        let mut parsed = Vec::new();
        for (name, class) in overrides {
            let name = name.as_ref();
            match (K::from_name(name), policy) {
                (Some(key), _) => parsed.push((key, class.into())),
                (None, UnknownKeyPolicy::Ignore) => {
                    log::warn!("[theme] ignoring unknown {} key '{}'", K::NAMESPACE, name);
                }
                (None, UnknownKeyPolicy::Reject) => {
                    return Err(Error::UnknownThemeKey {
                        namespace: K::NAMESPACE,
                        key: name.to_string(),
                    });
                }
            }
        }
        Ok(Self::resolve(parsed))
    }

    /// Parse a JSON object of overrides, e.g. `{"value": "bar-fill"}`.
    pub fn from_json(json: &str, policy: UnknownKeyPolicy) -> Result<Self> {
        let overrides: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::from_overrides(overrides, policy)
    }
}

/// Serializes the difference from the built-in theme: classes that differ
/// from their default are written as strings, defaults the theme leaves out
/// as `null`. Keys matching their default are omitted.
impl<K: ThemeKey> Serialize for Theme<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for key in K::ALL {
            match (self.get(*key), key.default_class()) {
                (Some(class), Some(default)) if class == default => {}
                (Some(class), _) => map.serialize_entry(key.name(), class)?,
                (None, Some(_)) => map.serialize_entry(key.name(), &None::<&str>)?,
                (None, None) => {}
            }
        }
        map.end()
    }
}

/// Deserializes as overrides on top of the built-in defaults, rejecting
/// unknown keys. A `null` class removes the key from the theme.
impl<'de, K: ThemeKey> Deserialize<'de> for Theme<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ThemeVisitor(PhantomData))
    }
}

struct ThemeVisitor<K>(PhantomData<K>);

impl<'de, K: ThemeKey> Visitor<'de> for ThemeVisitor<K> {
    type Value = Theme<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of {} theme keys to class names", K::NAMESPACE)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut overrides = Vec::new();
        let mut removed = Vec::new();
        while let Some((name, class)) = access.next_entry::<String, Option<String>>()? {
            match class {
                Some(class) => overrides.push((name, class)),
                None => removed.push(name),
            }
        }

        let mut theme = Theme::from_overrides(overrides, UnknownKeyPolicy::Reject)
            .map_err(de::Error::custom)?;
        for name in removed {
            let key = K::from_name(&name).ok_or_else(|| {
                de::Error::custom(Error::UnknownThemeKey {
                    namespace: K::NAMESPACE,
                    key: name.clone(),
                })
            })?;
            theme = theme.remove(key);
        }
        Ok(theme)
    }
}
