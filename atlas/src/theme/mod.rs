//! Semantic-key theming.
//!
//! Widgets never hard-code class names. Each rendered part names one or more
//! semantic keys (`buffer`, `value`, `circle`, ...) and a [`Theme`] maps those
//! keys to concrete class names. Hosts restyle a widget by overriding entries
//! of its theme; anything they leave out falls back to the built-in
//! `<namespace>__<key>` class.

mod overrides;

use std::collections::BTreeMap;
use std::fmt::Debug;

pub use overrides::UnknownKeyPolicy;

/// A statically enumerated set of semantic keys for one widget.
///
/// Implement with `#[derive(ThemeKey)]`.
pub trait ThemeKey: Copy + Ord + Debug + Send + Sync + 'static {
    /// Prefix of the built-in class names.
    const NAMESPACE: &'static str;

    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// Key name as it appears in override maps and theme keys.
    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;

    /// Built-in class, `None` for keys only a caller can map.
    fn default_class(self) -> Option<&'static str>;
}

/// Result of a theme lookup for one rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themed {
    /// Resolved class names, space separated.
    pub class_name: String,
    /// `<index>-<key names joined by '-'>`.
    pub key: String,
}

/// A merged mapping of semantic keys to class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme<K: ThemeKey> {
    classes: BTreeMap<K, String>,
}

impl<K: ThemeKey> Theme<K> {
    /// The built-in defaults only.
    pub fn builtin() -> Self {
        let classes = K::ALL
            .iter()
            .filter_map(|key| key.default_class().map(|class| (*key, class.to_string())))
            .collect();
        Self { classes }
    }

    /// A theme with no mappings at all.
    pub fn empty() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// Merge caller overrides over the built-in defaults.
    pub fn resolve<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        Self::builtin().merge(overrides)
    }

    /// Merge `overrides` over this theme; overriding keys win.
    pub fn merge<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        for (key, class) in overrides {
            self.classes.insert(key, class.into());
        }
        self
    }

    pub fn set(mut self, key: K, class: impl Into<String>) -> Self {
        self.classes.insert(key, class.into());
        self
    }

    /// Drop the mapping for `key`, default included.
    pub fn remove(mut self, key: K) -> Self {
        self.classes.remove(&key);
        self
    }

    pub fn get(&self, key: K) -> Option<&str> {
        self.classes.get(&key).map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<K, String> {
        &self.classes
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> {
        self.classes.iter().map(|(key, class)| (*key, class.as_str()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Concatenate the classes for `keys`, skipping unmapped or empty ones.
    pub fn lookup(&self, keys: &[K]) -> String {
        keys.iter()
            .filter_map(|key| self.get(*key))
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Class names and theme key for the element at `index`.
    pub fn themed(&self, index: usize, keys: &[K]) -> Themed {
        let names = keys.iter().map(|key| key.name()).collect::<Vec<_>>();
        let themed = Themed {
            class_name: self.lookup(keys),
            key: format!("{index}-{}", names.join("-")),
        };
        log::trace!(
            "[theme] {} {} -> {:?}",
            K::NAMESPACE,
            themed.key,
            themed.class_name
        );
        themed
    }
}

impl<K: ThemeKey> Default for Theme<K> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<K: ThemeKey, S: Into<String>> FromIterator<(K, S)> for Theme<K> {
    /// Build a theme holding exactly the given mappings, no defaults.
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Self::empty().merge(iter)
    }
}
