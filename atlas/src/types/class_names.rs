/// Class-name composition.
///
/// Collects class names in insertion order, dropping empty entries and
/// repeats, and joins them with single spaces.
///
/// ```
/// use atlas::ClassNames;
///
/// let classes = ClassNames::new()
///     .add("dialog")
///     .add_if(true, "active")
///     .add_if(false, "inactive")
///     .add("")
///     .build();
/// assert_eq!(classes, "dialog active");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    names: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every whitespace-separated class in `names`.
    pub fn add(mut self, names: impl AsRef<str>) -> Self {
        for name in names.as_ref().split_whitespace() {
            if !self.names.iter().any(|existing| existing == name) {
                self.names.push(name.to_string());
            }
        }
        self
    }

    pub fn add_if(self, condition: bool, names: impl AsRef<str>) -> Self {
        if condition { self.add(names) } else { self }
    }

    pub fn add_opt(self, names: Option<impl AsRef<str>>) -> Self {
        match names {
            Some(names) => self.add(names),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn build(self) -> String {
        self.names.join(" ")
    }
}

/// Compose a class string from conditional parts.
///
/// Each part is `(class, enabled)`; disabled and empty parts are skipped.
pub fn compose<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .fold(ClassNames::new(), |classes, (name, enabled)| {
            classes.add_if(enabled, name)
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_skips_duplicates_and_blanks() {
        let classes = ClassNames::new().add("a  b").add("b").add("   ").add("c").build();
        assert_eq!(classes, "a b c");
    }

    #[test]
    fn test_compose_conditional() {
        let classes = compose([("list", true), ("hidden", false), ("wide", true)]);
        assert_eq!(classes, "list wide");
    }

    #[test]
    fn test_empty_build() {
        assert_eq!(ClassNames::new().build(), "");
        assert!(ClassNames::new().add_opt(None::<&str>).is_empty());
    }
}
