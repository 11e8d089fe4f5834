use crate::types::StyleMap;

/// Properties that some engines only honor under a vendor prefix.
const PREFIXED_PROPERTIES: &[(&str, &[&str])] = &[("transform", &["-webkit-", "-moz-", "-ms-"])];

/// Add vendor-prefixed duplicates for properties that need them.
///
/// Every original property is kept. For each property in the prefix table a
/// copy is inserted under each vendor name with the same value. An existing
/// prefixed property is left untouched.
pub fn prefix(style: StyleMap) -> StyleMap {
    let mut prefixed = style.clone();
    for (property, value) in style.iter() {
        let Some((_, vendors)) = PREFIXED_PROPERTIES
            .iter()
            .find(|(name, _)| *name == property)
        else {
            continue;
        };
        for vendor in *vendors {
            let name = format!("{vendor}{property}");
            if !prefixed.contains(&name) {
                prefixed.insert(name, value);
            }
        }
    }
    prefixed
}
