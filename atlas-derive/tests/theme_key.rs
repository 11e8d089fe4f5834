//! Tests for the ThemeKey derive.

use atlas::{Theme, ThemeKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ThemeKey)]
#[theme(namespace = "app_card")]
enum CardKey {
    Card,
    HeaderTitle,
    #[theme(name = "footer-bar")]
    Footer,
    #[theme(no_default)]
    Selected,
}

#[test]
fn test_namespace() {
    assert_eq!(CardKey::NAMESPACE, "app_card");
}

#[test]
fn test_all_in_declaration_order() {
    assert_eq!(
        CardKey::ALL,
        &[CardKey::Card, CardKey::HeaderTitle, CardKey::Footer, CardKey::Selected]
    );
}

#[test]
fn test_names() {
    assert_eq!(CardKey::Card.name(), "card");
    assert_eq!(CardKey::HeaderTitle.name(), "headerTitle");
    assert_eq!(CardKey::Footer.name(), "footer-bar");
    assert_eq!(CardKey::Selected.name(), "selected");
}

#[test]
fn test_from_name() {
    for key in CardKey::ALL {
        assert_eq!(CardKey::from_name(key.name()), Some(*key));
    }
    assert_eq!(CardKey::from_name("Footer"), None);
    assert_eq!(CardKey::from_name(""), None);
}

#[test]
fn test_default_classes() {
    assert_eq!(CardKey::Card.default_class(), Some("app_card__card"));
    assert_eq!(CardKey::HeaderTitle.default_class(), Some("app_card__headerTitle"));
    assert_eq!(CardKey::Footer.default_class(), Some("app_card__footer-bar"));
    assert_eq!(CardKey::Selected.default_class(), None);
}

#[test]
fn test_builtin_theme_from_derived_keys() {
    let theme = Theme::<CardKey>::builtin();
    assert_eq!(theme.len(), 3);
    assert_eq!(
        theme.lookup(&[CardKey::Card, CardKey::Selected]),
        "app_card__card"
    );
}
