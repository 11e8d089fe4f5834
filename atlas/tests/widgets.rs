use atlas::overlay::ON_CLICK;
use atlas::switch::ON_CHANGE;
use atlas::{
    Backdrop, Dialog, DialogKey, DialogKind, DropdownList, Element, Overlay, OverlayKey, Switch,
    SwitchKey, SwitchSize, Tag, Theme, Widget, compose, find_element,
};

// ============================================================================
// Dialog
// ============================================================================

#[test]
fn test_dialog_inactive_by_default() {
    let root = Dialog::new().child(Element::text("Hello")).render();

    assert_eq!(root.class_name, "ra_overlay__overlay");
    assert_eq!(root.get_attr("aria-hidden"), Some("true"));

    let dialog = find_element(&root, "1-dialog-inactive-normal").unwrap();
    assert_eq!(
        dialog.class_name,
        "ra_dialog__dialog ra_dialog__inactive ra_dialog__normal"
    );
    assert_eq!(dialog.get_attr("role"), Some("dialog"));
}

#[test]
fn test_dialog_active_with_classes() {
    let root = Dialog::new()
        .active(true)
        .kind(DialogKind::Large)
        .class_name("confirm")
        .body_class("confirm-body")
        .child(Element::text("Delete?"))
        .render();

    assert!(root.has_class("ra_overlay__active"));
    assert_eq!(root.get_attr("aria-hidden"), Some("false"));

    let dialog = find_element(&root, "1-dialog-active-large").unwrap();
    assert_eq!(
        dialog.class_name,
        "ra_dialog__dialog ra_dialog__active ra_dialog__large confirm"
    );

    let body = find_element(&root, "2-body").unwrap();
    assert_eq!(body.tag, Tag::Section);
    assert_eq!(body.class_name, "ra_dialog__body confirm-body");
    assert_eq!(body.child_elements().len(), 1);
}

#[test]
fn test_dialog_overlay_click_handler() {
    let root = Dialog::new()
        .active(true)
        .on_overlay_click("close_dialog")
        .render();
    let backdrop = find_element(&root, "2-backdrop").unwrap();
    assert_eq!(backdrop.get_data(ON_CLICK).map(String::as_str), Some("close_dialog"));
}

#[test]
fn test_dialog_theme_override() {
    let theme = Theme::resolve([(DialogKey::Dialog, "modal")]);
    let root = Dialog::new().theme(theme).render();
    let dialog = find_element(&root, "1-dialog-inactive-normal").unwrap();
    assert!(dialog.has_class("modal"));
    assert!(!dialog.has_class("ra_dialog__dialog"));
}

struct Passthrough;

impl Overlay for Passthrough {
    fn render(&self, active: bool, _on_click: Option<&str>, children: Element) -> Element {
        Element::div().class_name(if active { "shown" } else { "hidden" }).child(children)
    }
}

#[test]
fn test_dialog_custom_overlay() {
    let root = Dialog::new().active(true).render_with(&Passthrough);
    assert_eq!(root.class_name, "shown");
    assert!(find_element(&root, "1-dialog-active-normal").is_some());
}

#[test]
fn test_backdrop_theme() {
    let overlay = Backdrop::new(Theme::resolve([(OverlayKey::Backdrop, "dim")]));
    let root = overlay.render(false, None, Element::div());
    let backdrop = find_element(&root, "2-backdrop").unwrap();
    assert_eq!(backdrop.class_name, "dim");
    assert!(backdrop.get_data(ON_CLICK).is_none());
}

// ============================================================================
// Switch
// ============================================================================

#[test]
fn test_switch_medium_by_default() {
    let root = Switch::new().render();
    assert_eq!(root.tag, Tag::Label);
    assert_eq!(root.class_name, "ra_switch__sliderMedium");

    let parts = root.child_elements();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].tag, Tag::Input);
    assert_eq!(parts[0].get_attr("type"), Some("checkbox"));
    assert_eq!(parts[0].get_attr("checked"), None);
    assert_eq!(parts[1].class_name, "ra_switch__handleMedium");
    assert_eq!(parts[2].class_name, "ra_switch__onColorMedium");
    assert!(parts.iter().all(|part| part.style.is_none()));
}

#[test]
fn test_switch_size_and_disabled() {
    let root = Switch::new()
        .size(SwitchSize::Small)
        .disabled(true)
        .checked(true)
        .render();
    assert_eq!(root.class_name, "ra_switch__sliderSmall ra_switch__disabled");

    let parts = root.child_elements();
    assert_eq!(parts[0].class_name, "ra_switch__inputSmall ra_switch__disabled");
    assert_eq!(parts[0].get_attr("checked"), Some("checked"));
    assert_eq!(parts[0].get_attr("disabled"), Some("disabled"));
    assert_eq!(parts[1].class_name, "ra_switch__handleSmall ra_switch__disabled");
    // The on-color track never greys out.
    assert_eq!(parts[2].class_name, "ra_switch__onColorSmall");
}

#[test]
fn test_switch_colors() {
    let root = Switch::new()
        .size(SwitchSize::Large)
        .on_color("green")
        .off_color("gray")
        .button_color("white")
        .render();

    let background = |element: &Element| {
        element
            .style
            .as_ref()
            .and_then(|style| style.get("background"))
            .map(str::to_string)
    };
    let parts = root.child_elements();
    assert_eq!(background(&root).as_deref(), Some("gray"));
    assert_eq!(background(&parts[0]).as_deref(), Some("green"));
    assert_eq!(background(&parts[1]).as_deref(), Some("white"));
    assert_eq!(background(&parts[2]).as_deref(), Some("green"));
}

#[test]
fn test_switch_name_handler_and_class() {
    let root = Switch::new()
        .name("notifications")
        .on_change("toggle_notifications")
        .class_name("settings-switch")
        .theme(Theme::resolve([(SwitchKey::SliderMedium, "track")]))
        .render();
    assert_eq!(root.class_name, "track settings-switch");

    let input = &root.child_elements()[0];
    assert_eq!(input.get_attr("name"), Some("notifications"));
    assert_eq!(
        input.get_data(ON_CHANGE).map(String::as_str),
        Some("toggle_notifications")
    );
}

// ============================================================================
// Dropdown
// ============================================================================

#[test]
fn test_dropdown_list() {
    let list = DropdownList::new()
        .class_name("menu")
        .item("Open")
        .item("Close");
    assert_eq!(
        list.to_markup(),
        "<ul class=\"menu ra_dropdown__list\" key=\"1-list\">\
         <li><span>Open</span></li><li><span>Close</span></li></ul>"
    );
}

#[test]
fn test_dropdown_without_class() {
    let root = DropdownList::new().render();
    assert_eq!(root.class_name, "ra_dropdown__list");
    assert!(root.child_elements().is_empty());
}

// ============================================================================
// Class composition
// ============================================================================

#[test]
fn test_compose_like_dialog_classes() {
    let active = false;
    let classes = compose([
        ("inactive", !active),
        ("normal", true),
        ("active", active),
        ("", true),
    ]);
    assert_eq!(classes, "inactive normal");
}

#[test]
fn test_widgets_as_trait_objects() {
    let widgets: Vec<Box<dyn Widget>> = vec![
        Box::new(Switch::new()),
        Box::new(DropdownList::new()),
        Box::new(atlas::ProgressBar::new()),
    ];
    let tags: Vec<_> = widgets.iter().map(|widget| widget.render().tag).collect();
    assert_eq!(tags, vec![Tag::Label, Tag::Ul, Tag::Div]);
}
