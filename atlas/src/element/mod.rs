mod content;
mod markup;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by theme key in the tree.
pub fn find_element<'a>(root: &'a Element, key: &str) -> Option<&'a Element> {
    find(root, &|element| element.key.as_deref() == Some(key))
}

/// Find the first element carrying `data-ref="<data_ref>"`.
pub fn find_by_ref<'a>(root: &'a Element, data_ref: &str) -> Option<&'a Element> {
    find(root, &|element| element.get_attr("data-ref") == Some(data_ref))
}

fn find<'a>(root: &'a Element, predicate: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if predicate(root) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find(child, predicate) {
            return Some(found);
        }
    }

    None
}
