use super::{Content, Element};

impl Element {
    /// Serialize the tree as HTML-like markup.
    ///
    /// Attribute order is `class`, `key`, then the remaining attributes by
    /// name, then `style`. Handler data is not part of markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if !element.class_name.is_empty() {
        write_attr(out, "class", &element.class_name);
    }
    if let Some(key) = &element.key {
        write_attr(out, "key", key);
    }
    for (name, value) in &element.attrs {
        write_attr(out, name, value);
    }
    if let Some(style) = &element.style
        && !style.is_empty()
    {
        write_attr(out, "style", &style.to_css());
    }

    if element.tag.is_void() && element.content.is_none() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use crate::types::StyleMap;
    use crate::Element;

    #[test]
    fn test_nested_markup() {
        let root = Element::div()
            .class_name("outer")
            .attr("aria-valuemin", 0)
            .child(Element::span().style(StyleMap::new().set("transform", "scaleX(1)")))
            .child(Element::text("a < b"));
        assert_eq!(
            root.to_markup(),
            "<div class=\"outer\" aria-valuemin=\"0\">\
             <span style=\"transform: scaleX(1)\"></span>\
             <span>a &lt; b</span></div>"
        );
    }

    #[test]
    fn test_text_kept_when_children_added() {
        let label = Element::text("Loading").child(Element::span().class_name("dot"));
        assert_eq!(
            label.to_markup(),
            "<span><span>Loading</span><span class=\"dot\"></span></span>"
        );
    }

    #[test]
    fn test_void_tags_self_close() {
        let circle = Element::circle().attr("r", 25);
        assert_eq!(circle.to_markup(), "<circle r=\"25\" />");
    }
}
