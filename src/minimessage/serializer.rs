//! Writes a [`Component`] tree back out as markup.

use crate::color::NamedColor;
use crate::component::{Component, Style};

pub(crate) fn serialize(component: &Component) -> String {
    let mut out = String::new();
    write_component(component, &mut out);
    out
}

fn write_component(component: &Component, out: &mut String) {
    let tags = style_tags(&component.style);
    for tag in &tags {
        out.push('<');
        out.push_str(tag);
        out.push('>');
    }

    escape_into(&component.content, out);
    for child in &component.children {
        write_component(child, out);
    }

    for tag in tags.iter().rev() {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// Tag names for a style, color first. Colors that match a named color use
/// its name, others are written as `#rrggbb`.
fn style_tags(style: &Style) -> Vec<String> {
    let mut tags = Vec::with_capacity(style.decorations().len() + 1);
    if let Some(color) = style.color() {
        let name = NamedColor::ALL
            .into_iter()
            .find(|named| named.value() == color)
            .map_or_else(|| color.to_string(), |named| named.name().to_string());
        tags.push(name);
    }
    tags.extend(style.decorations().iter().map(|d| d.name().to_string()));
    tags
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        if matches!(c, '<' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Decoration;
    use crate::color::TextColor;

    #[test]
    fn test_serialize_nested() {
        let tree = Component::empty().with_child(
            Component::styled("", Style::new().with_color(NamedColor::Green))
                .with_child(Component::text("Hi")),
        );
        assert_eq!(serialize(&tree), "<green>Hi</green>");
    }

    #[test]
    fn test_serialize_color_and_decorations() {
        let style = Style::new()
            .with_color(TextColor::rgb(0x12, 0x34, 0x56))
            .with_decoration(Decoration::Italic)
            .with_decoration(Decoration::Bold);
        assert_eq!(
            serialize(&Component::styled("x", style)),
            "<#123456><bold><italic>x</italic></bold></#123456>"
        );
    }

    #[test]
    fn test_serialize_escapes() {
        assert_eq!(serialize(&Component::text("a<b>\\")), "a\\<b>\\\\");
    }
}
