//! Serialize a node tree to an HTML fragment.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::node::{Node, NodeKind};
use crate::style::{Font, Style, StyleKey};

/// Render `node` and its descendants as HTML.
///
/// Text and attribute values are escaped. Title fonts turn text nodes into
/// headings of the matching level.
pub fn render_fragment(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node.kind() {
        NodeKind::Text { content } => {
            let tag = match font_of(node).and_then(|f| f.heading_level()) {
                Some(level) => format!("h{level}"),
                None => "p".to_string(),
            };
            open_tag(out, &tag, node, None, &[]);
            out.push_str(&encode_text(content));
            close_tag(out, &tag);
        }
        NodeKind::Link { label, target } => {
            open_tag(out, "a", node, None, &[("href", target.as_str())]);
            out.push_str(&encode_text(label));
            close_tag(out, "a");
        }
        NodeKind::Container { region, children } => {
            let tag = region.tag();
            open_tag(out, tag, node, Some(region.class_name()), &[]);
            for child in children {
                write_node(out, child);
            }
            close_tag(out, tag);
        }
    }
}

fn font_of(node: &Node) -> Option<Font> {
    match node.style_for(StyleKey::Font) {
        Some(Style::Font(font)) => Some(*font),
        _ => None,
    }
}

fn open_tag(
    out: &mut String,
    tag: &str,
    node: &Node,
    base_class: Option<&str>,
    extra: &[(&str, &str)],
) {
    out.push('<');
    out.push_str(tag);

    if let Some(id) = node.anchor_id() {
        push_attr(out, "id", id);
    }

    for (name, value) in extra {
        push_attr(out, name, value);
    }

    let classes: Vec<&str> = base_class
        .into_iter()
        .chain(font_of(node).map(|f| f.class_name()))
        .collect();
    if !classes.is_empty() {
        push_attr(out, "class", &classes.join(" "));
    }

    let declarations: Vec<String> = node
        .styles()
        .iter()
        .flat_map(Style::declarations)
        .collect();
    if !declarations.is_empty() {
        push_attr(out, "style", &declarations.join("; "));
    }

    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Region;
    use crate::style::{Edge, FontWeight};

    #[test]
    fn title_font_renders_heading() {
        let html = render_fragment(&Node::text("Привет").font(Font::Title1));

        assert_eq!(html, r#"<h1 class="font-title1">Привет</h1>"#);
    }

    #[test]
    fn plain_text_renders_paragraph() {
        assert_eq!(render_fragment(&Node::text("hi")), "<p>hi</p>");
    }

    #[test]
    fn link_carries_target_and_inline_styles() {
        let link = Node::link("Контакты", "#contact").margin(Edge::Horizontal, 15);
        let html = render_fragment(&link);

        assert_eq!(
            html,
            r##"<a href="#contact" style="margin-left: 15px; margin-right: 15px">Контакты</a>"##
        );
    }

    #[test]
    fn containers_nest_children_in_order() {
        let tree = Node::container(
            Region::Navigation,
            vec![Node::link("a", "#a"), Node::row(vec![Node::text("b")])],
        )
        .padding(Edge::Vertical, 20);

        let html = render_fragment(&tree);

        assert_eq!(
            html,
            concat!(
                r#"<nav class="navbar" style="padding-top: 20px; padding-bottom: 20px">"#,
                r##"<a href="#a">a</a>"##,
                r#"<div class="row-list"><p>b</p></div>"#,
                "</nav>"
            )
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let html = render_fragment(&Node::link("<b>&</b>", "/?a=1&b=\"2\"").id("x\"y"));

        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(html.contains(r#"id="x&quot;y""#));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn weight_becomes_inline_style() {
        let html = render_fragment(&Node::text("w").weight(FontWeight::Bold));

        assert_eq!(html, r#"<p style="font-weight: 700">w</p>"#);
    }
}
