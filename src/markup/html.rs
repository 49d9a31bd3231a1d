//! HTML serialization for the render tree

use super::{Element, Node};

pub(super) fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, out),
        Node::Element(el) => write_element(el, out),
        Node::Fragment(nodes) => {
            for node in nodes {
                write_node(node, out);
            }
        }
    }
}

pub(super) fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag);

    if !el.class.is_empty() {
        out.push_str(" class=\"");
        escape_into(&el.class, out);
        out.push('"');
    }

    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        // Boolean attributes render bare
        if let Some(value) = value {
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
    }

    out.push('>');
    for child in &el.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(el.tag);
    out.push('>');
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::markup::{Node, button, div, p};

    #[test]
    fn test_render_element_with_class_and_attrs() {
        let html = button()
            .class("btn primary")
            .attr("type", "button")
            .bool_attr("disabled", true)
            .child("Go")
            .render_to_string();
        assert_eq!(
            html,
            r#"<button class="btn primary" type="button" disabled>Go</button>"#
        );
    }

    #[test]
    fn test_render_omits_empty_class() {
        assert_eq!(div().child("x").render_to_string(), "<div>x</div>");
    }

    #[test]
    fn test_render_escapes_text_and_attrs() {
        let html = p()
            .attr("title", "a \"quoted\" <title>")
            .child("Tom & Jerry's <show>")
            .render_to_string();
        assert_eq!(
            html,
            "<p title=\"a &quot;quoted&quot; &lt;title&gt;\">Tom &amp; Jerry&#39;s &lt;show&gt;</p>"
        );
    }

    #[test]
    fn test_render_fragment_inline() {
        let node = Node::Fragment(vec!["a".into(), p().child("b").into(), "c".into()]);
        assert_eq!(node.render_to_string(), "a<p>b</p>c");
    }
}
