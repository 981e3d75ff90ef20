//! Serializes the generic tree to HTML.

use crate::tree::{Node, PropertyValue};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serializes a node (and its descendants) to an HTML string.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serializes a sequence of sibling nodes to an HTML string.
pub fn nodes_to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Root(children) => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::Text(text) => out.push_str(&html_escape::encode_text(&text.value)),
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.tag_name);
            for (key, value) in &el.properties {
                write_attribute(attribute_name(key), value, out);
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&el.tag_name.as_str()) && el.children.is_empty() {
                return;
            }

            for child in &el.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&el.tag_name);
            out.push('>');
        }
    }
}

/// hast-style `className` renders as `class`.
fn attribute_name(key: &str) -> &str {
    if key == "className" { "class" } else { key }
}

fn write_attribute(name: &str, value: &PropertyValue, out: &mut String) {
    let rendered = match value {
        PropertyValue::Bool(false) => return,
        PropertyValue::Bool(true) => {
            out.push(' ');
            out.push_str(name);
            return;
        }
        PropertyValue::Number(n) => n.to_string(),
        PropertyValue::String(s) => s.clone(),
        PropertyValue::List(tokens) => {
            if tokens.is_empty() {
                return;
            }
            tokens.join(" ")
        }
    };

    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(&rendered));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Element;

    #[test]
    fn serializes_nested_elements() {
        let node: Node = Element::new("div")
            .with_property("class", "callout")
            .with_children(vec![
                Element::new("p")
                    .with_children(vec![Node::text("a < b & c")])
                    .into(),
                Element::new("br").into(),
            ])
            .into();
        assert_eq!(
            to_html(&node),
            r#"<div class="callout"><p>a &lt; b &amp; c</p><br></div>"#
        );
    }

    #[test]
    fn boolean_and_list_attributes() {
        let node: Node = Element::new("details")
            .with_property("open", true)
            .with_property("hidden", false)
            .with_property("className", vec!["a".to_string(), "b".to_string()])
            .with_property("title", "say \"hi\"")
            .into();
        assert_eq!(
            to_html(&node),
            r#"<details open class="a b" title="say &quot;hi&quot;"></details>"#
        );
    }

    #[test]
    fn root_serializes_children_only() {
        let root = Node::Root(vec![Node::text("a"), Node::text("\n"), Node::text("b")]);
        assert_eq!(to_html(&root), "a\nb");
        assert_eq!(nodes_to_html(&[Node::text("x")]), "x");
    }
}
