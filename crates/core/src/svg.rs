//! Parses SVG markup strings into tree fragments.

use crate::error::CalloutError;
use crate::tree::{Element, Node, Properties};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::borrow::Cow;

/// Parses a markup fragment (typically a single `<svg>` element) into nodes.
///
/// Whitespace-only text between tags is dropped. Entity references are decoded.
/// Unbalanced or mismatched tags are reported as [`CalloutError::IconMarkup`].
pub fn parse_fragment(markup: &str) -> Result<Vec<Node>, CalloutError> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    let mut roots: Vec<Node> = Vec::new();
    let mut open: Vec<Element> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| CalloutError::icon_markup(e.to_string()))?;
        match event {
            Event::Start(e) => open.push(start_element(&reader, &e)),
            Event::Empty(e) => {
                let el = start_element(&reader, &e);
                attach(&mut open, &mut roots, Node::Element(el));
            }
            Event::End(_) => {
                let el = open
                    .pop()
                    .ok_or_else(|| CalloutError::icon_markup("unexpected closing tag"))?;
                attach(&mut open, &mut roots, Node::Element(el));
            }
            Event::Text(e) => {
                let text = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|e| CalloutError::icon_markup(e.to_string()))?;
                attach_text(&mut open, &mut roots, &text);
            }
            Event::GeneralRef(e) => {
                let name = String::from_utf8_lossy(&e).into_owned();
                attach_text(&mut open, &mut roots, &decode_entity(&name));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                attach_text(&mut open, &mut roots, &text);
            }
            Event::Eof => break,
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some(el) = open.last() {
        return Err(CalloutError::icon_markup(format!(
            "unclosed <{}> element",
            el.tag_name
        )));
    }

    Ok(roots)
}

fn start_element(reader: &Reader<&[u8]>, e: &BytesStart) -> Element {
    let tag_name = decode_name(reader, e.name().as_ref());
    let mut properties = Properties::new();
    for attr in e.attributes().flatten() {
        let key = decode_name(reader, attr.key.as_ref());
        let value = attr
            .unescape_value()
            .map_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned(), Cow::into_owned);
        properties.insert(key, value.into());
    }
    Element::new(tag_name).with_properties(properties)
}

fn decode_name(reader: &Reader<&[u8]>, name: &[u8]) -> String {
    reader
        .decoder()
        .decode(name)
        .map_or_else(|_| String::from_utf8_lossy(name).into_owned(), Cow::into_owned)
}

fn attach(open: &mut [Element], roots: &mut Vec<Node>, node: Node) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn attach_text(open: &mut [Element], roots: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    let siblings = match open.last_mut() {
        Some(parent) => &mut parent.children,
        None => roots,
    };
    if let Some(Node::Text(last)) = siblings.last_mut() {
        last.value.push_str(text);
    } else {
        siblings.push(Node::text(text));
    }
}

/// Decodes the name inside `&...;`.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "amp" => "&".to_string(),
        "apos" => "'".to_string(),
        "quot" => "\"".to_string(),
        s if s.starts_with('#') => {
            let code = match s.strip_prefix("#x").or_else(|| s.strip_prefix("#X")) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => s[1..].parse::<u32>().ok(),
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::nodes_to_html;
    use crate::tree::PropertyValue;

    #[test]
    fn parses_svg_with_self_closing_children() {
        let nodes = parse_fragment(
            r#"<svg viewBox="0 0 24 24" fill="none"><path d="m6 9 6 6 6-6"/><circle r="2"></circle></svg>"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 1);
        let svg = nodes[0].as_element().unwrap();
        assert_eq!(svg.tag_name, "svg");
        assert_eq!(svg.property("viewBox"), Some(&PropertyValue::from("0 0 24 24")));
        assert_eq!(svg.children.len(), 2);
        assert!(svg.children[0].is_element("path"));
        assert!(svg.children[1].is_element("circle"));
    }

    #[test]
    fn keeps_text_and_decodes_entities() {
        let nodes = parse_fragment("<svg><title>a&amp;b&#x41;</title></svg>").unwrap();
        assert_eq!(nodes_to_html(&nodes), "<svg><title>a&amp;bA</title></svg>");
    }

    #[test]
    fn drops_whitespace_between_tags() {
        let nodes = parse_fragment("<svg>\n  <path d=\"M0 0\"/>\n</svg>").unwrap();
        let svg = nodes[0].as_element().unwrap();
        assert_eq!(svg.children.len(), 1);
    }

    #[test]
    fn rejects_unclosed_markup() {
        assert!(matches!(
            parse_fragment("<svg><path d=\"M0 0\"/>"),
            Err(CalloutError::IconMarkup { .. })
        ));
        assert!(matches!(
            parse_fragment("<svg></g>"),
            Err(CalloutError::IconMarkup { .. })
        ));
    }

    #[test]
    fn entity_decoding() {
        assert_eq!(decode_entity("lt"), "<");
        assert_eq!(decode_entity("#65"), "A");
        assert_eq!(decode_entity("#X42"), "B");
        assert_eq!(decode_entity("nbsp"), "&nbsp;");
    }
}
