//! Generic element/text tree.
//!
//! The shape follows hast: elements carry a tag name, an ordered property map,
//! and children; text nodes carry a string. Parsers and serializers outside this
//! crate produce and consume it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Element properties. Keys are unique; insertion order is kept so output is stable.
pub type Properties = IndexMap<String, PropertyValue>;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean attribute (`open`, `hidden`). `false` is not rendered.
    Bool(bool),
    /// Integer attribute value.
    Number(i64),
    /// Plain string value.
    String(String),
    /// Space-separated token list (class names).
    List(Vec<String>),
}

impl PropertyValue {
    /// Returns true if this value contributes no tokens (empty string, empty list, `false`).
    pub fn is_blank(&self) -> bool {
        match self {
            PropertyValue::Bool(b) => !b,
            PropertyValue::Number(_) => false,
            PropertyValue::String(s) => s.trim().is_empty(),
            PropertyValue::List(tokens) => tokens.iter().all(|t| t.trim().is_empty()),
        }
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Individual tokens of a class-like value.
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            PropertyValue::String(s) => s.split_whitespace().collect(),
            PropertyValue::List(tokens) => tokens.iter().map(String::as_str).collect(),
            PropertyValue::Bool(_) | PropertyValue::Number(_) => Vec::new(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name (`blockquote`, `p`, `svg`, ...).
    pub tag_name: String,
    /// Element properties.
    pub properties: Properties,
    /// Ordered children.
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no properties or children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Sets a property, replacing any previous value under the same key.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Replaces the property map.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Replaces the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Returns true if the tag name matches.
    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }

    /// Looks up a property.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A text node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    /// Text value.
    pub value: String,
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Document root; holds top-level nodes.
    Root(Vec<Node>),
    /// Element node.
    Element(Element),
    /// Text node.
    Text(Text),
}

impl Node {
    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Creates an element node from tag, properties and children.
    pub fn element(tag_name: impl Into<String>, properties: Properties, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag_name: tag_name.into(),
            properties,
            children,
        })
    }

    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Returns the element mutably, if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Returns the text value, if this node is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            _ => None,
        }
    }

    /// Returns true if this is an element with the given tag name.
    pub fn is_element(&self, tag_name: &str) -> bool {
        self.as_element().is_some_and(|el| el.is(tag_name))
    }

    /// Returns true if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Children of a root or element.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(children) => Some(children),
            Node::Element(el) => Some(&el.children),
            Node::Text(_) => None,
        }
    }

    /// Mutable children of a root or element.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(children) => Some(children),
            Node::Element(el) => Some(&mut el.children),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.value),
            Node::Root(children) => children.iter().for_each(|c| c.collect_text(out)),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}
