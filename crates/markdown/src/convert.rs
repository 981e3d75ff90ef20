//! mdast → generic tree conversion.
//!
//! Output mirrors what mdast-to-hast produces, including the `"\n"` text nodes
//! between block children and the `<br>` + `"\n"` pair for hard breaks. The
//! callout rewrite is written against that shape.

use callouts_core::{Element, Node, Properties, PropertyValue};
use markdown::mdast::{self, AlignKind};
use std::collections::HashMap;

/// Link/image definitions keyed by normalized identifier.
struct Definitions {
    entries: HashMap<String, (String, Option<String>)>,
}

impl Definitions {
    fn collect(root: &mdast::Node) -> Self {
        let mut entries = HashMap::new();
        collect_definitions(root, &mut entries);
        Self { entries }
    }

    fn get(&self, identifier: &str) -> Option<&(String, Option<String>)> {
        self.entries.get(&identifier.to_lowercase())
    }
}

fn collect_definitions(node: &mdast::Node, out: &mut HashMap<String, (String, Option<String>)>) {
    if let mdast::Node::Definition(def) = node {
        // First definition wins, as in CommonMark.
        out.entry(def.identifier.to_lowercase())
            .or_insert_with(|| (def.url.clone(), def.title.clone()));
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, out);
        }
    }
}

/// Converts an mdast root into a generic tree root.
pub fn mdast_to_tree(root: &mdast::Node) -> Node {
    let definitions = Definitions::collect(root);
    let converter = Converter {
        definitions: &definitions,
    };
    let children = match root {
        mdast::Node::Root(root) => converter.blocks(&root.children, false),
        other => converter.blocks(std::slice::from_ref(other), false),
    };
    Node::Root(children)
}

struct Converter<'a> {
    definitions: &'a Definitions,
}

impl Converter<'_> {
    /// Converts block children, separated by `"\n"` (and surrounded by it when `loose`).
    fn blocks(&self, nodes: &[mdast::Node], loose: bool) -> Vec<Node> {
        let converted: Vec<Node> = nodes.iter().flat_map(|n| self.node(n)).collect();
        wrap(converted, loose)
    }

    /// Converts phrasing children, merging adjacent text.
    fn inline(&self, nodes: &[mdast::Node]) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            for converted in self.node(node) {
                push_merged(&mut out, converted);
            }
        }
        out
    }

    fn node(&self, node: &mdast::Node) -> Vec<Node> {
        match node {
            mdast::Node::Root(root) => self.blocks(&root.children, false),
            mdast::Node::Paragraph(p) => vec![element("p", self.inline(&p.children))],
            mdast::Node::Heading(h) => {
                vec![element(format!("h{}", h.depth), self.inline(&h.children))]
            }
            mdast::Node::Blockquote(quote) => {
                vec![element("blockquote", self.blocks(&quote.children, true))]
            }
            mdast::Node::List(list) => vec![self.list(list)],
            mdast::Node::ListItem(item) => vec![self.list_item(item, item.spread)],
            mdast::Node::Code(code) => vec![code_block(code)],
            mdast::Node::Table(table) => vec![self.table(table)],
            mdast::Node::ThematicBreak(_) => vec![element("hr", Vec::new())],
            mdast::Node::Text(text) => vec![Node::text(text.value.as_str())],
            mdast::Node::InlineCode(code) => {
                vec![element("code", vec![Node::text(code.value.as_str())])]
            }
            mdast::Node::Emphasis(em) => vec![element("em", self.inline(&em.children))],
            mdast::Node::Strong(strong) => vec![element("strong", self.inline(&strong.children))],
            mdast::Node::Delete(del) => vec![element("del", self.inline(&del.children))],
            mdast::Node::Break(_) => vec![element("br", Vec::new()), Node::text("\n")],
            mdast::Node::Link(link) => vec![anchor(&link.url, link.title.as_deref(), self.inline(&link.children))],
            mdast::Node::Image(image) => vec![img(&image.url, &image.alt, image.title.as_deref())],
            mdast::Node::LinkReference(reference) => {
                let children = self.inline(&reference.children);
                match self.definitions.get(&reference.identifier) {
                    Some((url, title)) => vec![anchor(url, title.as_deref(), children)],
                    None => revert_reference(children),
                }
            }
            mdast::Node::ImageReference(reference) => {
                match self.definitions.get(&reference.identifier) {
                    Some((url, title)) => vec![img(url, &reference.alt, title.as_deref())],
                    None => vec![Node::text(format!("![{}]", reference.alt))],
                }
            }
            mdast::Node::Html(html) => {
                log::debug!("Keeping raw HTML as text: {}", html.value);
                vec![Node::text(html.value.as_str())]
            }
            mdast::Node::Definition(_) | mdast::Node::Yaml(_) | mdast::Node::Toml(_) => Vec::new(),
            other => {
                log::debug!("Dropping unsupported markdown node: {:?}", other);
                Vec::new()
            }
        }
    }

    fn list(&self, list: &mdast::List) -> Node {
        let loose = list.spread
            || list
                .children
                .iter()
                .any(|child| matches!(child, mdast::Node::ListItem(item) if item.spread));

        let items: Vec<Node> = list
            .children
            .iter()
            .map(|child| match child {
                mdast::Node::ListItem(item) => self.list_item(item, loose),
                other => element("li", self.node(other)),
            })
            .collect();

        let mut el = Element::new(if list.ordered { "ol" } else { "ul" });
        if let Some(start) = list.start.filter(|s| list.ordered && *s != 1) {
            el.properties
                .insert("start".to_string(), PropertyValue::Number(i64::from(start)));
        }
        if items.iter().any(|item| item.as_element().is_some_and(is_task_item)) {
            el.properties
                .insert("class".to_string(), "contains-task-list".into());
        }
        el.with_children(wrap(items, true)).into()
    }

    /// Tight items unwrap their paragraphs; loose items keep them.
    fn list_item(&self, item: &mdast::ListItem, loose: bool) -> Node {
        let mut children = Vec::new();
        if let Some(checked) = item.checked {
            children.push(
                Element::new("input")
                    .with_property("type", "checkbox")
                    .with_property("checked", checked)
                    .with_property("disabled", true)
                    .into(),
            );
            children.push(Node::text(" "));
        }

        if loose {
            children.extend(self.blocks(&item.children, true));
        } else {
            for (index, child) in item.children.iter().enumerate() {
                let is_paragraph = matches!(child, mdast::Node::Paragraph(_));
                if index > 0 || !is_paragraph {
                    push_merged(&mut children, Node::text("\n"));
                }
                match child {
                    mdast::Node::Paragraph(p) => {
                        for converted in self.inline(&p.children) {
                            push_merged(&mut children, converted);
                        }
                    }
                    other => children.extend(self.node(other)),
                }
            }
            if item
                .children
                .last()
                .is_some_and(|last| !matches!(last, mdast::Node::Paragraph(_)))
            {
                children.push(Node::text("\n"));
            }
        }

        let mut el = Element::new("li").with_children(children);
        if item.checked.is_some() {
            el.properties
                .insert("class".to_string(), "task-list-item".into());
        }
        el.into()
    }

    fn table(&self, table: &mdast::Table) -> Node {
        let mut rows = table.children.iter().filter_map(|row| match row {
            mdast::Node::TableRow(row) => Some(row),
            _ => None,
        });

        let mut sections = Vec::with_capacity(2);
        if let Some(head) = rows.next() {
            let tr = self.table_row(head, "th", &table.align);
            sections.push(element("thead", wrap(vec![tr], true)));
        }
        let body: Vec<Node> = rows
            .map(|row| self.table_row(row, "td", &table.align))
            .collect();
        if !body.is_empty() {
            sections.push(element("tbody", wrap(body, true)));
        }
        element("table", wrap(sections, true))
    }

    fn table_row(&self, row: &mdast::TableRow, cell_tag: &str, align: &[AlignKind]) -> Node {
        let cells: Vec<Node> = row
            .children
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| match cell {
                mdast::Node::TableCell(cell) => {
                    let mut el = Element::new(cell_tag).with_children(self.inline(&cell.children));
                    if let Some(value) = align.get(index).and_then(align_value) {
                        el.properties.insert("align".to_string(), value.into());
                    }
                    Some(el.into())
                }
                _ => None,
            })
            .collect();
        element("tr", wrap(cells, true))
    }
}

fn element(tag_name: impl Into<String>, children: Vec<Node>) -> Node {
    Node::element(tag_name, Properties::new(), children)
}

fn anchor(url: &str, title: Option<&str>, children: Vec<Node>) -> Node {
    let mut el = Element::new("a").with_property("href", url);
    if let Some(title) = title {
        el.properties.insert("title".to_string(), title.into());
    }
    el.with_children(children).into()
}

fn img(url: &str, alt: &str, title: Option<&str>) -> Node {
    let mut el = Element::new("img")
        .with_property("src", url)
        .with_property("alt", alt);
    if let Some(title) = title {
        el.properties.insert("title".to_string(), title.into());
    }
    el.into()
}

fn code_block(code: &mdast::Code) -> Node {
    let value = if code.value.is_empty() {
        String::new()
    } else {
        format!("{}\n", code.value)
    };
    let mut inner = Element::new("code").with_children(vec![Node::text(value)]);
    if let Some(lang) = code.lang.as_deref().filter(|l| !l.is_empty()) {
        inner
            .properties
            .insert("class".to_string(), format!("language-{lang}").into());
    }
    element("pre", vec![inner.into()])
}

fn revert_reference(children: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(children.len() + 2);
    push_merged(&mut out, Node::text("["));
    for child in children {
        push_merged(&mut out, child);
    }
    push_merged(&mut out, Node::text("]"));
    out
}

fn align_value(align: &AlignKind) -> Option<&'static str> {
    match align {
        AlignKind::Left => Some("left"),
        AlignKind::Right => Some("right"),
        AlignKind::Center => Some("center"),
        AlignKind::None => None,
    }
}

fn is_task_item(el: &Element) -> bool {
    el.property("class")
        .is_some_and(|class| class.tokens().contains(&"task-list-item"))
}

fn push_merged(out: &mut Vec<Node>, node: Node) {
    if let Node::Text(next) = &node
        && let Some(Node::Text(prev)) = out.last_mut()
    {
        prev.value.push_str(&next.value);
        return;
    }
    out.push(node);
}

fn wrap(nodes: Vec<Node>, loose: bool) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len() * 2 + 1);
    if loose {
        out.push(Node::text("\n"));
    }
    for (index, node) in nodes.into_iter().enumerate() {
        if index > 0 {
            out.push(Node::text("\n"));
        }
        out.push(node);
    }
    if loose && out.len() > 1 {
        out.push(Node::text("\n"));
    }
    out
}
