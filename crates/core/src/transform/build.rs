//! Builds the replacement callout subtree.

use crate::config::ResolvedConfig;
use crate::registry::Color;
use crate::tree::{Element, Node, Properties, PropertyValue};

use super::icon::{FOLD_ICON, materialize_icon};
use super::matcher::Collapsible;

pub(crate) mod class_names {
    pub const CONTAINER: &str = "callout";
    pub const TITLE: &str = "callout-title";
    pub const CONTENT: &str = "callout-content";
    pub const TITLE_ICON: &str = "callout-title-icon";
    pub const TITLE_TEXT: &str = "callout-title-text";
    pub const FOLD_ICON: &str = "callout-fold-icon";
}

const DETAILS_TAG: &str = "details";
const SUMMARY_TAG: &str = "summary";

/// Merges provider properties over a slot's default class.
///
/// A non-blank `class` (or hast-style `className`) from the provider replaces
/// the default class; otherwise the default applies. `class` always comes first.
pub(crate) fn merge_properties(provided: Properties, default_class: &str) -> Properties {
    let mut class: Option<PropertyValue> = None;
    let mut rest = Properties::with_capacity(provided.len());
    for (key, value) in provided {
        if key == "class" || key == "className" {
            if !value.is_blank() && class.is_none() {
                class = Some(value);
            }
        } else {
            rest.insert(key, value);
        }
    }

    let mut merged = Properties::with_capacity(rest.len() + 1);
    merged.insert(
        "class".to_string(),
        class.unwrap_or_else(|| default_class.into()),
    );
    merged.extend(rest);
    merged
}

/// Everything the builder needs from a normalized container.
#[derive(Debug)]
pub(crate) struct CalloutParts {
    pub canonical_type: String,
    pub collapsible: Collapsible,
    /// Inline title content; empty means "use the default title".
    pub title: Vec<Node>,
    /// Blocks after the (split) first block.
    pub content: Vec<Node>,
}

/// Assembles container, title row, and content wrapper.
///
/// Property providers receive the original, unmodified container.
pub(crate) fn build_callout(
    original: &Element,
    parts: CalloutParts,
    config: &ResolvedConfig,
) -> Node {
    let ty = parts.canonical_type.as_str();
    let tags = config.tags();
    let props = config.props();
    let collapsible = parts.collapsible.is_collapsible();

    let mut title_row = Vec::with_capacity(3);
    if config.show_indicator() {
        title_row.extend(materialize_icon(
            config.indicator(ty),
            &tags.title_icon,
            props.title_icon.provide(original, ty),
            class_names::TITLE_ICON,
        ));
    }

    let title_text = if parts.title.is_empty() {
        vec![Node::text(config.default_title(ty))]
    } else {
        parts.title
    };
    title_row.push(Node::element(
        tags.title_text.as_str(),
        merge_properties(props.title_text.provide(original, ty), class_names::TITLE_TEXT),
        title_text,
    ));

    if collapsible {
        title_row.extend(materialize_icon(
            Some(FOLD_ICON),
            &tags.fold_icon,
            props.fold_icon.provide(original, ty),
            class_names::FOLD_ICON,
        ));
    }

    let title = Node::element(
        if collapsible { SUMMARY_TAG } else { tags.title.as_str() },
        merge_properties(props.title.provide(original, ty), class_names::TITLE),
        title_row,
    );
    let content = Node::element(
        tags.content.as_str(),
        merge_properties(props.content.provide(original, ty), class_names::CONTENT),
        parts.content,
    );

    let mut properties =
        merge_properties(props.container.provide(original, ty), class_names::CONTAINER);
    if !properties.contains_key("style") {
        let color = config.callout(ty).and_then(|c| c.color.as_ref());
        properties.insert("style".to_string(), Color::css_variables(color).into());
    }
    for key in ["data-callout", "data-collapsible", "open"] {
        properties.shift_remove(key);
    }
    properties.insert("data-callout".to_string(), ty.into());
    properties.insert(
        "data-collapsible".to_string(),
        if collapsible { "true" } else { "false" }.into(),
    );
    if parts.collapsible == Collapsible::Open {
        properties.insert("open".to_string(), true.into());
    }

    Node::element(
        if collapsible { DETAILS_TAG } else { tags.container.as_str() },
        properties,
        vec![title, content],
    )
}
