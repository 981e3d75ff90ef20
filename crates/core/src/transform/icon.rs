//! Turns icon markup into wrapped tree fragments.

use crate::svg;
use crate::tree::{Element, Node, Properties};

use super::build::merge_properties;

/// Chevron shown on collapsible callouts.
pub const FOLD_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"/></svg>"#;

/// Parses `markup` and wraps it in a decorative `tag` element.
///
/// Returns `None` for absent or blank markup, and for markup that does not
/// parse (logged, the callout is still rendered without the icon).
pub(crate) fn materialize_icon(
    markup: Option<&str>,
    tag: &str,
    properties: Properties,
    default_class: &str,
) -> Option<Node> {
    let markup = markup.map(str::trim).filter(|m| !m.is_empty())?;
    let children = match svg::parse_fragment(markup) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("Skipping callout icon: {err}");
            return None;
        }
    };

    let mut properties = merge_properties(properties, default_class);
    properties.insert("aria-hidden".to_string(), "true".into());
    Some(
        Element::new(tag)
            .with_properties(properties)
            .with_children(children)
            .into(),
    )
}
