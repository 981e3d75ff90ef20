//! Detection and rewrite of callout quote containers.
//!
//! [`transform_container`] is the per-node entry point: it returns the
//! replacement subtree for a matching `blockquote`, or `None` to leave the node
//! as it is. [`rewrite_tree`] drives it over a whole document.

mod build;
mod icon;
mod matcher;
mod split;

pub use icon::FOLD_ICON;
pub use matcher::{CalloutMatch, Collapsible, parse_marker};

use crate::config::{ResolvedConfig, UserOptions};
use crate::error::ShapeError;
use crate::tree::{Element, Node};
use build::{CalloutParts, build_callout};
use matcher::{detect, is_newline_artifact, match_marker};
use split::{merge_leading_text, split_first_block};

pub(crate) const QUOTE_TAG: &str = "blockquote";
pub(crate) const PARAGRAPH_TAG: &str = "p";
pub(crate) const BREAK_TAG: &str = "br";

/// Returns the callout subtree replacing `node`, or `None` when `node` is not
/// a callout. Never fails: a container whose shape turns out wrong midway is
/// left unmodified.
pub fn transform_container(node: &Node, config: &ResolvedConfig) -> Option<Node> {
    let container = node.as_element().filter(|el| el.is(QUOTE_TAG))?;
    let detection = detect(container, config)?;

    match rewrite(container, config) {
        Ok((replacement, collapsible)) => {
            log::debug!(
                "Rewrote quote as '{}' callout (flag '{}')",
                detection.canonical_type,
                collapsible.flag()
            );
            Some(replacement)
        }
        Err(err) => {
            log::warn!(
                "Leaving '{}' callout unmodified: {err}",
                detection.canonical_type
            );
            None
        }
    }
}

/// Builds the replacement along with the fold state read from the merged marker text.
fn rewrite(
    container: &Element,
    config: &ResolvedConfig,
) -> Result<(Node, Collapsible), ShapeError> {
    let mut blocks: Vec<Node> = container
        .children
        .iter()
        .filter(|child| !is_newline_artifact(child))
        .cloned()
        .collect();
    split_first_block(&mut blocks)?;

    let content = blocks.split_off(1);
    let Some(Node::Element(mut title_block)) = blocks.pop() else {
        return Err(ShapeError::ExpectedElement { index: 0 });
    };

    merge_leading_text(&mut title_block.children);
    let leading = title_block
        .children
        .first()
        .and_then(Node::as_text)
        .ok_or(ShapeError::ExpectedText { index: 0 })?;
    let (marker, raw_title) = match_marker(leading).ok_or(ShapeError::MarkerVanished)?;
    let canonical_type = config
        .canonical_type(&marker.callout_type)
        .ok_or(ShapeError::MarkerVanished)?;

    let title = if title_block.children.len() > 1 {
        raw_title.to_string()
    } else {
        marker.title
    };
    if title.is_empty() {
        title_block.children.remove(0);
    } else {
        title_block.children[0] = Node::text(title);
    }

    let collapsible = marker.collapsible;
    let replacement = build_callout(
        container,
        CalloutParts {
            canonical_type,
            collapsible,
            title: title_block.children,
            content,
        },
        config,
    );
    Ok((replacement, collapsible))
}

/// Rewrites every callout in `root`, pre-order, and returns how many were produced.
///
/// After a container is replaced the walk continues into the replacement, so
/// quotes nested in callout content become callouts too.
pub fn rewrite_tree(root: &mut Node, config: &ResolvedConfig) -> usize {
    let mut count = 0;
    if let Some(replacement) = transform_container(root, config) {
        *root = replacement;
        count += 1;
    }
    if let Some(children) = root.children_mut() {
        for child in children {
            count += rewrite_tree(child, config);
        }
    }
    count
}

/// A whole-document pass over the generic tree.
pub trait TreeTransform {
    /// Applies the pass to `root` in place.
    fn transform(&self, root: &mut Node);
}

impl<F> TreeTransform for F
where
    F: Fn(&mut Node),
{
    fn transform(&self, root: &mut Node) {
        self(root)
    }
}

/// The callout pass: resolves options once and rewrites every document it is given.
#[derive(Debug, Clone, Default)]
pub struct Callouts {
    config: ResolvedConfig,
}

impl Callouts {
    /// Resolves `options` leniently (see [`ResolvedConfig::resolve`]).
    pub fn new(options: Option<&UserOptions>) -> Self {
        Self::from_config(ResolvedConfig::resolve(options))
    }

    /// Uses an already resolved configuration.
    pub fn from_config(config: ResolvedConfig) -> Self {
        Self { config }
    }

    /// Resolved configuration shared by every rewrite.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Rewrites `root` and returns the number of callouts produced.
    pub fn apply(&self, root: &mut Node) -> usize {
        rewrite_tree(root, &self.config)
    }
}

impl TreeTransform for Callouts {
    fn transform(&self, root: &mut Node) {
        self.apply(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::to_html;
    use crate::tree::PropertyValue;
    use pretty_assertions::assert_eq;

    fn quote(children: Vec<Node>) -> Node {
        Element::new("blockquote").with_children(children).into()
    }

    fn paragraph(children: Vec<Node>) -> Node {
        Element::new("p").with_children(children).into()
    }

    fn github() -> ResolvedConfig {
        ResolvedConfig::resolve(Some(&UserOptions {
            theme: Some("github".into()),
            show_indicator: Some(false),
            ..Default::default()
        }))
    }

    fn title_text(callout: &Node) -> String {
        let title = &callout.children().unwrap()[0];
        title
            .children()
            .unwrap()
            .iter()
            .find(|n| {
                n.as_element()
                    .and_then(|el| el.property("class"))
                    .is_some_and(|c| c == &PropertyValue::from("callout-title-text"))
            })
            .map(Node::text_content)
            .unwrap_or_default()
    }

    #[test]
    fn non_matching_quotes_are_left_alone() {
        let config = github();
        let inputs = vec![
            quote(vec![]),
            quote(vec![Node::text("\n")]),
            quote(vec![paragraph(vec![Node::text("Just a quote")])]),
            quote(vec![paragraph(vec![Node::text("[!bogus] X")])]),
            quote(vec![paragraph(vec![Node::text("Intro [!note]")])]),
            paragraph(vec![Node::text("[!note] Not in a quote")]),
        ];
        for input in inputs {
            let mut tree = Node::Root(vec![input.clone()]);
            assert_eq!(rewrite_tree(&mut tree, &config), 0);
            assert_eq!(tree, Node::Root(vec![input]));
        }
    }

    #[test]
    fn closed_collapsible_end_to_end() {
        let config = github();
        let node = quote(vec![
            Node::text("\n"),
            paragraph(vec![Node::text("[!tip]- Click")]),
            Node::text("\n"),
            paragraph(vec![Node::text("Hidden")]),
            Node::text("\n"),
        ]);
        let callout = transform_container(&node, &config).unwrap();
        assert_eq!(
            to_html(&callout),
            concat!(
                r#"<details class="callout" style="--callout-color-light: #1a7f37; --callout-color-dark: #3fb950;" data-callout="tip" data-collapsible="true">"#,
                r#"<summary class="callout-title"><div class="callout-title-text">Click</div>"#,
                r#"<div class="callout-fold-icon" aria-hidden="true"><svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"></path></svg></div>"#,
                "</summary>",
                r#"<div class="callout-content"><p>Hidden</p></div>"#,
                "</details>"
            )
        );
    }

    #[test]
    fn alias_records_canonical_type() {
        let config = ResolvedConfig::resolve(Some(&UserOptions {
            theme: Some("github".into()),
            aliases: [("note".to_string(), vec!["memo".to_string()])]
                .into_iter()
                .collect(),
            ..Default::default()
        }));
        let node = quote(vec![paragraph(vec![Node::text("[!MEMO]")])]);
        let callout = transform_container(&node, &config).unwrap();
        let el = callout.as_element().unwrap();
        assert_eq!(el.property("data-callout"), Some(&PropertyValue::from("note")));
        assert_eq!(title_text(&callout), "Note");

        let direct = quote(vec![paragraph(vec![Node::text("[!Warning]")])]);
        let callout = transform_container(&direct, &config).unwrap();
        assert_eq!(
            callout.as_element().unwrap().property("data-callout"),
            Some(&PropertyValue::from("warning"))
        );
    }

    #[test]
    fn collapsibility_flags() {
        let config = github();
        let open = transform_container(&quote(vec![paragraph(vec![Node::text("[!note]+")])]), &config)
            .unwrap();
        let open = open.as_element().unwrap();
        assert_eq!(open.tag_name, "details");
        assert_eq!(open.property("open"), Some(&PropertyValue::Bool(true)));

        let plain = transform_container(&quote(vec![paragraph(vec![Node::text("[!note]")])]), &config)
            .unwrap();
        let plain = plain.as_element().unwrap();
        assert_eq!(plain.tag_name, "div");
        assert_eq!(plain.property("open"), None);
        assert_eq!(plain.property("data-collapsible"), Some(&PropertyValue::from("false")));
    }

    #[test]
    fn title_precedence() {
        let mut options = UserOptions {
            theme: Some("github".into()),
            ..Default::default()
        };
        options.callouts.insert(
            "note".into(),
            crate::registry::CalloutConfig {
                title: Some("Heads up".into()),
                ..Default::default()
            },
        );
        let config = ResolvedConfig::resolve(Some(&options));

        let inline = quote(vec![paragraph(vec![Node::text("[!note] Mine")])]);
        assert_eq!(title_text(&transform_container(&inline, &config).unwrap()), "Mine");

        let configured = quote(vec![paragraph(vec![Node::text("[!note]")])]);
        assert_eq!(
            title_text(&transform_container(&configured, &config).unwrap()),
            "Heads up"
        );

        let vitepress = ResolvedConfig::from_theme(crate::registry::Theme::Vitepress);
        assert_eq!(
            title_text(&transform_container(&configured, &vitepress).unwrap()),
            "NOTE"
        );
    }

    #[test]
    fn multi_line_first_block_is_split() {
        let config = github();
        let node = quote(vec![
            paragraph(vec![Node::text("[!note] Title\nRest of body")]),
            Node::text("\n"),
            paragraph(vec![Node::text("More")]),
        ]);
        let callout = transform_container(&node, &config).unwrap();
        assert_eq!(title_text(&callout), "Title");
        let content = callout.children().unwrap()[1].as_element().unwrap();
        assert_eq!(
            content.children,
            vec![
                paragraph(vec![Node::text("Rest of body")]),
                paragraph(vec![Node::text("More")]),
            ]
        );
    }

    #[test]
    fn marker_without_title_and_body_on_next_line() {
        let config = github();
        let node = quote(vec![paragraph(vec![Node::text("[!caution]\nDon't.")])]);
        let callout = transform_container(&node, &config).unwrap();
        assert_eq!(title_text(&callout), "Caution");
        assert_eq!(callout.children().unwrap()[1].text_content(), "Don't.");
    }

    #[test]
    fn inline_markup_in_title_is_kept() {
        let config = github();
        let node = quote(vec![paragraph(vec![
            Node::text("[!note] Read "),
            Element::new("em")
                .with_children(vec![Node::text("this")])
                .into(),
        ])]);
        let callout = transform_container(&node, &config).unwrap();
        let title = callout.children().unwrap()[0].children().unwrap()[0].clone();
        assert_eq!(
            to_html(&title),
            r#"<div class="callout-title-text">Read <em>this</em></div>"#
        );
    }

    #[test]
    fn fragmented_marker_text_is_merged() {
        let config = github();
        let node = quote(vec![paragraph(vec![
            Node::text("[!note"),
            Node::text("] Split"),
        ])]);
        // The leading run must already match on its own to be detected.
        assert_eq!(transform_container(&node, &config), None);

        let node = quote(vec![paragraph(vec![
            Node::text("[!note] Sp"),
            Node::text("lit"),
        ])]);
        let callout = transform_container(&node, &config).unwrap();
        assert_eq!(title_text(&callout), "Split");
    }

    #[test]
    fn flag_is_read_after_merging_fragments() {
        let config = github();
        let node = quote(vec![paragraph(vec![
            Node::text("[!note]"),
            Node::text("- Folded"),
        ])]);
        let (callout, collapsible) = rewrite(node.as_element().unwrap(), &config).unwrap();
        assert_eq!(collapsible, Collapsible::Closed);
        assert!(callout.is_element("details"));
        assert_eq!(title_text(&callout), "Folded");
    }

    #[test]
    fn trailing_line_break_leaves_empty_content_paragraph() {
        let config = ResolvedConfig::from_theme(crate::registry::Theme::Vitepress);
        let node = quote(vec![paragraph(vec![Node::text("[!tip] T\n")])]);
        let callout = transform_container(&node, &config).unwrap();
        assert!(
            to_html(&callout)
                .ends_with(r#"<div class="callout-content"><p></p></div></div>"#)
        );
    }

    #[test]
    fn nested_callouts_are_rewritten() {
        let config = github();
        let inner = quote(vec![paragraph(vec![Node::text("[!warning] Inner")])]);
        let outer = quote(vec![
            paragraph(vec![Node::text("[!note] Outer")]),
            inner,
        ]);
        let mut tree = Node::Root(vec![outer]);
        assert_eq!(rewrite_tree(&mut tree, &config), 2);

        let outer = &tree.children().unwrap()[0];
        let content = &outer.children().unwrap()[1];
        let inner = &content.children().unwrap()[0];
        assert_eq!(
            inner.as_element().unwrap().property("data-callout"),
            Some(&PropertyValue::from("warning"))
        );
    }

    #[test]
    fn callouts_pass_and_closures_share_the_trait() {
        let callouts = Callouts::new(Some(&UserOptions {
            theme: Some("github".into()),
            ..Default::default()
        }));
        let mut tree = Node::Root(vec![quote(vec![paragraph(vec![Node::text("[!tip]")])])]);
        let passes: Vec<Box<dyn TreeTransform>> = vec![
            Box::new(callouts),
            Box::new(|root: &mut Node| {
                if let Some(children) = root.children_mut() {
                    children.push(Node::text("done"));
                }
            }),
        ];
        for pass in &passes {
            pass.transform(&mut tree);
        }
        let children = tree.children().unwrap();
        assert!(children[0].is_element("div"));
        assert_eq!(children[1], Node::text("done"));
    }
}
