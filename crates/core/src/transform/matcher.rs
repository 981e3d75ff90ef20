//! Recognizes the `[!type][flag] title` marker at the start of a quote container.

use crate::config::ResolvedConfig;
use crate::tree::{Element, Node};
use once_cell::sync::Lazy;
use regex::Regex;

use super::PARAGRAPH_TAG;

static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[!(?P<type>[A-Za-z0-9_]+)\](?P<flag>[+-]?)[ \t]*(?P<title>[^\n]*)")
        .expect("marker pattern is valid")
});

/// Whether and how a callout folds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collapsible {
    /// No flag: a plain, always-visible callout.
    #[default]
    No,
    /// `+`: collapsible, open by default.
    Open,
    /// `-`: collapsible, closed by default.
    Closed,
}

impl Collapsible {
    /// Maps the marker flag (`+`, `-`, or empty) to a fold state.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "+" => Collapsible::Open,
            "-" => Collapsible::Closed,
            _ => Collapsible::No,
        }
    }

    /// The marker flag for this state.
    pub fn flag(self) -> &'static str {
        match self {
            Collapsible::No => "",
            Collapsible::Open => "+",
            Collapsible::Closed => "-",
        }
    }

    /// Returns true for `+` and `-`.
    pub fn is_collapsible(self) -> bool {
        !matches!(self, Collapsible::No)
    }
}

/// Result of matching a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutMatch {
    /// Written type, lowercased (before alias resolution).
    pub callout_type: String,
    /// Fold state from the flag.
    pub collapsible: Collapsible,
    /// Inline title on the marker line; empty when none was given.
    pub title: String,
}

/// Matches the marker at the very start of `text`.
///
/// Only the marker line is considered: the title stops at the first line break
/// and trailing whitespace is trimmed.
pub fn parse_marker(text: &str) -> Option<CalloutMatch> {
    match_marker(text).map(|(marker, _)| marker)
}

/// Like [`parse_marker`], also returning the untrimmed rest of the marker line.
///
/// The untrimmed form keeps the space before inline content that follows the
/// title text in the same block.
pub(crate) fn match_marker(text: &str) -> Option<(CalloutMatch, &str)> {
    let caps = MARKER.captures(text)?;
    let raw_title = caps.name("title").map_or("", |m| m.as_str());
    let marker = CalloutMatch {
        callout_type: caps.name("type")?.as_str().to_lowercase(),
        collapsible: Collapsible::from_flag(caps.name("flag").map_or("", |m| m.as_str())),
        title: raw_title.trim_end().to_string(),
    };
    Some((marker, raw_title))
}

/// Text children made only of line breaks, left between blocks by markdown-to-tree conversion.
pub(crate) fn is_newline_artifact(node: &Node) -> bool {
    node.as_text()
        .is_some_and(|value| !value.is_empty() && value.chars().all(|c| c == '\n'))
}

/// A container that passed every precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Detection {
    pub canonical_type: String,
    pub marker: CalloutMatch,
}

/// Checks the preconditions in order and stops at the first failure.
pub(crate) fn detect(container: &Element, config: &ResolvedConfig) -> Option<Detection> {
    let first_block = container
        .children
        .iter()
        .find(|child| !is_newline_artifact(child))?;

    let Some(paragraph) = first_block.as_element().filter(|el| el.is(PARAGRAPH_TAG)) else {
        log::debug!("Skipping quote: first block is not a paragraph");
        return None;
    };

    let leading = paragraph.children.first()?.as_text()?;
    let marker = parse_marker(leading)?;

    let Some(canonical_type) = config.canonical_type(&marker.callout_type) else {
        log::debug!(
            "Skipping quote: '{}' is neither a callout type nor an alias",
            marker.callout_type
        );
        return None;
    };

    Some(Detection {
        canonical_type,
        marker,
    })
}
