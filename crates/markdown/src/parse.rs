//! Markdown parsing via markdown-rs.

use crate::error::{RenderError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};

/// Which markdown-rs constructs to enable.
///
/// Raw HTML is never enabled: HTML in the source stays literal text, so the
/// converted tree only ever holds elements this crate built.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable YAML frontmatter parsing (the block is dropped from output).
    pub frontmatter: bool,
    /// Enable indented code blocks.
    pub code_indented: bool,
}

impl ParseOptions {
    /// GFM with frontmatter and indented code.
    pub const fn gfm() -> Self {
        Self {
            gfm: true,
            frontmatter: true,
            code_indented: true,
        }
    }

    /// Plain CommonMark.
    pub const fn commonmark() -> Self {
        Self {
            gfm: false,
            frontmatter: false,
            code_indented: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            code_indented: self.code_indented,
            html_flow: false,
            html_text: false,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::gfm()
    }
}

/// Parse markdown into an mdast tree.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, RenderError> {
    markdown::to_mdast(input, &options.to_markdown()).map_err(|err| RenderError::Parse {
        message: err.reason.clone(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
