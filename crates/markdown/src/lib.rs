#![deny(missing_docs)]
//! Markdown front end for callouts: parses with markdown-rs, converts mdast
//! into the callouts tree, rewrites `[!type]` quotes, and serializes HTML.

/// Batch rendering across a thread pool.
pub mod batch;
/// mdast → tree conversion.
pub mod convert;
/// Error types for rendering.
pub mod error;
/// markdown-rs parse options.
pub mod parse;
/// Single-document rendering.
pub mod render;

pub use batch::{
    BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats, render_batch,
};
pub use convert::mdast_to_tree;
pub use error::{RenderError, SourceLocation};
pub use parse::{ParseOptions, parse_mdast};
pub use render::{
    Pipeline, RenderOutput, markdown_to_tree, render_markdown, render_markdown_with_options,
};

pub use callouts_core::{ResolvedConfig, UserOptions};
