#![deny(missing_docs)]
//! Callouts core: detects `[!type]` markers in quoted blocks and rewrites them
//! into themed, optionally collapsible callout trees.

/// Options, alias resolution, and the immutable resolved configuration.
pub mod config;
/// Core error types.
pub mod error;
/// HTML serialization of the generic tree.
pub mod html;
/// Built-in themes and per-type callout defaults.
pub mod registry;
/// SVG markup to tree fragment parsing.
pub mod svg;
/// Callout detection, title splitting, and subtree construction.
pub mod transform;
/// Generic element/text tree the engine operates on.
pub mod tree;

pub use config::{
    AliasMap, PropertyProvider, PropertyProviders, PropsConfig, ResolvedConfig, TagNames,
    TagsConfig, UserOptions,
};
pub use error::{CalloutError, ShapeError};
pub use html::{nodes_to_html, to_html};
pub use registry::{CalloutConfig, Color, Theme};
pub use transform::{
    CalloutMatch, Callouts, Collapsible, TreeTransform, parse_marker, rewrite_tree,
    transform_container,
};
pub use tree::{Element, Node, Properties, PropertyValue};
