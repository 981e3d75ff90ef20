//! Markdown → tree → callouts → HTML.

use crate::convert::mdast_to_tree;
use crate::error::RenderError;
use crate::parse::{ParseOptions, parse_mdast};
use callouts_core::{Callouts, Node, ResolvedConfig, TreeTransform, to_html};
use serde::Serialize;

/// Rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    /// Serialized HTML.
    pub html: String,
    /// Number of callouts produced.
    pub callouts: usize,
}

/// Parses markdown into the generic tree, before any callout rewriting.
pub fn markdown_to_tree(input: &str, options: &ParseOptions) -> Result<Node, RenderError> {
    let mdast = parse_mdast(input, options)?;
    Ok(mdast_to_tree(&mdast))
}

/// Renders markdown with GFM defaults.
pub fn render_markdown(input: &str, config: &ResolvedConfig) -> Result<RenderOutput, RenderError> {
    render_markdown_with_options(input, config, &ParseOptions::default())
}

/// Renders markdown with explicit parse options.
pub fn render_markdown_with_options(
    input: &str,
    config: &ResolvedConfig,
    options: &ParseOptions,
) -> Result<RenderOutput, RenderError> {
    let mut tree = markdown_to_tree(input, options)?;
    let callouts = callouts_core::rewrite_tree(&mut tree, config);
    Ok(RenderOutput {
        html: to_html(&tree),
        callouts,
    })
}

/// Reusable renderer: the callout pass followed by any extra tree passes.
pub struct Pipeline {
    options: ParseOptions,
    callouts: Callouts,
    transforms: Vec<Box<dyn TreeTransform + Send + Sync>>,
}

impl Pipeline {
    /// Create a pipeline for an already resolved configuration.
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            options: ParseOptions::default(),
            callouts: Callouts::from_config(config),
            transforms: Vec::new(),
        }
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a pass that runs after callouts have been rewritten.
    pub fn add_transform<T: TreeTransform + Send + Sync + 'static>(&mut self, transform: T) {
        self.transforms.push(Box::new(transform));
    }

    /// Render one document.
    pub fn render(&self, input: &str) -> Result<RenderOutput, RenderError> {
        let mut tree = markdown_to_tree(input, &self.options)?;
        let callouts = self.callouts.apply(&mut tree);
        for transform in &self.transforms {
            transform.transform(&mut tree);
        }
        Ok(RenderOutput {
            html: to_html(&tree),
            callouts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callouts_core::{Element, Theme};

    #[test]
    fn plain_markdown_has_no_callouts() {
        let output = render_markdown("> quoted\n", &ResolvedConfig::default()).unwrap();
        assert_eq!(output.callouts, 0);
        assert_eq!(output.html, "<blockquote>\n<p>quoted</p>\n</blockquote>");
    }

    #[test]
    fn markdown_to_tree_leaves_quotes_alone() {
        let tree = markdown_to_tree("> [!note]\n", &ParseOptions::default()).unwrap();
        assert!(tree.children().unwrap()[0].is_element("blockquote"));
    }

    #[test]
    fn pipeline_runs_extra_passes_after_callouts() {
        let mut pipeline = Pipeline::new(ResolvedConfig::from_theme(Theme::Vitepress));
        pipeline.add_transform(|root: &mut Node| {
            if let Some(children) = root.children_mut() {
                children.push(Element::new("hr").into());
            }
        });
        let output = pipeline.render("> [!tip]\n").unwrap();
        assert_eq!(output.callouts, 1);
        assert!(output.html.starts_with("<div class=\"callout\""));
        assert!(output.html.ends_with("<hr>"));
    }

    #[test]
    fn output_serializes_camel_case() {
        let output = RenderOutput {
            html: "<p>x</p>".into(),
            callouts: 0,
        };
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"html":"<p>x</p>","callouts":0}"#
        );
    }
}
