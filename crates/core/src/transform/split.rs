//! Title splitting for multi-line first blocks.

use crate::error::ShapeError;
use crate::tree::{Element, Node};

use super::{BREAK_TAG, PARAGRAPH_TAG};

/// Drops hard-break elements; a trailing double space after the title renders as one.
pub(crate) fn strip_line_breaks(children: &mut Vec<Node>) {
    children.retain(|child| !child.is_element(BREAK_TAG));
}

/// Index of the first text child containing a line break.
pub(crate) fn find_bordering_index(children: &[Node]) -> Option<usize> {
    children
        .iter()
        .position(|child| child.as_text().is_some_and(|value| value.contains('\n')))
}

/// Splits the first block of `blocks` at its first line break.
///
/// The first block keeps everything before the break and its own properties.
/// Whatever follows the break moves into a new paragraph inserted right after
/// it, even when nothing follows. A first block without a line break is left
/// alone.
pub(crate) fn split_first_block(blocks: &mut Vec<Node>) -> Result<(), ShapeError> {
    let first = blocks
        .first_mut()
        .ok_or(ShapeError::MissingFirstBlock)?
        .as_element_mut()
        .ok_or(ShapeError::ExpectedElement { index: 0 })?;

    strip_line_breaks(&mut first.children);

    let Some(index) = find_bordering_index(&first.children) else {
        return Ok(());
    };

    let mut rest = first.children.split_off(index);
    let bordering = rest.remove(0);
    let value = bordering
        .as_text()
        .ok_or(ShapeError::ExpectedText { index })?;
    let (prefix, suffix) = value.split_once('\n').unwrap_or((value, ""));

    if !prefix.is_empty() {
        first.children.push(Node::text(prefix));
    }

    let mut content = Vec::with_capacity(rest.len() + 1);
    if !suffix.is_empty() {
        content.push(Node::text(suffix));
    }
    content.extend(rest);

    blocks.insert(1, Element::new(PARAGRAPH_TAG).with_children(content).into());
    Ok(())
}

/// Concatenates the leading run of text children into the first one.
pub(crate) fn merge_leading_text(children: &mut Vec<Node>) {
    let run = children.iter().take_while(|child| child.is_text()).count();
    if run < 2 {
        return;
    }
    let merged: String = children
        .drain(..run)
        .filter_map(|child| match child {
            Node::Text(text) => Some(text.value),
            _ => None,
        })
        .collect();
    children.insert(0, Node::text(merged));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Element;
    use pretty_assertions::assert_eq;

    fn paragraph(children: Vec<Node>) -> Node {
        Element::new("p").with_children(children).into()
    }

    fn em(text: &str) -> Node {
        Element::new("em").with_children(vec![Node::text(text)]).into()
    }

    #[test]
    fn single_line_block_is_untouched() {
        let mut blocks = vec![paragraph(vec![Node::text("[!note] Title"), em("x")])];
        let before = blocks.clone();
        split_first_block(&mut blocks).unwrap();
        assert_eq!(blocks, before);
    }

    #[test]
    fn splits_title_line_from_body() {
        let mut blocks = vec![
            paragraph(vec![Node::text("[!note] Title\nRest of body"), em("more")]),
            paragraph(vec![Node::text("Second")]),
        ];
        split_first_block(&mut blocks).unwrap();
        assert_eq!(
            blocks,
            vec![
                paragraph(vec![Node::text("[!note] Title")]),
                paragraph(vec![Node::text("Rest of body"), em("more")]),
                paragraph(vec![Node::text("Second")]),
            ]
        );
    }

    #[test]
    fn keeps_inline_nodes_before_the_break() {
        let mut blocks = vec![paragraph(vec![
            Node::text("[!note] A "),
            em("b"),
            Node::text(" c\nd"),
        ])];
        split_first_block(&mut blocks).unwrap();
        assert_eq!(
            blocks,
            vec![
                paragraph(vec![Node::text("[!note] A "), em("b"), Node::text(" c")]),
                paragraph(vec![Node::text("d")]),
            ]
        );
    }

    #[test]
    fn hard_break_after_title_is_removed() {
        let mut blocks = vec![paragraph(vec![
            Node::text("[!tip] Title"),
            Element::new("br").into(),
            Node::text("\nBody"),
        ])];
        split_first_block(&mut blocks).unwrap();
        assert_eq!(
            blocks,
            vec![
                paragraph(vec![Node::text("[!tip] Title")]),
                paragraph(vec![Node::text("Body")]),
            ]
        );
    }

    #[test]
    fn empty_remainder_still_adds_paragraph() {
        let mut blocks = vec![paragraph(vec![Node::text("[!tip] Title\n")])];
        split_first_block(&mut blocks).unwrap();
        assert_eq!(
            blocks,
            vec![paragraph(vec![Node::text("[!tip] Title")]), paragraph(vec![])]
        );
    }

    #[test]
    fn shape_errors() {
        assert_eq!(
            split_first_block(&mut Vec::new()),
            Err(ShapeError::MissingFirstBlock)
        );
        assert_eq!(
            split_first_block(&mut vec![Node::text("x")]),
            Err(ShapeError::ExpectedElement { index: 0 })
        );
    }

    #[test]
    fn bordering_index() {
        let children = vec![Node::text("a"), em("b\n"), Node::text("c\nd")];
        assert_eq!(find_bordering_index(&children), Some(2));
        assert_eq!(find_bordering_index(&children[..2]), None);
    }

    #[test]
    fn merges_only_the_leading_text_run() {
        let mut children = vec![
            Node::text("[!"),
            Node::text("note] "),
            Node::text("Title"),
            em("x"),
            Node::text("a"),
            Node::text("b"),
        ];
        merge_leading_text(&mut children);
        assert_eq!(
            children,
            vec![
                Node::text("[!note] Title"),
                em("x"),
                Node::text("a"),
                Node::text("b"),
            ]
        );

        let mut single = vec![Node::text("x"), em("y")];
        merge_leading_text(&mut single);
        assert_eq!(single, vec![Node::text("x"), em("y")]);
    }
}
