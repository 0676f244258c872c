//! Convert a Node tree into the block AST
//!
//! Locates the editor's content container, walks its block elements in
//! document order and classifies each one.

use longform_core::{Block, Document};

use crate::extract::extract_inlines;
use crate::node::Node;
use crate::rules::Rules;
use crate::service::ExtractOptions;

/// Attribute marking the editor's content root
pub const CONTENTS_ATTR: &str = "data-contents";

/// Attribute marking a content block
pub const BLOCK_ATTR: &str = "data-block";

/// Class of the generic wrapper used when no content root is marked
pub const CONTAINER_CLASS: &str = "container";

/// Result of walking one tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Non-blank classified blocks, in document order
    pub document: Document,
    /// Number of block elements found, blank ones included
    pub blocks_found: usize,
}

/// Find the element holding the content blocks.
///
/// Tries the `data-contents="true"` root, then a `.container` element, then
/// `<body>`, and finally falls back to `root` itself.
pub fn find_container(root: &Node) -> &Node {
    if let Some(node) = root.find(|n| n.attr_is(CONTENTS_ATTR, "true")) {
        return node;
    }

    log::warn!("no [{}=\"true\"] content root, trying fallbacks", CONTENTS_ATTR);

    root.find(|n| n.has_class(CONTAINER_CLASS))
        .or_else(|| root.find(|n| n.tag_name() == "body"))
        .unwrap_or(root)
}

/// Block elements below `container`, in document order
pub fn find_blocks(container: &Node) -> impl Iterator<Item = &Node> {
    container
        .descendant_elements()
        .filter(|n| n.attr_is(BLOCK_ATTR, "true"))
}

/// Convert a Node tree into classified blocks
pub fn convert(root: &Node, rules: &Rules, options: &ExtractOptions) -> Extraction {
    let container = find_container(root);
    let mut extraction = Extraction::default();

    for node in find_blocks(container) {
        extraction.blocks_found += 1;

        let content = extract_inlines(node, options);
        if content.is_empty() {
            log::debug!("skipping blank <{}> block", node.tag_name());
            continue;
        }

        let kind = rules.classify(node, options);
        log::debug!("classified <{}> block as {:?}", node.tag_name(), kind);
        extraction.document.blocks.push(Block::new(kind, content));
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use longform_core::{BlockKind, Inline, ListKind};

    fn block(class: &str, text: &str) -> Node {
        Node::element_with_attrs("div", vec![(BLOCK_ATTR, "true"), ("class", class)])
            .with_child(Node::element("span").with_child(Node::text(text)))
    }

    fn contents(children: Vec<Node>) -> Node {
        children.into_iter().fold(
            Node::element_with_attrs("div", vec![(CONTENTS_ATTR, "true")]),
            Node::with_child,
        )
    }

    #[test]
    fn test_contents_root_preferred() {
        let tree = Node::element("body")
            .with_child(Node::element_with_attrs("div", vec![("class", "container")]))
            .with_child(contents(vec![]));
        assert!(find_container(&tree).attr_is(CONTENTS_ATTR, "true"));
    }

    #[test]
    fn test_container_class_fallback() {
        let tree = Node::element("body")
            .with_child(block("longform-unstyled", "outside"))
            .with_child(
                Node::element_with_attrs("main", vec![("class", "page container")])
                    .with_child(block("longform-unstyled", "inside")),
            );
        let extraction = convert(&tree, &Rules::new(), &ExtractOptions::default());
        assert_eq!(extraction.blocks_found, 1);
        assert_eq!(extraction.document.blocks[0].plain_text(), "inside");
    }

    #[test]
    fn test_body_fallback() {
        let tree = Node::document().with_child(
            Node::element("html")
                .with_child(Node::element("head"))
                .with_child(Node::element("body").with_child(block("longform-unstyled", "x"))),
        );
        assert_eq!(find_container(&tree).tag_name(), "body");
    }

    #[test]
    fn test_root_fallback() {
        let tree = Node::element("div").with_child(block("longform-unstyled", "x"));
        assert_eq!(find_container(&tree).tag_name(), "div");
        let extraction = convert(&tree, &Rules::new(), &ExtractOptions::default());
        assert_eq!(extraction.document.blocks.len(), 1);
    }

    #[test]
    fn test_blank_blocks_counted_not_emitted() {
        let tree = contents(vec![
            block("longform-ordered-list-item", "One"),
            block("longform-unstyled", "   "),
            block("longform-ordered-list-item", "Two"),
        ]);
        let extraction = convert(&tree, &Rules::new(), &ExtractOptions::default());
        assert_eq!(extraction.blocks_found, 3);
        assert_eq!(
            extraction.document.blocks,
            vec![
                Block::text(BlockKind::ListItem(ListKind::Ordered), "One"),
                Block::text(BlockKind::ListItem(ListKind::Ordered), "Two"),
            ]
        );
    }

    #[test]
    fn test_block_attribute_must_be_true() {
        let tree = contents(vec![
            Node::element_with_attrs("div", vec![(BLOCK_ATTR, "false")])
                .with_child(Node::text("no")),
            block("longform-unstyled", "yes"),
        ]);
        let extraction = convert(&tree, &Rules::new(), &ExtractOptions::default());
        assert_eq!(extraction.blocks_found, 1);
        assert_eq!(
            extraction.document.blocks[0].content,
            vec![Inline::Text("yes".to_string())]
        );
    }

    #[test]
    fn test_nested_blocks_in_document_order() {
        let outer =
            block("longform-blockquote", "outer").with_child(block("longform-unstyled", "inner"));
        let tree = contents(vec![outer]);
        let extraction = convert(&tree, &Rules::new(), &ExtractOptions::default());
        let kinds: Vec<&BlockKind> = extraction.document.blocks.iter().map(|b| &b.kind).collect();
        assert_eq!(kinds, vec![&BlockKind::BlockQuote, &BlockKind::Paragraph]);
        assert_eq!(extraction.document.blocks[0].plain_text(), "outerinner");
    }
}
