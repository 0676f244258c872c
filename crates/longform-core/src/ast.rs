//! Block Abstract Syntax Tree
//!
//! This module defines the classified blocks produced from editor markup.
//! The AST is the intermediate format between DOM classification and
//! HTML serialization.

/// List container kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Numbered list (`<ol>`)
    Ordered,
    /// Bulleted list (`<ul>`)
    Unordered,
}

impl ListKind {
    /// Tag name of the enclosing list element
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// Semantic classification of one content block
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Second-level heading (`<h2>`)
    Heading2,
    /// Third-level heading (`<h3>`)
    Heading3,
    /// Quotation (`<blockquote>`)
    BlockQuote,
    /// Plain paragraph (`<p>`)
    Paragraph,
    /// Horizontal rule (`<hr>`), content is never emitted
    Separator,
    /// List item, merged into a list container of the given kind
    ListItem(ListKind),
    /// Anything else, emitted under the given tag name
    Container(String),
}

impl BlockKind {
    /// Output tag name for this block
    pub fn tag(&self) -> &str {
        match self {
            BlockKind::Heading2 => "h2",
            BlockKind::Heading3 => "h3",
            BlockKind::BlockQuote => "blockquote",
            BlockKind::Paragraph => "p",
            BlockKind::Separator => "hr",
            BlockKind::ListItem(_) => "li",
            BlockKind::Container(tag) => tag,
        }
    }

    /// List kind, if this block belongs inside a list
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            BlockKind::ListItem(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Whitespace as browsers see it: Unicode whitespace plus U+FEFF
fn is_html_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Inline content of a block. Text is stored unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Hyperlink with its flattened text
    Link { href: String, text: String },
}

impl Inline {
    /// Check if this inline has no visible text
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) | Inline::Link { text, .. } => {
                text.trim_matches(is_html_whitespace).is_empty()
            }
        }
    }

    /// Visible text of this inline
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) => text,
            Inline::Link { text, .. } => text,
        }
    }
}

/// A classified content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: Vec<Inline>,
}

impl Block {
    pub fn new(kind: BlockKind, content: Vec<Inline>) -> Self {
        Self { kind, content }
    }

    /// Convenience constructor for a block holding a single text run
    pub fn text(kind: BlockKind, text: &str) -> Self {
        Self {
            kind,
            content: vec![Inline::Text(text.to_string())],
        }
    }

    /// Blocks without visible text are never serialized
    pub fn is_blank(&self) -> bool {
        self.content.iter().all(|i| i.is_blank())
    }

    /// Flattened visible text
    pub fn plain_text(&self) -> String {
        self.content.iter().map(|i| i.text()).collect()
    }
}

/// Ordered sequence of blocks from one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// True when no block has visible text
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_tags() {
        assert_eq!(BlockKind::Heading2.tag(), "h2");
        assert_eq!(BlockKind::ListItem(ListKind::Ordered).tag(), "li");
        assert_eq!(BlockKind::Container("aside".to_string()).tag(), "aside");
        assert_eq!(ListKind::Unordered.tag(), "ul");
    }

    #[test]
    fn test_blank_block() {
        let block = Block::new(
            BlockKind::Paragraph,
            vec![
                Inline::Text("  ".to_string()),
                Inline::Link {
                    href: "https://example.com".to_string(),
                    text: String::new(),
                },
            ],
        );
        assert!(block.is_blank());
        assert!(!Block::text(BlockKind::Paragraph, "x").is_blank());
        assert!(Block::text(BlockKind::Paragraph, "\u{feff} \u{a0}").is_blank());
    }

    #[test]
    fn test_document_is_empty() {
        assert!(Document::default().is_empty());
        assert!(Document::new(vec![Block::text(BlockKind::Separator, " ")]).is_empty());
        assert!(!Document::new(vec![Block::text(BlockKind::Heading2, "Title")]).is_empty());
    }

    #[test]
    fn test_list_kind() {
        assert_eq!(
            BlockKind::ListItem(ListKind::Ordered).list_kind(),
            Some(ListKind::Ordered)
        );
        assert_eq!(BlockKind::Separator.list_kind(), None);
    }

    #[test]
    fn test_plain_text() {
        let block = Block::new(
            BlockKind::Paragraph,
            vec![
                Inline::Text("Read ".to_string()),
                Inline::Link {
                    href: "/docs".to_string(),
                    text: "the docs".to_string(),
                },
            ],
        );
        assert_eq!(block.plain_text(), "Read the docs");
    }
}
