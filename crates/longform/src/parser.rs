//! HTML parsing capability.

use crate::node::Node;
use crate::Result;

/// Parses an HTML string into a traversable [`Node`] tree.
///
/// The converter only depends on this trait, so the tree can come from
/// the bundled scraper parser (feature `html`), a browser bridge, or any
/// other HTML5 parser.
pub trait HtmlParser {
    /// Parse a full HTML document. The returned root is a document or an
    /// element node.
    fn parse_document(&self, html: &str) -> Result<Node>;
}

impl<F> HtmlParser for F
where
    F: Fn(&str) -> Result<Node>,
{
    fn parse_document(&self, html: &str) -> Result<Node> {
        self(html)
    }
}
