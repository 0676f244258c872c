//! HTML parsing support.
//!
//! This module parses HTML strings with scraper (html5ever) and converts the
//! result to the [`Node`] structure used by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::parser::HtmlParser;
use crate::Result;

/// [`HtmlParser`] backed by scraper.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperParser;

impl HtmlParser for ScraperParser {
    fn parse_document(&self, html: &str) -> Result<Node> {
        Ok(parse_html(html))
    }
}

/// Parse an HTML document string into a Node tree.
///
/// The returned node is a document node whose single element child is
/// `<html>`; html5ever synthesizes `head` and `body` when they are missing.
///
/// # Example
///
/// ```rust
/// use longform::parse_html;
///
/// let node = parse_html("<div data-block=\"true\">Hello</div>");
/// let body = node.find(|n| n.tag_name() == "body").unwrap();
/// assert_eq!(body.text_content(), "Hello");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);

    for error in &document.errors {
        log::trace!("html parser recovered: {}", error);
    }

    let mut root = Node::document();
    root.add_child(scraper_to_node(document.root_element()));
    root
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();

    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    #[test]
    fn test_parse_simple_html() {
        let node = parse_html("<p>Hello World</p>");
        assert_eq!(node.node_type, NodeType::Document);
        let html = node.element_children().next().unwrap();
        assert_eq!(html.tag_name(), "html");
    }

    #[test]
    fn test_parse_synthesizes_body() {
        let node = parse_html("<div class=\"container\"><span>Hi</span></div>");
        let body = node.find(|n| n.tag_name() == "body").unwrap();
        let div = body.element_children().next().unwrap();
        assert!(div.has_class("container"));
        assert_eq!(div.text_content(), "Hi");
    }

    #[test]
    fn test_parse_keeps_attributes() {
        let node = parse_html(
            r#"<div data-contents="true"><div data-block="true" data-offset-key="x-0-0">A</div></div>"#,
        );
        let block = node.find(|n| n.attr_is("data-block", "true")).unwrap();
        assert_eq!(block.attr("data-offset-key"), Some("x-0-0"));
    }

    #[test]
    fn test_parse_drops_comments() {
        let node = parse_html("<p>a<!-- hidden -->b</p>");
        let p = node.find(|n| n.tag_name() == "p").unwrap();
        assert_eq!(p.text_content(), "ab");
    }

    #[test]
    fn test_scraper_parser_trait() {
        let node = ScraperParser.parse_document("<h2>Title</h2>").unwrap();
        assert!(node.find(|n| n.tag_name() == "h2").is_some());
    }
}
