//! ExtractService - the main entry point for block HTML conversion.

use crate::convert::{convert, Extraction};
use crate::node::{Node, NodeType};
use crate::parser::HtmlParser;
use crate::rules::Rules;
use crate::{ExtractError, Result, Rule};

// Re-export options from core
pub use longform_core::{FallbackTag, LinkStyle, Options as ExtractOptions};

/// The main service for converting editor markup to clean HTML
pub struct ExtractService {
    options: ExtractOptions,
    rules: Rules,
}

impl ExtractService {
    /// Create a new ExtractService with default options
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create an ExtractService with custom options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Classify the blocks of an already parsed tree
    pub fn extract(&self, node: &Node) -> Result<Extraction> {
        match node.node_type {
            NodeType::Element | NodeType::Document | NodeType::DocumentFragment => {
                Ok(convert(node, &self.rules, &self.options))
            }
            other => Err(ExtractError::InvalidInput(format!(
                "expected an element or document root, got {:?}",
                other
            ))),
        }
    }

    /// Parse `html` with `parser` and classify its blocks
    pub fn extract_with<P>(&self, parser: &P, html: &str) -> Result<Extraction>
    where
        P: HtmlParser + ?Sized,
    {
        let root = parser.parse_document(html)?;
        self.extract(&root)
    }

    /// Parse `html` with the bundled parser and classify its blocks
    #[cfg(feature = "html")]
    pub fn extract_html(&self, html: &str) -> Result<Extraction> {
        self.extract_with(&crate::html::ScraperParser, html)
    }

    /// Serialize extracted blocks to body HTML (no document template)
    pub fn render_fragment(&self, extraction: &Extraction) -> String {
        longform_core::serialize(&extraction.document, &self.options)
    }

    /// Serialize extracted blocks to a standalone HTML document
    pub fn render_document(&self, extraction: &Extraction) -> String {
        longform_core::render_document(&extraction.document, &self.options)
    }

    /// Convert a tree to a standalone HTML document
    pub fn convert(&self, node: &Node) -> Result<String> {
        let extraction = self.extract(node)?;
        Ok(self.render_document(&extraction))
    }

    /// Convert an HTML string to a standalone HTML document
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        let extraction = self.extract_html(html)?;
        Ok(self.render_document(&extraction))
    }

    /// Add a custom classification rule, checked before the built-in rules
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove a custom rule by key
    pub fn remove_rule(&mut self, key: &str) -> &mut Self {
        self.rules.remove(key);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ExtractOptions {
        &mut self.options
    }
}

impl Default for ExtractService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Filter;
    use longform_core::BlockKind;

    fn block(class: &str, text: &str) -> Node {
        Node::element_with_attrs("div", vec![("data-block", "true"), ("class", class)])
            .with_child(Node::text(text))
    }

    fn contents(children: Vec<Node>) -> Node {
        children.into_iter().fold(
            Node::element_with_attrs("div", vec![("data-contents", "true")]),
            Node::with_child,
        )
    }

    #[test]
    fn test_render_fragment() {
        let service = ExtractService::new();
        let tree = contents(vec![
            block("longform-header-two", "Title"),
            block("longform-unstyled", "Body & soul"),
        ]);
        let extraction = service.extract(&tree).unwrap();
        assert_eq!(
            service.render_fragment(&extraction),
            "<h2>Title</h2>\n<p>Body &amp; soul</p>"
        );
    }

    #[test]
    fn test_convert_wraps_document() {
        let service = ExtractService::new();
        let html = service.convert(&contents(vec![])).unwrap();
        assert!(html.contains("<body>\n\n</body>"));
    }

    #[test]
    fn test_text_root_rejected() {
        let service = ExtractService::new();
        let err = service.extract(&Node::text("loose")).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput(_)));
    }

    #[test]
    fn test_custom_parser() {
        let service = ExtractService::new();
        let parser = |_: &str| -> Result<Node> {
            Ok(contents(vec![block("longform-unstyled", "from parser")]))
        };
        let extraction = service.extract_with(&parser, "ignored").unwrap();
        assert_eq!(service.render_fragment(&extraction), "<p>from parser</p>");
    }

    #[test]
    fn test_parser_error_propagates() {
        let service = ExtractService::new();
        let parser = |_: &str| -> Result<Node> {
            Err(ExtractError::ConversionError("bad markup".to_string()))
        };
        let err = service.extract_with(&parser, "").unwrap_err();
        assert_eq!(err.to_string(), "Conversion error: bad markup");
    }

    #[test]
    fn test_options_mut() {
        let mut service = ExtractService::new();
        service.options_mut().fallback_tag = FallbackTag::Element;
        let tree = contents(vec![
            Node::element_with_attrs("figure", vec![("data-block", "true")])
                .with_child(Node::text("Pic")),
        ]);
        let extraction = service.extract(&tree).unwrap();
        assert_eq!(service.render_fragment(&extraction), "<figure>Pic</figure>");
    }

    #[test]
    fn test_plugin_adds_rule() {
        let mut service = ExtractService::new();
        service.use_plugin(|s| {
            s.add_rule(
                "code",
                Rule::to_kind(
                    Filter::class_marker("code-block"),
                    BlockKind::Container("pre".to_string()),
                ),
            );
        });
        let tree = contents(vec![block("longform-code-block", "let x = 1;")]);
        let extraction = service.extract(&tree).unwrap();
        assert_eq!(service.render_fragment(&extraction), "<pre>let x = 1;</pre>");

        service.remove_rule("code");
        let extraction = service.extract(&tree).unwrap();
        assert_eq!(service.render_fragment(&extraction), "<div>let x = 1;</div>");
    }
}
