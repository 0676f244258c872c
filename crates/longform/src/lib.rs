//! # longform
//!
//! Convert block-editor (Draft.js "longform") HTML into clean semantic HTML.
//!
//! Each content block (`data-block="true"`) is classified by its class
//! markers or tag name, its text is normalized, consecutive list items are
//! merged into `<ol>`/`<ul>` containers, and the result is wrapped in a
//! standalone HTML document.
//!
//! ## Design
//!
//! The converter works on a parser-agnostic [`Node`] tree:
//!
//! - **Parser agnostic**: any HTML parser can produce the Node structure via
//!   the [`HtmlParser`] trait
//! - **Zero parsing overhead**: a tree already available (e.g. from a browser)
//!   can be handed over directly
//! - **Rule based**: classification is an ordered list of [`Rule`]s; custom
//!   rules run before the built-in ones
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use longform::ExtractService;
//!
//! let service = ExtractService::new();
//! let extraction = service
//!     .extract_html(r#"<div data-contents="true">
//!         <div data-block="true" class="longform-header-two">Intro</div>
//!         <div data-block="true" class="longform-unordered-list-item">One</div>
//!         <div data-block="true" class="longform-unordered-list-item">Two</div>
//!     </div>"#)
//!     .unwrap();
//!
//! assert_eq!(
//!     service.render_fragment(&extraction),
//!     "<h2>Intro</h2>\n<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>"
//! );
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use longform::{ExtractService, Node};
//!
//! let block = Node::element_with_attrs(
//!     "div",
//!     vec![("data-block", "true"), ("class", "longform-unstyled")],
//! )
//! .with_child(Node::text("Hello World"));
//! let root = Node::element_with_attrs("div", vec![("data-contents", "true")]).with_child(block);
//!
//! let html = ExtractService::new().convert(&root).unwrap();
//! assert!(html.contains("<body>\n<p>Hello World</p>\n</body>"));
//! ```

mod convert;
mod extract;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod parser;
mod rules;
mod service;

pub use convert::{
    find_blocks, find_container, Extraction, BLOCK_ATTR, CONTAINER_CLASS, CONTENTS_ATTR,
};
pub use extract::extract_inlines;
#[cfg(feature = "html")]
pub use html::{parse_html, ScraperParser};
pub use longform_core::{escape_html, Block, BlockKind, Document, Inline, ListKind};
pub use node::{Node, NodeType};
pub use parser::HtmlParser;
pub use rules::{ClassifyFn, Filter, PredicateFn, Rule, Rules};
pub use service::{ExtractOptions, ExtractService, FallbackTag, LinkStyle};

/// Error type for extraction operations
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
