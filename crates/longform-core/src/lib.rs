//! longform-core - block AST and HTML serialization
//!
//! This crate provides the data structures and serialization shared by the
//! `longform` converter: classified blocks, HTML escaping, and the
//! list-merging serializer that turns blocks into clean HTML.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parse──▶ Node tree ──classify──▶ ┌───────────┐
//!                                                │ Block AST │ ──▶ HTML String
//!                                                └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use longform_core::{serialize, Block, BlockKind, Document, ListKind, Options};
//!
//! let document = Document::new(vec![
//!     Block::text(BlockKind::Heading2, "Shopping"),
//!     Block::text(BlockKind::ListItem(ListKind::Unordered), "Milk"),
//!     Block::text(BlockKind::ListItem(ListKind::Unordered), "Eggs"),
//! ]);
//!
//! let html = serialize(&document, &Options::default());
//! assert_eq!(html, "<h2>Shopping</h2>\n<ul>\n  <li>Milk</li>\n  <li>Eggs</li>\n</ul>");
//! ```

mod ast;
mod escape;
mod options;
mod serialize;

pub use ast::{Block, BlockKind, Document, Inline, ListKind};
pub use escape::escape_html;
pub use options::{FallbackTag, LinkStyle, Options, DEFAULT_STYLESHEET};
pub use serialize::{render_document, serialize, serialize_lines, wrap_document};
