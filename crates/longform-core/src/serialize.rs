//! HTML serialization
//!
//! Converts a block document into HTML lines, merging consecutive list items
//! of the same kind into one list container.

use crate::ast::{Block, BlockKind, Document, Inline, ListKind};
use crate::escape::escape_html;
use crate::options::Options;

/// Open-list tracking while walking blocks in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    NoOpenList,
    OpenList(ListKind),
}

impl ListState {
    /// Emit the closing tag of the open list, if any
    fn close(&mut self, lines: &mut Vec<String>) {
        if let ListState::OpenList(kind) = *self {
            lines.push(format!("</{}>", kind.tag()));
        }
        *self = ListState::NoOpenList;
    }

    /// Make sure a list of `kind` is open, closing a list of another kind first
    fn open(&mut self, kind: ListKind, lines: &mut Vec<String>) {
        if *self == ListState::OpenList(kind) {
            return;
        }
        self.close(lines);
        lines.push(format!("<{}>", kind.tag()));
        *self = ListState::OpenList(kind);
    }
}

/// Serialize a document to its body HTML, one block per line
pub fn serialize(document: &Document, options: &Options) -> String {
    serialize_lines(document, options).join("\n")
}

/// Serialize a document to output lines
pub fn serialize_lines(document: &Document, options: &Options) -> Vec<String> {
    let mut lines = Vec::with_capacity(document.blocks.len() + 2);
    let mut state = ListState::NoOpenList;

    for block in &document.blocks {
        // Blank blocks neither emit nor touch the list state
        if block.is_blank() {
            continue;
        }

        if let Some(kind) = block.kind.list_kind() {
            state.open(kind, &mut lines);
            lines.push(format!(
                "{}<li>{}</li>",
                options.list_indent,
                serialize_inlines(&block.content)
            ));
            continue;
        }

        state.close(&mut lines);
        if block.kind == BlockKind::Separator {
            lines.push("<hr>".to_string());
        } else {
            lines.push(serialize_block(block));
        }
    }

    state.close(&mut lines);
    lines
}

fn serialize_block(block: &Block) -> String {
    let tag = block.kind.tag();
    format!("<{}>{}</{}>", tag, serialize_inlines(&block.content), tag)
}

fn serialize_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Link { href, text } => {
                out.push_str("<a href=\"");
                out.push_str(&escape_html(href));
                out.push_str("\">");
                out.push_str(&escape_html(text));
                out.push_str("</a>");
            }
        }
    }
    out
}

/// Render a standalone HTML document around the serialized body
pub fn render_document(document: &Document, options: &Options) -> String {
    wrap_document(&serialize(document, options), options)
}

/// Wrap already serialized body HTML in the document template
pub fn wrap_document(body: &str, options: &Options) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_html(&options.title),
        style = options.stylesheet,
        body = body,
    )
}
