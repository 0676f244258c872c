//! Text extraction for content blocks.
//!
//! Produces whitespace-normalized inline content. Text stays unescaped here;
//! escaping belongs to serialization.

use longform_core::{Inline, LinkStyle};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Node, NodeType};
use crate::service::ExtractOptions;

// U+FEFF counts as whitespace in browser text handling but not in `\s`
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\u{FEFF}]+").expect("whitespace pattern is valid"));

/// Extract the normalized inline content of a block element.
///
/// All descendant text is concatenated. With [`LinkStyle::Preserve`] every
/// `<a href>` becomes an [`Inline::Link`] carrying its own flattened text.
/// Whitespace runs collapse to one space across inline boundaries and the
/// block is trimmed at both ends, so blank blocks come back empty.
pub fn extract_inlines(node: &Node, options: &ExtractOptions) -> Vec<Inline> {
    let raw = match options.link_style {
        LinkStyle::Flatten => vec![Inline::Text(node.text_content())],
        LinkStyle::Preserve => {
            let mut inlines = Vec::new();
            let mut buffer = String::new();
            collect_inlines(node, &mut buffer, &mut inlines);
            if !buffer.is_empty() {
                inlines.push(Inline::Text(buffer));
            }
            inlines
        }
    };

    normalize(raw)
}

fn collect_inlines(node: &Node, buffer: &mut String, out: &mut Vec<Inline>) {
    for child in node.children() {
        match child.node_type {
            NodeType::Text => buffer.push_str(child.node_value.as_deref().unwrap_or("")),
            NodeType::Element if is_link(child) => {
                if !buffer.is_empty() {
                    out.push(Inline::Text(std::mem::take(buffer)));
                }
                out.push(Inline::Link {
                    href: child.attr("href").unwrap_or("").trim().to_string(),
                    text: child.text_content(),
                });
            }
            NodeType::Element => collect_inlines(child, buffer, out),
            _ => {}
        }
    }
}

fn is_link(node: &Node) -> bool {
    node.tag_name() == "a" && node.attr("href").is_some()
}

/// Collapse whitespace across inlines, trim the ends, drop empty inlines
fn normalize(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut result: Vec<Inline> = Vec::with_capacity(inlines.len());
    // Start as if preceded by a space so leading whitespace is trimmed
    let mut after_space = true;

    for inline in inlines {
        let text = {
            let collapsed = WHITESPACE.replace_all(inline.text(), " ");
            if after_space {
                collapsed.trim_start_matches(' ').to_string()
            } else {
                collapsed.into_owned()
            }
        };
        if text.is_empty() {
            continue;
        }
        after_space = text.ends_with(' ');
        result.push(with_text(inline, text));
    }

    while let Some(last) = result.pop() {
        let trimmed = last.text().trim_end_matches(' ').to_string();
        if !trimmed.is_empty() {
            result.push(with_text(last, trimmed));
            break;
        }
    }

    move_spaces_out_of_links(result)
}

/// Anchors wrap only their words; a space at a link edge moves into the
/// neighbouring text, and adjacent text inlines are merged.
fn move_spaces_out_of_links(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut result: Vec<Inline> = Vec::with_capacity(inlines.len());

    for inline in inlines {
        match inline {
            Inline::Text(text) => push_text(&mut result, &text),
            Inline::Link { href, text } => {
                let words = text.trim_matches(' ');
                if words.is_empty() {
                    push_text(&mut result, " ");
                    continue;
                }
                if text.starts_with(' ') {
                    push_text(&mut result, " ");
                }
                let trailing = text.ends_with(' ');
                result.push(Inline::Link {
                    href,
                    text: words.to_string(),
                });
                if trailing {
                    push_text(&mut result, " ");
                }
            }
        }
    }

    result
}

fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    match inlines.last_mut() {
        Some(Inline::Text(last)) => last.push_str(text),
        _ => inlines.push(Inline::Text(text.to_string())),
    }
}

fn with_text(inline: Inline, text: String) -> Inline {
    match inline {
        Inline::Text(_) => Inline::Text(text),
        Inline::Link { href, .. } => Inline::Link { href, text },
    }
}
