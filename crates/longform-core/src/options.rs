//! Configuration options for block classification and serialization

/// Inline link handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// Keep `<a href>` elements as anchors around their text
    #[default]
    Preserve,
    /// Drop anchors, keep only their text
    Flatten,
}

/// Tag used for blocks no rule recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackTag {
    /// Always emit `<div>`
    #[default]
    Div,
    /// Reuse the block element's own tag name
    Element,
}

/// Default stylesheet embedded in standalone documents
pub const DEFAULT_STYLESHEET: &str = "
        body {
            font-family: Georgia, serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }
        h2 {
            color: #333;
            margin-top: 2em;
            margin-bottom: 0.5em;
        }
        blockquote {
            border-left: 4px solid #ccc;
            margin: 1.5em 0;
            padding-left: 1em;
            font-style: italic;
            color: #666;
        }
        hr {
            border: none;
            border-top: 1px solid #ddd;
            margin: 2em 0;
        }
        ol, ul {
            margin: 1em 0;
            padding-left: 2em;
        }
        li {
            margin: 0.5em 0;
        }
    ";

/// Options for extraction and serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Prefix of editor class markers (e.g. `longform-` in `longform-header-two`)
    pub class_prefix: String,

    /// Link handling
    pub link_style: LinkStyle,

    /// Tag for unrecognized blocks
    pub fallback_tag: FallbackTag,

    /// Indentation before each `<li>` line
    pub list_indent: String,

    /// Document title
    pub title: String,

    /// Inline stylesheet for standalone documents
    pub stylesheet: String,
}

impl Options {
    /// Full class marker for a marker name, e.g. `header-two`
    pub fn class_marker(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            class_prefix: "longform-".to_string(),
            link_style: LinkStyle::Preserve,
            fallback_tag: FallbackTag::Div,
            list_indent: "  ".to_string(),
            title: "Extracted Content".to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
        }
    }
}
