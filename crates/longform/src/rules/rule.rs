//! Rule and Filter types for block classification.

use longform_core::BlockKind;

use crate::node::Node;
use crate::service::ExtractOptions;

/// Type alias for classification functions
pub type ClassifyFn = Box<dyn Fn(&Node, &ExtractOptions) -> BlockKind + Send + Sync>;

/// Type alias for predicate functions
pub type PredicateFn = Box<dyn Fn(&str, &Node, &ExtractOptions) -> bool + Send + Sync>;

/// A filter determines which blocks a rule applies to
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match a class marker; the configured class prefix is prepended
    ClassMarker(String),
    /// Match when any of the inner filters matches
    AnyOf(Vec<Filter>),
    /// Match using a predicate function
    Predicate(PredicateFn),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    /// Create a filter for a class marker such as `header-two`
    pub fn class_marker(name: &str) -> Self {
        Filter::ClassMarker(name.to_string())
    }

    /// Combine filters, first match wins
    pub fn any_of(filters: Vec<Filter>) -> Self {
        Filter::AnyOf(filters)
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &Node, &ExtractOptions) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a block element
    pub fn matches(&self, tag: &str, node: &Node, options: &ExtractOptions) -> bool {
        let tag_lower = tag.to_lowercase();
        match self {
            Filter::TagName(t) => tag_lower == *t,
            Filter::ClassMarker(name) => node.has_class(&options.class_marker(name)),
            Filter::AnyOf(filters) => {
                filters.iter().any(|f| f.matches(&tag_lower, node, options))
            }
            Filter::Predicate(f) => f(&tag_lower, node, options),
        }
    }
}

/// A rule maps a matched block element to its classification
pub struct Rule {
    /// Filter to determine which blocks this rule applies to
    pub filter: Filter,
    /// Classification function
    pub classify: ClassifyFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, classify: F) -> Self
    where
        F: Fn(&Node, &ExtractOptions) -> BlockKind + Send + Sync + 'static,
    {
        Self {
            filter,
            classify: Box::new(classify),
        }
    }

    /// Create a rule that always yields the same kind
    pub fn to_kind(filter: Filter, kind: BlockKind) -> Self {
        Self::new(filter, move |_, _| kind.clone())
    }

    /// Check if this rule applies to a block element
    pub fn matches(&self, node: &Node, options: &ExtractOptions) -> bool {
        self.filter.matches(&node.tag_name(), node, options)
    }

    /// Apply this rule's classification
    pub fn classify(&self, node: &Node, options: &ExtractOptions) -> BlockKind {
        (self.classify)(node, options)
    }
}
