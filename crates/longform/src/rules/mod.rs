//! Rule system for block classification.

mod draft;
mod rule;

pub use draft::{draft_rules, fallback_rule};
pub use rule::{ClassifyFn, Filter, PredicateFn, Rule};

use indexmap::IndexMap;
use longform_core::BlockKind;

use crate::node::Node;
use crate::service::ExtractOptions;

/// Ordered collection of classification rules
pub struct Rules {
    /// Custom rules added by the user (checked first, in insertion order)
    custom_rules: IndexMap<String, Rule>,
    /// Built-in Draft.js rules
    draft_rules: Vec<Rule>,
    /// Catch-all, so classification is total
    fallback: Rule,
}

impl Rules {
    /// Create a new Rules instance with the built-in rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            draft_rules: draft_rules(),
            fallback: fallback_rule(),
        }
    }

    /// Add a custom rule. Re-using a key replaces the rule in place.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Remove a custom rule by key
    pub fn remove(&mut self, key: &str) -> Option<Rule> {
        self.custom_rules.shift_remove(key)
    }

    /// Find the first rule matching a block
    pub fn for_node<'a>(&'a self, node: &Node, options: &ExtractOptions) -> &'a Rule {
        self.custom_rules
            .values()
            .chain(self.draft_rules.iter())
            .find(|rule| rule.matches(node, options))
            .unwrap_or(&self.fallback)
    }

    /// Classify a block element
    pub fn classify(&self, node: &Node, options: &ExtractOptions) -> BlockKind {
        self.for_node(node, options).classify(node, options)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
