//! Built-in rules for Draft.js longform block markup.

use longform_core::{BlockKind, FallbackTag, ListKind};

use super::{Filter, Rule};

/// Create the built-in rules, in precedence order
pub fn draft_rules() -> Vec<Rule> {
    vec![
        header_two_rule(),
        header_three_rule(),
        blockquote_rule(),
        ordered_list_item_rule(),
        unordered_list_item_rule(),
        separator_rule(),
        unstyled_rule(),
    ]
}

fn header_two_rule() -> Rule {
    Rule::to_kind(
        Filter::any_of(vec![Filter::class_marker("header-two"), Filter::tag("h2")]),
        BlockKind::Heading2,
    )
}

fn header_three_rule() -> Rule {
    Rule::to_kind(
        Filter::any_of(vec![Filter::class_marker("header-three"), Filter::tag("h3")]),
        BlockKind::Heading3,
    )
}

fn blockquote_rule() -> Rule {
    Rule::to_kind(
        Filter::any_of(vec![Filter::class_marker("blockquote"), Filter::tag("blockquote")]),
        BlockKind::BlockQuote,
    )
}

fn ordered_list_item_rule() -> Rule {
    Rule::to_kind(
        Filter::class_marker("ordered-list-item"),
        BlockKind::ListItem(ListKind::Ordered),
    )
}

fn unordered_list_item_rule() -> Rule {
    Rule::to_kind(
        Filter::class_marker("unordered-list-item"),
        BlockKind::ListItem(ListKind::Unordered),
    )
}

fn separator_rule() -> Rule {
    Rule::to_kind(
        Filter::any_of(vec![
            Filter::tag("section"),
            Filter::predicate(|_, node, _| {
                node.descendant_elements()
                    .any(|n| n.attr_is("role", "separator"))
            }),
        ]),
        BlockKind::Separator,
    )
}

fn unstyled_rule() -> Rule {
    Rule::to_kind(Filter::class_marker("unstyled"), BlockKind::Paragraph)
}

/// Catch-all rule, consulted after every other rule
pub fn fallback_rule() -> Rule {
    Rule::new(Filter::predicate(|_, _, _| true), |node, options| {
        match options.fallback_tag {
            FallbackTag::Div => BlockKind::Container("div".to_string()),
            FallbackTag::Element => BlockKind::Container(node.tag_name()),
        }
    })
}
