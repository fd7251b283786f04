//! Property-based tests for the Choreo frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use choreo::ast::{LeafKind, Node};
use choreo::parser;
use proptest::prelude::*;

/// Whitespace as the lexer defines it (space, tab, CR, LF).
fn is_lexer_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Count Unknown leaves anywhere in the tree, in document order.
fn unknown_leaves(node: &Node, out: &mut Vec<choreo::ast::Span>) {
    match node {
        Node::Branch(branch) => {
            for child in branch.children() {
                unknown_leaves(child, out);
            }
        }
        Node::Leaf(leaf) => {
            if leaf.kind == LeafKind::Unknown {
                out.push(leaf.span);
            }
        }
    }
}

proptest! {
    /// Totality: parse terminates on any input and returns a tree exactly
    /// when the input has a non-whitespace character.
    #[test]
    fn parse_is_total(source in any::<String>()) {
        let (tree, _) = parser::parse(&source);
        let all_whitespace = source.chars().all(is_lexer_whitespace);
        prop_assert_eq!(tree.is_none(), all_whitespace);
    }

    /// Tree-diagnostic consistency: one diagnostic per Unknown leaf, in the
    /// same source order.
    #[test]
    fn diagnostics_match_unknown_leaves(source in any::<String>()) {
        let (tree, diagnostics) = parser::parse(&source);

        let mut spans = Vec::new();
        if let Some(tree) = &tree {
            unknown_leaves(tree, &mut spans);
        }

        prop_assert_eq!(spans.len(), diagnostics.len());
        for (span, diagnostic) in spans.iter().zip(&diagnostics) {
            prop_assert_eq!(*span, diagnostic.span);
        }
    }

    /// Idempotence: no hidden state survives between invocations.
    #[test]
    fn parse_is_idempotent(source in "[ -~\\t\\r\\n]{0,64}") {
        prop_assert_eq!(parser::parse(&source), parser::parse(&source));
    }

    /// Range coverage: the root span starts at the first non-whitespace
    /// character, consumes every non-whitespace character, and leaves only
    /// whitespace behind it. (It can end past the last non-whitespace
    /// character: a line comment also consumes trailing blanks.)
    #[test]
    fn root_span_covers_trimmed_input(source in "[ -~\\t\\r\\n]{0,64}") {
        let (tree, _) = parser::parse(&source);
        if let Some(tree) = tree {
            let span = tree.span();
            let first = source.find(|c| !is_lexer_whitespace(c)).unwrap();
            let last = source.rfind(|c| !is_lexer_whitespace(c)).unwrap();
            prop_assert_eq!(span.start, first);
            prop_assert!(span.end > last);
            prop_assert!(span.end <= source.len());
            prop_assert!(source[span.end..].chars().all(is_lexer_whitespace));
        }
    }

    /// Every leaf span stays inside the document, is non-empty, and lands
    /// on character boundaries.
    #[test]
    fn leaf_spans_are_well_formed(source in any::<String>()) {
        for leaf in choreo::lexer::lex(&source) {
            prop_assert!(leaf.span.start < leaf.span.end);
            prop_assert!(leaf.span.end <= source.len());
            prop_assert!(source.is_char_boundary(leaf.span.start));
            prop_assert!(source.is_char_boundary(leaf.span.end));
            prop_assert_eq!(&source[leaf.span.start..leaf.span.end], leaf.text.as_str());
        }
    }

    /// Keyword matching ignores case over the whole word.
    #[test]
    fn keyword_is_case_insensitive(caps in proptest::collection::vec(any::<bool>(), 5)) {
        let spelling: String = "moves"
            .chars()
            .zip(&caps)
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();

        let leaves = choreo::lexer::lex(&spelling);
        prop_assert_eq!(leaves.len(), 1);
        prop_assert_eq!(leaves[0].kind, LeafKind::MovesKw);
    }
}
