//! Parser for the Choreo language
//!
//! Pulls leaves from the [`Lexer`] one at a time and assembles them into a
//! single tree under a `Root` branch. Parsing is error-tolerant: a leaf the
//! grammar does not recognize is retained in the tree verbatim and reported
//! through [`Diagnostics`], so editor tooling always gets a usable tree.
//!
//! ## Examples
//!
//! ```rust
//! use choreo_syntax::parser;
//!
//! let (tree, diagnostics) = parser::parse("moves\n# ok\n");
//! assert!(tree.is_some());
//! assert!(diagnostics.is_empty());
//! ```

use crate::ast::{Branch, Leaf, LeafKind, Node};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer::Lexer;

/// Parser state.
///
/// One parser consumes one document snapshot; the lexer cursor and the
/// diagnostics collector are freshly allocated per invocation and handed
/// back (as tree + list) when parsing completes.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    diagnostics: Diagnostics,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Parse the whole document.
    ///
    /// Returns `(None, [])` for empty or whitespace-only input; otherwise a
    /// `Root` branch holding every block in document order, plus the
    /// diagnostics collected along the way. Never fails: unrecognized input
    /// becomes `Unknown` leaves with one diagnostic each.
    pub fn parse(mut self) -> (Option<Node>, Vec<Diagnostic>) {
        let Some(first_leaf) = self.lexer.lex() else {
            return (None, self.diagnostics.into_list());
        };

        let first_block = self.parse_block(first_leaf);
        let mut root = Branch::root(first_block);

        while let Some(leaf) = self.lexer.lex() {
            let block = self.parse_block(leaf);
            root.push(block);
        }

        (Some(Node::Branch(root)), self.diagnostics.into_list())
    }

    /// Classify one leaf into a block node.
    ///
    /// The match is exhaustive over [`LeafKind`], so adding a token kind
    /// forces a decision here at compile time.
    fn parse_block(&mut self, leaf: Leaf) -> Node {
        match leaf.kind {
            LeafKind::LineComment => Node::Leaf(leaf),
            LeafKind::MovesKw => self.parse_moves(leaf),
            LeafKind::Unknown => {
                self.diagnostics.add(Diagnostic::unknown_token(&leaf));
                Node::Leaf(leaf)
            }
        }
    }

    /// Parse a `moves` block.
    ///
    /// The body grammar is not settled yet; for now the branch holds only
    /// its introducing keyword. This method is the extension point for the
    /// move-list syntax.
    fn parse_moves(&mut self, moves_kw: Leaf) -> Node {
        let branch = Branch::moves(moves_kw);

        // TODO: parse the move list following the keyword once its grammar lands

        Node::Branch(branch)
    }
}

/// Parse a source string into a tree and diagnostic list.
///
/// This is the main public entrypoint: one call fully consumes one document
/// snapshot. The tree is `None` iff the input is empty or all whitespace.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> (Option<Node>, Vec<Diagnostic>) {
    Parser::new(source).parse()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BranchKind, Span};

    fn root_children(tree: &Option<Node>) -> &[Node] {
        match tree {
            Some(Node::Branch(branch)) => {
                assert_eq!(branch.kind, BranchKind::Root);
                branch.children()
            }
            other => panic!("expected Root branch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let (tree, diagnostics) = parse("");
        assert!(tree.is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let (tree, diagnostics) = parse("   \n\t ");
        assert!(tree.is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_single_comment() {
        let (tree, diagnostics) = parse("# hello");
        let children = root_children(&tree);
        assert_eq!(children.len(), 1);
        match &children[0] {
            Node::Leaf(leaf) => {
                assert_eq!(leaf.kind, LeafKind::LineComment);
                assert_eq!(leaf.text, "# hello");
            }
            other => panic!("expected comment leaf, got {:?}", other),
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_moves_block_wraps_keyword() {
        let (tree, diagnostics) = parse("moves");
        let children = root_children(&tree);
        assert_eq!(children.len(), 1);
        match &children[0] {
            Node::Branch(branch) => {
                assert_eq!(branch.kind, BranchKind::Moves);
                assert_eq!(branch.children().len(), 1);
                match &branch.children()[0] {
                    Node::Leaf(leaf) => assert_eq!(leaf.kind, LeafKind::MovesKw),
                    other => panic!("expected keyword leaf, got {:?}", other),
                }
            }
            other => panic!("expected Moves branch, got {:?}", other),
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_token_is_kept_and_reported() {
        let (tree, diagnostics) = parse("foo");
        let children = root_children(&tree);
        assert_eq!(children.len(), 1);
        match &children[0] {
            Node::Leaf(leaf) => {
                assert_eq!(leaf.kind, LeafKind::Unknown);
                assert_eq!(leaf.text, "foo");
            }
            other => panic!("expected unknown leaf, got {:?}", other),
        }

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "unknown token foo");
        assert_eq!(diagnostics[0].span, Span::new(0, 3));
    }

    #[test]
    fn test_mixed_document() {
        let (tree, diagnostics) = parse("moves\n# ok\nbar");
        let children = root_children(&tree);
        assert_eq!(children.len(), 3);

        assert!(matches!(&children[0], Node::Branch(b) if b.kind == BranchKind::Moves));
        assert!(matches!(&children[1], Node::Leaf(l) if l.kind == LeafKind::LineComment));
        assert!(matches!(&children[2], Node::Leaf(l) if l.kind == LeafKind::Unknown));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "unknown token bar");
    }

    #[test]
    fn test_root_span_covers_consumed_input() {
        // Root starts at the first non-whitespace character and ends after
        // the last consumed one.
        let (tree, _) = parse("  moves\nbar ");
        let span = tree.expect("non-empty input produces a tree").span();
        assert_eq!(span, Span::new(2, 11));
    }

    #[test]
    fn test_diagnostics_match_unknown_leaves_in_order() {
        let (tree, diagnostics) = parse("foo moves bar\n# c\nbaz");
        let children = root_children(&tree);

        let unknown: Vec<&Leaf> = children
            .iter()
            .filter_map(|node| match node {
                Node::Leaf(leaf) if leaf.kind == LeafKind::Unknown => Some(leaf),
                _ => None,
            })
            .collect();

        assert_eq!(unknown.len(), diagnostics.len());
        for (leaf, diagnostic) in unknown.iter().zip(&diagnostics) {
            assert_eq!(leaf.span, diagnostic.span);
            assert_eq!(diagnostic.message, format!("unknown token {}", leaf.text));
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        let source = "moves\nfoo ?!\n# comment";
        let first = parse(source);
        let second = parse(source);
        assert_eq!(first, second);
    }
}
