//! Lexer for the Choreo language
//!
//! Pull-based tokenizer: the parser asks for one leaf at a time via
//! [`Lexer::lex`], which skips whitespace and classifies the next run of
//! characters. The lexer never fails; input it cannot classify becomes an
//! [`Unknown`](LeafKind::Unknown) leaf and error reporting is left to the
//! parser's diagnostics.
//!
//! Classification, first match wins:
//! 1. ASCII letter: scan the maximal word (`[A-Za-z0-9_]`), then look the
//!    lowercased spelling up in [`KEYWORDS`].
//! 2. `#`: scan to end of line, producing a line-comment leaf.
//! 3. Anything else: scan to the next whitespace, producing an unknown leaf.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::ast::{Leaf, LeafKind, Span};

/// The fixed keyword table. Lookup is case-insensitive over the whole word,
/// so `moves`, `Moves`, and `MOVES` all match while `movesx` does not.
pub const KEYWORDS: &[(&str, LeafKind)] = &[("moves", LeafKind::MovesKw)];

/// Resolve a word to a keyword kind, if reserved.
fn keyword(word: &str) -> Option<LeafKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| word.eq_ignore_ascii_case(spelling))
        .map(|(_, kind)| *kind)
}

/// Lexer over one document snapshot.
///
/// Tracks a monotonically increasing read offset. `lex()` consumes the
/// character it classifies before dispatching to the per-kind scanners, so
/// every non-end return advances the offset by at least one character.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    current_pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
        }
    }

    /// `true` once the read offset has reached the end of the text.
    pub fn is_eof(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    /// The current read offset (bytes).
    pub fn offset(&self) -> usize {
        self.current_pos
    }

    /// Produce the next leaf, or `None` once only whitespace remains.
    pub fn lex(&mut self) -> Option<Leaf> {
        self.eat_whitespace();

        let start = self.current_pos;
        let c = self.advance()?;

        let leaf = if c.is_ascii_alphabetic() {
            self.lex_word(start)
        } else if c == '#' {
            self.lex_line_comment(start)
        } else {
            self.lex_unknown(start)
        };

        Some(leaf)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn eat_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                self.advance();
            } else {
                break;
            }
        }
    }

    // ========================================================================
    // Per-kind scanners (the classified first character is already consumed)
    // ========================================================================

    /// Scan the rest of a word and resolve it against the keyword table.
    fn lex_word(&mut self, start: usize) -> Leaf {
        while let Some(c) = self.peek() {
            if is_word_char(c) {
                self.advance();
            } else {
                break;
            }
        }

        let text = self.text_from(start);
        match keyword(text) {
            Some(kind) => Leaf::new(kind, self.span_from(start), text),
            None => Leaf::new(LeafKind::Unknown, self.span_from(start), text),
        }
    }

    /// Scan a `#` comment to end of line (exclusive) or end of input.
    fn lex_line_comment(&mut self, start: usize) -> Leaf {
        while let Some(c) = self.peek() {
            if is_newline(c) {
                break;
            }
            self.advance();
        }

        Leaf::new(LeafKind::LineComment, self.span_from(start), self.text_from(start))
    }

    /// Scan an unclassifiable run up to the next whitespace or end of line.
    fn lex_unknown(&mut self, start: usize) -> Leaf {
        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                break;
            }
            self.advance();
        }

        Leaf::new(LeafKind::Unknown, self.span_from(start), self.text_from(start))
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.current_pos)
    }

    fn text_from(&self, start: usize) -> &'a str {
        &self.source[start..self.current_pos]
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can continue a word (ASCII-only).
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_newline(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || is_newline(c)
}

/// Convenience function to drain a source string into a leaf vector.
///
/// This is a shorthand for repeatedly calling [`Lexer::lex`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Leaf> {
    let mut lexer = Lexer::new(source);
    let mut leaves = Vec::new();
    while let Some(leaf) = lexer.lex() {
        leaves.push(leaf);
    }
    leaves
}

// ============================================================================
// TESTS
// ============================================================================
