//! Diagnostics for the Choreo frontend
//!
//! Problems found during parsing are recorded as data, not raised as errors:
//! the parser always returns a best-effort tree and a list of [`Diagnostic`]s
//! for the host to display. See [`Diagnostics`] for the collector.

use crate::ast::{Leaf, Span};

/// Severity of a diagnostic, matching the conventional editor shape.
///
/// Everything the parser produces today is [`Severity::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A structured, non-fatal problem report tied to a source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
        }
    }

    /// The diagnostic reported for every leaf the grammar does not recognize.
    pub fn unknown_token(leaf: &Leaf) -> Self {
        Self::error(format!("unknown token {}", leaf.text), leaf.span)
    }
}

/// Append-only collector of diagnostics produced during one parse.
///
/// Insertion order is report order. Readers get a snapshot copy via
/// [`Diagnostics::list`], so the collector cannot be mutated through its
/// readers. A fresh collector is created per parse invocation.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic. No deduplication, no severity filtering.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Snapshot of all diagnostics added so far, in insertion order.
    pub fn list(&self) -> Vec<Diagnostic> {
        self.items.clone()
    }

    /// Consume the collector, yielding the diagnostics in insertion order.
    pub fn into_list(self) -> Vec<Diagnostic> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LeafKind;

    #[test]
    fn test_unknown_token_message() {
        let leaf = Leaf::new(LeafKind::Unknown, Span::new(4, 7), "foo");
        let d = Diagnostic::unknown_token(&leaf);
        assert_eq!(d.message, "unknown token foo");
        assert_eq!(d.span, Span::new(4, 7));
        assert_eq!(d.severity, Severity::Error);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut sink = Diagnostics::new();
        sink.add(Diagnostic::error("first", Span::new(0, 1)));
        sink.add(Diagnostic::error("second", Span::new(2, 3)));

        let listed = sink.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].message, "first");
        assert_eq!(listed[1].message, "second");
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let mut sink = Diagnostics::new();
        sink.add(Diagnostic::error("first", Span::new(0, 1)));

        let snapshot = sink.list();
        sink.add(Diagnostic::error("second", Span::new(2, 3)));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(sink.len(), 2);
    }
}
