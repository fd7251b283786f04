//! Convert Choreo frontend diagnostics to LSP diagnostics
//!
//! The frontend tracks byte-offset spans; the editor protocol wants
//! line/column positions. This module owns that boundary: offset/position
//! conversion against a document snapshot, plus the mapping from
//! [`choreo_syntax::diagnostics::Diagnostic`] to the LSP diagnostic shape.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

use choreo_syntax::ast::Span;
use choreo_syntax::diagnostics::{self, Severity};

/// Convert a byte offset to LSP Position (0-based line and character)
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    let offset = offset.min(source.len());
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    Position::new(line, col)
}

/// Convert an LSP Position back to a byte offset into `source`.
pub fn position_to_offset(source: &str, position: Position) -> Option<usize> {
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if line == position.line && col == position.character {
            return Some(i);
        }
        if c == '\n' {
            if line == position.line {
                // Position past the end of this line; clamp to the newline.
                return Some(i);
            }
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    (line == position.line).then_some(source.len())
}

/// Convert a span to LSP Range
pub fn span_to_range(source: &str, span: Span) -> Range {
    let start = offset_to_position(source, span.start);
    // Never produce a zero-width range; editors render those invisibly.
    let end = offset_to_position(source, span.end.max(span.start + 1));
    Range::new(start, end)
}

fn severity_to_lsp(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    }
}

/// Convert a frontend diagnostic to an LSP Diagnostic
pub fn syntax_diagnostic_to_lsp(diagnostic: &diagnostics::Diagnostic, source: &str) -> Diagnostic {
    Diagnostic {
        range: span_to_range(source, diagnostic.span),
        severity: Some(severity_to_lsp(diagnostic.severity)),
        code: None,
        code_description: None,
        source: Some("choreo".to_string()),
        message: diagnostic.message.clone(),
        related_information: None,
        tags: None,
        data: None,
    }
}
