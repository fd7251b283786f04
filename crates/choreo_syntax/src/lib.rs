//! Shared syntax frontend for the Choreo language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the language
//! server, the CLI, and future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no symbol resolution, no
//!   semantic analysis, no IO. One [`parser::parse`] call fully consumes one
//!   document snapshot and owns all of its state.
//! - Parsing is error-tolerant: unrecognized input is retained in the tree
//!   as `Unknown` leaves and reported as diagnostics, never raised as errors.
//!
//! ## Examples
//! ```rust
//! use choreo_syntax::parser;
//!
//! let (tree, diagnostics) = parser::parse("# intro\nmoves\n");
//! assert!(tree.is_some());
//! assert!(diagnostics.is_empty());
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
