#![forbid(unsafe_code)]
//! Choreo language tooling
//!
//! Choreo is a small line-oriented language for describing choreographed
//! move sequences. This crate provides the tooling around the
//! `choreo_syntax` frontend: a language server (`choreo-lsp`) that surfaces
//! parse diagnostics in editors, and a CLI (`choreo`) for checking files
//! from the shell.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!   The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Parse problems are not errors**: the frontend reports them as
//!   diagnostics alongside a best-effort tree; only IO and protocol
//!   failures travel through `Result`.

pub mod cli;
pub mod lsp;
pub mod version;

pub use choreo_syntax::ast;
pub use choreo_syntax::diagnostics;
pub use choreo_syntax::lexer;
pub use choreo_syntax::parser;
