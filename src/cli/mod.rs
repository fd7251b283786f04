//! CLI module for Choreo tooling
//!
//! ## Commands
//!
//! - `check <file>` - Parse a Choreo file and report diagnostics (also the
//!   default action for a bare file argument)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command
//! functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`; only the top-level `run()` handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use miette::{LabeledSpan, NamedSource};
use thiserror::Error;

use choreo_syntax::ast::Node;
use choreo_syntax::diagnostics::{Diagnostic, Severity};
use choreo_syntax::{lexer, parser};

use crate::version::CHOREO_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// The CLI entry point catches these errors, prints the message, and exits
/// with a failure code. Parse diagnostics are not errors; they are rendered
/// to stderr and only influence the exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Failure(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tooling for the Choreo move-scripting language
#[derive(Parser, Debug)]
#[command(name = "choreo")]
#[command(version = CHOREO_VERSION)]
#[command(about = "Tooling for the Choreo move-scripting language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Dump the leaf stream instead of checking (debug)
    #[arg(long)]
    pub tokens: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a Choreo file and report diagnostics
    Check {
        /// The `.chor` file to check
        file: PathBuf,

        /// Dump the leaf stream instead of checking (debug)
        #[arg(long)]
        tokens: bool,
    },
}

/// Top-level CLI entry point: parse arguments, dispatch, and exit.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Check { file, tokens }) => check_file(&file, tokens),
        None => match cli.file {
            Some(file) => check_file(&file, cli.tokens),
            None => print_usage(),
        },
    };

    match result {
        Ok(code) => process::exit(code.0),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(ExitCode::FAILURE.0);
        }
    }
}

fn print_usage() -> CliResult<ExitCode> {
    Cli::command()
        .print_help()
        .map_err(|e| CliError::Failure(format!("failed to print help: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// check
// ============================================================================

/// Parse one file, render its diagnostics, and map them to an exit code.
fn check_file(path: &Path, dump_tokens: bool) -> CliResult<ExitCode> {
    let source = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    if dump_tokens {
        for leaf in lexer::lex(&source) {
            println!(
                "{:?} @ {}..{} {:?}",
                leaf.kind, leaf.span.start, leaf.span.end, leaf.text
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let (tree, diagnostics) = parser::parse(&source);

    for diagnostic in &diagnostics {
        eprintln!("{:?}", render_diagnostic(diagnostic, path, &source));
    }

    if diagnostics.is_empty() {
        let blocks = match &tree {
            Some(Node::Branch(root)) => root.children().len(),
            _ => 0,
        };
        tracing::info!(file = %path.display(), blocks, "no problems found");
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::info!(
            file = %path.display(),
            problems = diagnostics.len(),
            "check failed"
        );
        Ok(ExitCode::FAILURE)
    }
}

/// Render one frontend diagnostic as a miette report with source context.
fn render_diagnostic(diagnostic: &Diagnostic, path: &Path, source: &str) -> miette::Report {
    let severity = match diagnostic.severity {
        Severity::Error => miette::Severity::Error,
        Severity::Warning => miette::Severity::Warning,
    };

    miette::miette!(
        severity = severity,
        labels = vec![LabeledSpan::at(
            diagnostic.span.start..diagnostic.span.end,
            "this token"
        )],
        "{}",
        diagnostic.message
    )
    .with_source_code(NamedSource::new(path.to_string_lossy(), source.to_string()))
}
