//! Choreo version information.
//!
//! The version is exposed as a single constant so all subsystems (CLI,
//! language server info) agree on the same value.

/// The Choreo tooling version string (for example, `0.1.0-alpha.2`).
///
/// Taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time; prefer
/// this constant over repeating `env!("CARGO_PKG_VERSION")`.
pub const CHOREO_VERSION: &str = env!("CARGO_PKG_VERSION");
