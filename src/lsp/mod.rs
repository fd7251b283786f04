//! Choreo Language Server Protocol (LSP) implementation
//!
//! Provides IDE features:
//! - Real-time parse diagnostics
//! - Hover information (block/token kind under the cursor)
//! - Keyword completions
//!
//! ## Modules
//!
//! - `backend` - The tower-lsp server implementation
//! - `diagnostics` - Offset/position conversion and diagnostic mapping

pub mod backend;
pub mod diagnostics;

pub use backend::ChoreoLanguageServer;
