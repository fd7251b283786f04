//! Choreo Language Server binary entry point
//!
//! Run with: choreo-lsp
//!
//! The LSP communicates via stdin/stdout using the Language Server Protocol.

use choreo::lsp::ChoreoLanguageServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(ChoreoLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;
}
