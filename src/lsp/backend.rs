//! LSP (Language Server Protocol) backend implementation for Choreo

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use choreo_syntax::ast::{BranchKind, LeafKind, Node, Span};
use choreo_syntax::lexer::KEYWORDS;
use choreo_syntax::parser;

use crate::lsp::diagnostics::{position_to_offset, span_to_range, syntax_diagnostic_to_lsp};

/// Document state stored by the LSP
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub source: String,
    pub tree: Option<Node>,
    pub version: i32,
}

/// Choreo Language Server
pub struct ChoreoLanguageServer {
    client: Client,
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
}

impl ChoreoLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Parse a document snapshot and publish diagnostics.
    ///
    /// Every call re-parses the full text: parsing is cheap at this grammar's
    /// size and each invocation owns fresh state, so a newer snapshot simply
    /// replaces the stored one.
    async fn analyze_document(&self, uri: &Url, source: &str, version: i32) {
        let (tree, syntax_diagnostics) = parser::parse(source);

        let diagnostics: Vec<Diagnostic> = syntax_diagnostics
            .iter()
            .map(|d| syntax_diagnostic_to_lsp(d, source))
            .collect();

        tracing::debug!(
            uri = %uri,
            version,
            diagnostics = diagnostics.len(),
            "analyzed document"
        );

        // Store the tree for hover
        {
            let mut docs = self.documents.write().await;
            docs.insert(
                uri.clone(),
                DocumentState {
                    source: source.to_string(),
                    tree,
                    version,
                },
            );
        }

        // Publish diagnostics (even if empty, to clear old ones)
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(version))
            .await;
    }

    /// Find the block under a document offset.
    fn find_block_at_offset(tree: &Node, offset: usize) -> Option<BlockInfo> {
        let Node::Branch(root) = tree else {
            return None;
        };

        for child in root.children() {
            let span = child.span();
            if !(span.start <= offset && offset < span.end) {
                continue;
            }
            return Some(match child {
                Node::Branch(branch) => BlockInfo {
                    kind: match branch.kind {
                        BranchKind::Moves => "moves block",
                        BranchKind::Root => "document",
                    },
                    text: match branch.children().first() {
                        Some(Node::Leaf(kw)) => kw.text.clone(),
                        _ => String::new(),
                    },
                    span,
                },
                Node::Leaf(leaf) => BlockInfo {
                    kind: match leaf.kind {
                        LeafKind::LineComment => "line comment",
                        LeafKind::MovesKw => "keyword",
                        LeafKind::Unknown => "unknown token",
                    },
                    text: leaf.text.clone(),
                    span,
                },
            });
        }

        None
    }
}

/// Hover payload for the block under the cursor.
#[derive(Debug, Clone)]
struct BlockInfo {
    kind: &'static str,
    text: String,
    span: Span,
}

#[tower_lsp::async_trait]
impl LanguageServer for ChoreoLanguageServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Real-time diagnostics via text sync
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                // Hover support
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                // Keyword completions
                completion_provider: Some(CompletionOptions::default()),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "choreo-lsp".to_string(),
                version: Some(crate::version::CHOREO_VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Choreo LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let source = params.text_document.text;
        let version = params.text_document.version;

        self.analyze_document(&uri, &source, version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // We use FULL sync, so there's only one change with the full content
        if let Some(change) = params.content_changes.into_iter().next() {
            self.analyze_document(&uri, &change.text, version).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        // Remove document from cache
        let mut docs = self.documents.write().await;
        docs.remove(&uri);

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };
        let Some(tree) = &doc.tree else {
            return Ok(None);
        };
        let Some(offset) = position_to_offset(&doc.source, position) else {
            return Ok(None);
        };

        if let Some(info) = Self::find_block_at_offset(tree, offset) {
            let markdown = format!("```choreo\n{}\n```\n\n*{}*", info.text, info.kind);

            return Ok(Some(Hover {
                contents: HoverContents::Markup(MarkupContent {
                    kind: MarkupKind::Markdown,
                    value: markdown,
                }),
                range: Some(span_to_range(&doc.source, info.span)),
            }));
        }

        Ok(None)
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;

        let docs = self.documents.read().await;
        if docs.get(uri).is_none() {
            return Ok(None);
        }

        // Offer the keyword table; the lexer's table is the single source
        // of truth for reserved words.
        let items = KEYWORDS
            .iter()
            .map(|(spelling, _)| CompletionItem {
                label: spelling.to_string(),
                kind: Some(CompletionItemKind::KEYWORD),
                ..Default::default()
            })
            .collect();

        Ok(Some(CompletionResponse::Array(items)))
    }
}
