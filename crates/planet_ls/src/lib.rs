//! Planet Language Server
//!
//! 全量同步文档，每次打开或修改都重新扫描整篇文本并发布诊断。

pub mod convert;
pub mod document;
pub mod line_index;

use convert::document_diagnostics;
use document::DocumentStore;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

pub use line_index::LineIndex;

/// 语言服务器名称
pub const SERVER_NAME: &str = "planet-ls";

#[derive(Debug)]
pub struct Backend {
    client: Client,
    documents: DocumentStore,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
        }
    }

    /// 当前打开的文档
    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    /// 记录新内容并发布诊断
    async fn on_change(&self, uri: Url, text: String, version: i32) {
        let diagnostics = document_diagnostics(&text);
        tracing::debug!(%uri, version, count = diagnostics.len(), "publishing diagnostics");

        self.documents.upsert(uri.clone(), text, version);
        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("received initialize request");
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("server initialized and ready");
        self.client
            .log_message(MessageType::INFO, "Planet language server initialized!")
            .await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let document = params.text_document;
        self.on_change(document.uri, document.text, document.version)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        // 全量同步：最后一个变更就是完整文本
        let Some(change) = params.content_changes.into_iter().last() else {
            tracing::warn!(%uri, "change notification without content");
            return;
        };

        self.on_change(uri, change.text, params.text_document.version)
            .await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.close(&uri);
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!("shutting down");
        Ok(())
    }
}

/// 通过标准输入输出运行服务器
pub async fn run_server() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}

/// 连接到客户端监听的端口并运行服务器
pub async fn run_socket(port: u16) -> std::io::Result<()> {
    let stream = tokio::net::TcpStream::connect(("127.0.0.1", port)).await?;
    tracing::info!(port, "connected to client");

    let (read, write) = tokio::io::split(stream);
    let (service, socket) = LspService::new(Backend::new);
    Server::new(read, write, socket).serve(service).await;
    Ok(())
}
