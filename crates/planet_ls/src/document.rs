//! Document - 打开的文档

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

/// 服务端记录的文档状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 完整文本
    pub text: String,
    /// 客户端给出的版本号
    pub version: i32,
}

/// 按 URI 索引的打开文档表
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开或整体替换文档
    pub fn upsert(&self, uri: Url, text: String, version: i32) {
        self.documents.insert(uri, Document { text, version });
    }

    /// 关闭文档，返回之前的内容
    pub fn close(&self, uri: &Url) -> Option<Document> {
        self.documents.remove(uri).map(|(_, document)| document)
    }

    pub fn get(&self, uri: &Url) -> Option<Document> {
        self.documents.get(uri).map(|document| document.clone())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
