//! Convert - 诊断转换
//!
//! 把检查器的诊断转换成 LSP 诊断

use crate::line_index::LineIndex;
use planet_diagnostics::{Diagnostic, DiagnosticLevel};
use planet_driver::check_source;
use tower_lsp::lsp_types::{self, DiagnosticSeverity, Range};

/// 级别对应的 LSP 严重程度
pub fn severity(level: DiagnosticLevel) -> DiagnosticSeverity {
    match level {
        DiagnosticLevel::Error => DiagnosticSeverity::ERROR,
        DiagnosticLevel::Warning => DiagnosticSeverity::WARNING,
        DiagnosticLevel::Info => DiagnosticSeverity::INFORMATION,
        DiagnosticLevel::Hint => DiagnosticSeverity::HINT,
    }
}

/// 转换单条诊断
pub fn to_lsp_diagnostic(diagnostic: &Diagnostic, index: &LineIndex<'_>) -> lsp_types::Diagnostic {
    let range = Range::new(
        index.position(diagnostic.span.start),
        index.position(diagnostic.span.end),
    );

    lsp_types::Diagnostic {
        range,
        severity: Some(severity(diagnostic.level)),
        source: diagnostic.source.clone(),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

/// 检查整篇文档并生成 LSP 诊断
pub fn document_diagnostics(text: &str) -> Vec<lsp_types::Diagnostic> {
    let index = LineIndex::new(text);
    check_source(text)
        .diagnostics()
        .iter()
        .map(|diagnostic| to_lsp_diagnostic(diagnostic, &index))
        .collect()
}
