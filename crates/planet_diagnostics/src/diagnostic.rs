//! Diagnostic - 诊断信息
//!
//! 检查器产生的一条诊断，总是落在文本的某个字节范围上

use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 修复建议
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// 建议消息
    pub message: String,
    /// 建议的替换内容（如果有）
    pub replacement: Option<String>,
}

impl Suggestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// 添加替换内容
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    /// 源码位置（字节偏移）
    pub span: Span,
    /// 产生诊断的检查器名称
    pub source: Option<String>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            source: None,
            suggestions: Vec::new(),
        }
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticLevel::Warning, message, span)
    }

    /// 设置来源标记
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// 添加建议
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::warning("mars is a planet", 0..4)
            .with_source("PlanetChecker")
            .with_suggestion(Suggestion::new("capitalize").with_replacement("Mars"));

        assert_eq!(diag.level, DiagnosticLevel::Warning);
        assert_eq!(diag.message, "mars is a planet");
        assert_eq!(diag.span, 0..4);
        assert_eq!(diag.source.as_deref(), Some("PlanetChecker"));
        assert_eq!(diag.suggestions.len(), 1);
        assert_eq!(diag.suggestions[0].replacement.as_deref(), Some("Mars"));
    }

    #[test]
    fn test_defaults_are_empty() {
        let diag = Diagnostic::warning("bare", 3..3);
        assert!(diag.source.is_none());
        assert!(diag.suggestions.is_empty());
    }
}
