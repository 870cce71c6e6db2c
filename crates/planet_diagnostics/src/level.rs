//! DiagnosticLevel - 诊断级别
//!
//! 与 LSP 的四种严重级别一一对应

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    /// 行星检查器只产生这一级
    Warning,
    Info,
    Hint,
}

impl DiagnosticLevel {
    /// 报告里使用的名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Hint => "hint",
        }
    }
}
