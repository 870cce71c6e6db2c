//! Planet Diagnostics
//!
//! 检查器的诊断模型：既能交给语言服务器转换成 LSP 诊断，
//! 也能在终端里带源码上下文输出。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Info/Hint）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 带源码上下文的诊断输出器
//! - [`Span`] - 源码位置信息（字节偏移）
//!
//! # 示例
//!
//! ```rust
//! use planet_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Suggestion};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::warning("mars is a planet", 0..4)
//!         .with_source("PlanetChecker")
//!         .with_suggestion(Suggestion::new("capitalize it").with_replacement("Mars")),
//! );
//!
//! assert_eq!(sink.warning_count(), 1);
//!
//! let report = Emitter::without_colors()
//!     .render_with_source(&sink.diagnostics()[0], "notes.txt", "mars")
//!     .unwrap();
//! assert!(report.contains("mars is a planet"));
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{Span, SpanExt};
