//! Emitter - 诊断输出器
//!
//! 用 ariadne 把诊断连同源码上下文输出到终端

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;
use crate::span::SpanExt;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出到 stdout
    pub fn emit_with_source(
        &self,
        diagnostic: &Diagnostic,
        file_name: &str,
        source: &str,
    ) -> io::Result<()> {
        print!("{}", self.render_with_source(diagnostic, file_name, source)?);
        Ok(())
    }

    /// 格式化带源码上下文的诊断
    pub fn render_with_source(
        &self,
        diagnostic: &Diagnostic,
        file_name: &str,
        source: &str,
    ) -> io::Result<String> {
        // ariadne 按字符计算偏移
        let range = diagnostic.span.to_char_range(source);
        let (kind, color) = match diagnostic.level {
            DiagnosticLevel::Error => (ReportKind::Error, Color::Red),
            DiagnosticLevel::Warning => (ReportKind::Warning, Color::Yellow),
            DiagnosticLevel::Info | DiagnosticLevel::Hint => (ReportKind::Advice, Color::Blue),
        };

        let label_message = match &diagnostic.source {
            Some(tag) => format!("reported by {}", tag),
            None => diagnostic.level.name().to_string(),
        };

        let mut report = Report::build(kind, file_name, range.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(
                Label::new((file_name, range))
                    .with_message(label_message)
                    .with_color(color),
            );

        for suggestion in &diagnostic.suggestions {
            let help = match &suggestion.replacement {
                Some(replacement) => format!("{} (try: {})", suggestion.message, replacement),
                None => suggestion.message.clone(),
            };
            report = report.with_help(help);
        }

        let mut buf = Vec::new();
        report
            .finish()
            .write((file_name, Source::from(source)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
