//! Check - 行星检查
//!
//! 每个命中生成一条警告，消息里带上首字母大写的建议写法

use crate::error::{CheckError, CheckResult};
use planet_diagnostics::{Diagnostic, DiagnosticSink, Suggestion};
use planet_syntax::{capitalize, scan, Match};
use std::path::Path;

/// 诊断的来源标记
pub const CHECKER_SOURCE: &str = "PlanetChecker";

/// 文件检查结果
#[derive(Debug)]
pub struct CheckOutput {
    /// 文件内容（非法 UTF-8 已替换）
    pub source: String,
    /// 检查产生的诊断
    pub sink: DiagnosticSink,
}

/// 诊断消息
pub fn planet_message(value: &str) -> String {
    format!(
        "{} is a planet. Might wanna capitalize it to \"{}\"",
        value,
        capitalize(value)
    )
}

/// 把一个命中转换成警告
pub fn planet_diagnostic(m: &Match) -> Diagnostic {
    let capitalized = capitalize(&m.value);
    Diagnostic::warning(planet_message(&m.value), m.span.clone())
        .with_source(CHECKER_SOURCE)
        .with_suggestion(
            Suggestion::new(format!("capitalize it to \"{}\"", capitalized))
                .with_replacement(capitalized),
        )
}

/// 检查一段文本
pub fn check_source(text: &str) -> DiagnosticSink {
    let matches = scan(text);
    tracing::debug!(matches = matches.len(), "scanned text");

    let mut sink = DiagnosticSink::new();
    sink.extend(matches.iter().map(planet_diagnostic));
    sink
}

/// 读取并检查一个文件
pub fn check_file(path: impl AsRef<Path>) -> CheckResult<CheckOutput> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source = String::from_utf8_lossy(&bytes).into_owned();
    let sink = check_source(&source);
    tracing::debug!(path = %path.display(), warnings = sink.len(), "checked file");

    Ok(CheckOutput { source, sink })
}
