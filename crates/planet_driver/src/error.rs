//! Check Errors
//!
//! 驱动层的错误类型。扫描本身不会失败，只有读取文件可能出错。

use std::path::PathBuf;
use thiserror::Error;

/// 检查错误
#[derive(Debug, Error)]
pub enum CheckError {
    /// IO 错误
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 检查结果类型
pub type CheckResult<T> = Result<T, CheckError>;
