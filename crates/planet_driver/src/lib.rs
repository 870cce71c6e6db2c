//! Planet Driver
//!
//! 把扫描结果转换成诊断，并提供按文本或按文件检查的入口。

pub mod check;
pub mod error;

pub use check::{
    check_file, check_source, planet_diagnostic, planet_message, CheckOutput, CHECKER_SOURCE,
};
pub use error::{CheckError, CheckResult};
