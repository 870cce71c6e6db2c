//! Planet Syntax
//!
//! 在文本中查找小写行星名的扫描器。
//!
//! # 核心类型
//!
//! - [`Match`] - 一次关键字命中（原文与起始字符偏移）
//! - [`scan`] - 从左到右扫描整段文本，最多返回 [`MAX_MATCHES`] 个命中
//! - [`capitalize`] - 生成首字母大写的建议写法
//!
//! # 示例
//!
//! ```rust
//! use planet_syntax::{capitalize, scan};
//!
//! let matches = scan("pluto is a planet");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].value, "pluto");
//! assert_eq!(matches[0].offset, 0);
//! assert_eq!(capitalize(&matches[0].value), "Pluto");
//! ```

pub mod keywords;
pub mod lexer;
pub mod scanner;
pub mod suggest;

// 重新导出核心类型
pub use keywords::{is_planet, is_word_char, PLANETS};
pub use lexer::Token;
pub use scanner::{scan, Match, MAX_MATCHES};
pub use suggest::capitalize;
