//! Scanner - 关键字扫描
//!
//! 从左到右查找整词、区分大小写的行星名

use crate::keywords::is_planet;
use crate::lexer::Token;
use logos::Logos;
use std::ops::Range;

/// 单次扫描最多返回的命中数
pub const MAX_MATCHES: usize = 100;

/// 一次关键字命中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// 命中的原文
    pub value: String,
    /// 起始位置（字符偏移，从 0 开始）
    pub offset: usize,
    /// 原文中的字节范围
    pub span: Range<usize>,
}

impl Match {
    /// 结束位置（字符偏移，不含）
    pub fn end_offset(&self) -> usize {
        self.offset + self.value.chars().count()
    }
}

/// 扫描整段文本，按出现顺序返回命中
///
/// 达到 [`MAX_MATCHES`] 后立即停止，后面的命中不会产生。
pub fn scan(text: &str) -> Vec<Match> {
    let mut lexer = Token::lexer(text);
    let mut matches = Vec::new();

    // 已数过字符的字节位置，以及它之前的字符数
    let mut cursor = 0;
    let mut chars = 0;

    while let Some(token) = lexer.next() {
        if token != Ok(Token::Word) || !is_planet(lexer.slice()) {
            continue;
        }

        let span = lexer.span();
        chars += text[cursor..span.start].chars().count();
        cursor = span.start;

        matches.push(Match {
            value: lexer.slice().to_string(),
            offset: chars,
            span,
        });

        if matches.len() == MAX_MATCHES {
            break;
        }
    }

    matches
}
