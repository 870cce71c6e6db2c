//! Span - 源码位置信息
//!
//! 表示源代码中的位置范围

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 换算成字符偏移范围
    ///
    /// 越界的端点收拢到文本末尾。
    fn to_char_range(&self, source: &str) -> std::ops::Range<usize>;
}

impl SpanExt for Span {
    fn to_char_range(&self, source: &str) -> std::ops::Range<usize> {
        let start = char_offset(source, self.start);
        let end = char_offset(source, self.end).max(start);
        start..end
    }
}

fn char_offset(source: &str, byte: usize) -> usize {
    source
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}
