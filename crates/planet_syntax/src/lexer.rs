use logos::Logos;

/// 扫描用的词法单元
///
/// 非单词字符全部跳过，`Word` 总是吞下完整的一段单词字符，
/// 所以关键字只会以整词的形式出现，是否为关键字交给 [`crate::keywords::is_planet`]。
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[^A-Za-z0-9_]+")]
pub enum Token {
    #[regex(r"[A-Za-z0-9_]+")]
    Word,
}
