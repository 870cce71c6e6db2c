//! Keywords - 关键字表
//!
//! 检查器要查找的固定小写关键字

/// 行星名列表（全部小写，顺序固定）
///
/// "jupyter" 按原样保留，不要改成 "jupiter"。
pub const PLANETS: [&str; 8] = [
    "pluto", "venus", "earth", "mars", "jupyter", "saturn", "neptune", "uranus",
];

/// 是否为关键字（区分大小写）
pub fn is_planet(word: &str) -> bool {
    PLANETS.contains(&word)
}

/// 是否为单词组成字符（ASCII 字母、数字或下划线）
///
/// 与 [`crate::lexer::Token::Word`] 的字符类保持一致。
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
