//! LineIndex - 偏移到行列的换算
//!
//! LSP 的列默认按 UTF-16 码元计算

use tower_lsp::lsp_types::Position;

/// 文档的行起始表
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// 每行起始的字节偏移，第一项总是 0
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// 建立行起始表，`\n`、`\r\n` 和单独的 `\r` 都算换行
    pub fn new(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }

        Self { text, line_starts }
    }

    /// 行数
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 字节偏移换算成位置，越界时收拢到文本末尾
    pub fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line];
        let character = self.text[start..offset].encode_utf16().count();

        Position::new(line as u32, character as u32)
    }
}
