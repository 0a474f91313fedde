//! トークン規則行の分類

/// 字句規則ファイルの1行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRuleLine<'a> {
    raw: &'a str,
}

impl<'a> TokenRuleLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// 改行を含む元のテキスト
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// トークン名を取り出す
    ///
    /// 前後の空白を除いた行が空でなく、先頭がASCII大文字の場合のみ
    /// トークン定義行とみなし、最初の`:`より前の部分を名前とします。
    /// コメント行・空行・継続行は`None`になります。
    pub fn token_name(&self) -> Option<&'a str> {
        let trimmed = self.raw.trim();
        let first = trimmed.chars().next()?;
        if !first.is_ascii_uppercase() {
            return None;
        }

        let head = match trimmed.find(':') {
            Some(idx) => &trimmed[..idx],
            None => trimmed,
        };
        Some(head.trim())
    }
}

/// テキストを改行を保持したまま行に分割
pub fn split_lines(text: &str) -> Vec<TokenRuleLine<'_>> {
    text.split_inclusive('\n').map(TokenRuleLine::new).collect()
}
