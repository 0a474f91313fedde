//! StrExprモードでのアクション表

use std::borrow::Cow;

/// 既定の`type(<name>)`の代わりに使うアクション
///
/// `BLOCK_COMMENT`の値は先頭がカンマのまま出力されます。
pub const MODE_TAILS: [(&str, &str); 6] = [
    ("L_CURLY", "type(L_CURLY), pushMode(StrExpr)"),
    ("R_CURLY", "type(R_CURLY), popMode"),
    ("QUOTE", "type(QUOTE), pushMode(TemplateString)"),
    ("WS", "skip"),
    ("LINE_COMMENT", "skip"),
    ("BLOCK_COMMENT", ", skip"),
];

/// 表に登録されたアクションを検索
pub fn lookup(name: &str) -> Option<&'static str> {
    MODE_TAILS
        .iter()
        .find_map(|&(token, action)| (token == name).then_some(action))
}

/// トークンに対応するアクション文字列
pub fn action_for(name: &str) -> Cow<'static, str> {
    match lookup(name) {
        Some(action) => Cow::Borrowed(action),
        None => Cow::Owned(format!("type({})", name)),
    }
}
