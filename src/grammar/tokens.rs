//! 既定モードのトークン集合

use super::rule::TokenRuleLine;
use super::tails;
use indexmap::IndexSet;
use serde::Serialize;

/// 既定モードから収集したトークン名
///
/// 初出順を保持するため、同じ入力からは常に同じ出力が得られます。
#[derive(Debug, Clone, Default)]
pub struct DefaultTokenSet {
    names: IndexSet<String>,
    max_name_len: usize,
}

impl DefaultTokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 行の列からトークンを収集
    pub fn from_lines<'a, 'b, I>(lines: I) -> Self
    where
        'a: 'b,
        I: IntoIterator<Item = &'b TokenRuleLine<'a>>,
    {
        let mut set = Self::new();
        for line in lines {
            if let Some(name) = line.token_name() {
                set.insert(name);
            }
        }
        set
    }

    /// トークン名を追加。既に存在する場合は`false`
    pub fn insert(&mut self, name: &str) -> bool {
        self.max_name_len = self.max_name_len.max(name_width(name));
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 最長のトークン名の長さ
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// StrExprモード用の派生規則
    pub fn derived_rules(&self) -> Vec<DerivedRule> {
        self.names
            .iter()
            .map(|name| DerivedRule {
                name: name.clone(),
                action: tails::action_for(name).into_owned(),
            })
            .collect()
    }
}

/// 派生モードの規則1つ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedRule {
    pub name: String,
    pub action: String,
}

impl DerivedRule {
    /// 規則行を生成
    ///
    /// `StrExpr_<name><pad>: <name><pad>-> <action>;`の形で、
    /// `<pad>`は`max_name_len - len(name) + 1`個の空白です。
    pub fn render(&self, mode: &str, max_name_len: usize) -> String {
        let padding = " ".repeat(max_name_len.saturating_sub(name_width(&self.name)) + 1);
        format!(
            "{mode}_{name}{padding}: {name}{padding}-> {action};\n",
            mode = mode,
            name = self.name,
            padding = padding,
            action = self.action,
        )
    }
}

fn name_width(name: &str) -> usize {
    name.chars().count()
}
