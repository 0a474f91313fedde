//! 入出力ファイルの配置

use std::path::{Path, PathBuf};

/// 既定の作業ディレクトリ
pub const DEFAULT_DIR: &str = "parser";
pub const DEFAULT_MODE_FILE: &str = "DefaultMode.g4";
pub const TEMPLATE_STRING_FILE: &str = "TemplateString.g4";
pub const OUTPUT_FILE: &str = "ZggLexer.g4";

/// 入力2つと出力1つのファイル配置
///
/// ファイル名は固定で、変更できるのはディレクトリのみです。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarLayout {
    dir: PathBuf,
}

impl Default for GrammarLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}

impl GrammarLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn default_mode_path(&self) -> PathBuf {
        self.dir.join(DEFAULT_MODE_FILE)
    }

    pub fn template_string_path(&self) -> PathBuf {
        self.dir.join(TEMPLATE_STRING_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.join(OUTPUT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = GrammarLayout::default();
        assert_eq!(layout.default_mode_path(), Path::new("parser/DefaultMode.g4"));
        assert_eq!(layout.template_string_path(), Path::new("parser/TemplateString.g4"));
        assert_eq!(layout.output_path(), Path::new("parser/ZggLexer.g4"));
    }

    #[test]
    fn test_custom_dir() {
        let layout = GrammarLayout::new("/tmp/grammar");
        assert_eq!(layout.output_path(), Path::new("/tmp/grammar/ZggLexer.g4"));
    }
}
