//! 結合文法の組み立て
//!
//! 既定モードの規則とテンプレート文字列の断片を1つの字句文法にまとめ、
//! 既定モードの各トークンから`StrExpr`モードを機械的に派生させます。
//!
//! 出力は次の3つの領域を順に書き込みます。
//!
//! 1. `lexer grammar ZggLexer;`ヘッダー
//! 2. 既定モードの2行目以降とテンプレート文字列の断片（そのまま）
//! 3. `mode StrExpr;`ブロック

use super::layout::GrammarLayout;
use super::rule::{split_lines, TokenRuleLine};
use super::tokens::DefaultTokenSet;
use crate::error::{LexGenError, LexGenResult};
use log::{debug, info};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// 結合後の文法名
pub const GRAMMAR_NAME: &str = "ZggLexer";
/// 派生モード名
pub const DERIVED_MODE: &str = "StrExpr";

/// 生成結果の概要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// 派生規則を出力した順のトークン名
    pub tokens: Vec<String>,
    pub max_name_len: usize,
    /// ヘッダー行を除いてコピーした行数
    pub passthrough_lines: usize,
    pub bytes_written: usize,
}

/// 出力先を所有する文法ビルダー
pub struct GrammarAssembler<W: Write> {
    out: W,
    tokens: DefaultTokenSet,
    passthrough_lines: usize,
    bytes_written: usize,
}

impl<W: Write> GrammarAssembler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tokens: DefaultTokenSet::new(),
            passthrough_lines: 0,
            bytes_written: 0,
        }
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.bytes_written += text.len();
        Ok(())
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.emit(&format!("lexer grammar {};\n", GRAMMAR_NAME))
    }

    /// 規則行をそのまま書き出す
    pub fn write_passthrough(&mut self, lines: &[TokenRuleLine<'_>]) -> io::Result<()> {
        for line in lines {
            self.emit(line.raw())?;
        }
        self.passthrough_lines += lines.len();
        Ok(())
    }

    /// テンプレート文字列の断片を区切りなしで追加
    pub fn write_include(&mut self, fragment: &str) -> io::Result<()> {
        self.emit(fragment)
    }

    pub fn collect_tokens(&mut self, lines: &[TokenRuleLine<'_>]) {
        self.tokens = DefaultTokenSet::from_lines(lines);
        debug!(
            "classified {} tokens (longest name: {})",
            self.tokens.len(),
            self.tokens.max_name_len()
        );
    }

    pub fn tokens(&self) -> &DefaultTokenSet {
        &self.tokens
    }

    /// `StrExpr`モードのブロックを書き出す
    pub fn write_mode_block(&mut self) -> io::Result<()> {
        self.emit(&format!("\n\nmode {};\n\n", DERIVED_MODE))?;
        let max_name_len = self.tokens.max_name_len();
        for rule in self.tokens.derived_rules() {
            self.emit(&rule.render(DERIVED_MODE, max_name_len))?;
        }
        Ok(())
    }

    /// フラッシュして出力先と概要を返す
    pub fn finish(mut self) -> io::Result<(W, GenerationReport)> {
        self.out.flush()?;
        let report = GenerationReport {
            tokens: self.tokens.names().map(str::to_string).collect(),
            max_name_len: self.tokens.max_name_len(),
            passthrough_lines: self.passthrough_lines,
            bytes_written: self.bytes_written,
        };
        Ok((self.out, report))
    }
}

/// 先頭の文法宣言行を除いた本体
fn body<'a, 'b>(lines: &'b [TokenRuleLine<'a>]) -> &'b [TokenRuleLine<'a>] {
    lines.get(1..).unwrap_or(&[])
}

/// メモリ上の入力から任意の出力先へ文法を生成
pub fn assemble_to_writer<W: Write>(
    default_mode: &str,
    template_string: &str,
    out: W,
) -> LexGenResult<(W, GenerationReport)> {
    let lines = split_lines(default_mode);
    let body = body(&lines);

    let mut assembler = GrammarAssembler::new(out);
    assembler.write_header()?;
    assembler.write_passthrough(body)?;
    assembler.write_include(template_string)?;
    assembler.collect_tokens(body);
    assembler.write_mode_block()?;
    Ok(assembler.finish()?)
}

/// メモリ上で生成して文字列として返す
pub fn render(default_mode: &str, template_string: &str) -> LexGenResult<String> {
    let (buf, _) = assemble_to_writer(default_mode, template_string, Vec::new())?;
    // 入力がすべて`&str`なので出力も常にUTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// ファイルから読み込み、出力ファイルへ文法を生成
///
/// どの段階で失敗しても即座に中断します。書き込み中の失敗では
/// 途中までの出力ファイルが残ります。
pub fn assemble(
    default_mode_path: &Path,
    template_string_path: &Path,
    output_path: &Path,
) -> LexGenResult<GenerationReport> {
    debug!("loading {}", default_mode_path.display());
    let default_mode = read(default_mode_path)?;
    let lines = split_lines(&default_mode);
    let body = body(&lines);

    let file = File::create(output_path).map_err(|e| LexGenError::io(output_path, e))?;
    let write_err = |e: io::Error| LexGenError::io(output_path, e);
    let mut assembler = GrammarAssembler::new(BufWriter::new(file));

    debug!("writing header and {} passthrough lines", body.len());
    assembler.write_header().map_err(write_err)?;
    assembler.write_passthrough(body).map_err(write_err)?;

    debug!("including {}", template_string_path.display());
    let template_string = read(template_string_path)?;
    assembler.write_include(&template_string).map_err(write_err)?;

    assembler.collect_tokens(body);
    assembler.write_mode_block().map_err(write_err)?;
    let (_, report) = assembler.finish().map_err(write_err)?;

    info!(
        "generated {} ({} derived rules, {} bytes)",
        output_path.display(),
        report.tokens.len(),
        report.bytes_written
    );
    Ok(report)
}

/// 既定の配置で生成
pub fn assemble_layout(layout: &GrammarLayout) -> LexGenResult<GenerationReport> {
    assemble(
        &layout.default_mode_path(),
        &layout.template_string_path(),
        &layout.output_path(),
    )
}

/// 生成済みファイルの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// 生成済みファイルが入力と一致しているか確認
pub fn check(layout: &GrammarLayout) -> LexGenResult<CheckOutcome> {
    let default_mode = read(&layout.default_mode_path())?;
    let template_string = read(&layout.template_string_path())?;
    let expected = render(&default_mode, &template_string)?;

    let output_path = layout.output_path();
    let outcome = match fs::read(&output_path) {
        Ok(actual) if actual == expected.as_bytes() => CheckOutcome::UpToDate,
        Ok(_) => CheckOutcome::Stale,
        Err(e) if e.kind() == io::ErrorKind::NotFound => CheckOutcome::Missing,
        Err(e) => return Err(LexGenError::io(output_path, e)),
    };
    debug!("{}: {:?}", output_path.display(), outcome);
    Ok(outcome)
}

/// 既定モードのファイルからトークン集合のみを収集
pub fn classify_file(default_mode_path: &Path) -> LexGenResult<DefaultTokenSet> {
    let default_mode = read(default_mode_path)?;
    let lines = split_lines(&default_mode);
    Ok(DefaultTokenSet::from_lines(body(&lines)))
}

fn read(path: &Path) -> LexGenResult<String> {
    fs::read_to_string(path).map_err(|e| LexGenError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_only_input() {
        let output = render("lexer grammar Default;\n", "").unwrap();
        assert_eq!(output, "lexer grammar ZggLexer;\n\n\nmode StrExpr;\n\n");
    }

    #[test]
    fn test_empty_input() {
        let output = render("", "").unwrap();
        assert_eq!(output, "lexer grammar ZggLexer;\n\n\nmode StrExpr;\n\n");
    }

    #[test]
    fn test_report_counts() {
        let default_mode = "lexer grammar Default;\nA: 'a';\n\n// c\nBB: 'b';\n";
        let (buf, report) = assemble_to_writer(default_mode, "", Vec::new()).unwrap();
        assert_eq!(report.tokens, vec!["A".to_string(), "BB".to_string()]);
        assert_eq!(report.max_name_len, 2);
        assert_eq!(report.passthrough_lines, 4);
        assert_eq!(report.bytes_written, buf.len());
    }

    #[test]
    fn test_first_line_never_classified() {
        let (_, report) = assemble_to_writer("HEADER: 'x';\nA: 'a';\n", "", Vec::new()).unwrap();
        assert_eq!(report.tokens, vec!["A".to_string()]);
    }

    #[test]
    fn test_write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = assemble_to_writer("lexer grammar D;\n", "", Broken);
        assert!(matches!(result, Err(LexGenError::Write(_))));
    }
}
