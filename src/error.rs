//! エラーハンドリングモジュール
//!
//! 文法生成の全工程で使用されるエラー型を提供します。
//! 失敗はすべて致命的で、ローカルな回復は行いません。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 文法生成の統一エラー型
#[derive(Error, Debug)]
pub enum LexGenError {
    /// ファイルの読み書きに失敗
    #[error("ファイル操作エラー: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// パスを持たない出力先への書き込みに失敗
    #[error("書き込みエラー: {0}")]
    Write(#[from] io::Error),
}

impl LexGenError {
    /// パス付きのI/Oエラーを作成
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LexGenError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 文法生成の結果型
pub type LexGenResult<T> = Result<T, LexGenError>;
