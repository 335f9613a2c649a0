use std::path::PathBuf;
use thiserror::Error;

/// labshell 統一エラー型
#[derive(Debug, Error)]
pub enum ShellError {
    /// 存在しない、またはルート外のパス。どちらの検査で落ちたかは表に出さない
    #[error("Not found")]
    NotFound,

    #[error("Malformed package at {}: {reason}", path.display())]
    MalformedPackage { path: PathBuf, reason: String },

    #[error("Extension '{0}' has no build metadata (jupyterlab._build)")]
    MissingBuildInfo(String),

    #[error("Startup configuration error: {0}")]
    StartupConfiguration(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;

impl ShellError {
    /// ルーティング層へ返す HTTP ステータス
    ///
    /// NotFound 以外はすべてサーバー側の失敗として 500 を返す。
    pub fn status_code(&self) -> u16 {
        match self {
            ShellError::NotFound => 404,
            _ => 500,
        }
    }

    /// パッケージ記述子の不正をまとめて生成するヘルパー
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ShellError::MalformedPackage {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
