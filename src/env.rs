use std::path::PathBuf;

/// インストールルートを上書きする環境変数
pub const HOME_VAR: &str = "LABSHELL_HOME";

/// 設定ファイルのパスを指定する環境変数
pub const CONFIG_VAR: &str = "LABSHELL_CONFIG";

/// ログフィルタを指定する環境変数
pub const LOG_VAR: &str = "LABSHELL_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// パスとして取得
    pub fn get_path(key: &str) -> Option<PathBuf> {
        Self::get(key).map(PathBuf::from)
    }
}
