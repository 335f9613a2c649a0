//! Path 拡張トレイト
//!
//! 標準ライブラリの `Path` に便利メソッドを追加する。

use std::path::{Component, Path, PathBuf};

/// Path の拡張トレイト
pub trait PathExt {
    /// `.` / `..` を字句的に畳み込んだ絶対パスを返す
    ///
    /// - 相対パスはカレントディレクトリ基準で絶対化する
    /// - ファイルシステムには触れない（存在しないパスでもよい）
    /// - シンボリックリンクは解決しない
    /// - ルートより上への `..` はルートで止まる
    fn absolutize(&self) -> PathBuf;

    /// 末尾セグメントを UTF-8 文字列として取得
    fn file_name_str(&self) -> Option<&str>;
}

impl PathExt for Path {
    fn absolutize(&self) -> PathBuf {
        let base = if self.is_absolute() {
            PathBuf::new()
        } else {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
        };
        normalize_lexically(&base.join(self))
    }

    fn file_name_str(&self) -> Option<&str> {
        self.file_name().and_then(|n| n.to_str())
    }
}

/// コンポーネントを走査して `.` と `..` を畳み込む
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // ルート（またはプレフィックス）自体は pop しない
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            Component::Normal(s) => out.push(s),
        }
    }
    out
}

/// URL パスを `/` で結合する
///
/// 各セグメントの前後の `/` を除去してから結合する。`base` の先頭 `/` は保持。
pub fn url_join(base: &str, parts: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in parts {
        let part = part.trim_matches('/');
        if part.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(part);
    }
    if url.is_empty() {
        "/".to_string()
    } else {
        url
    }
}

#[cfg(test)]
#[path = "path_ext_test.rs"]
mod tests;
