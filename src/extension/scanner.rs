//! 拡張ルートの走査
//!
//! 拡張は次のいずれかの配置で置かれる:
//!
//! - `<root>/<name>/package.json`（`@` で始まらない直下ディレクトリ）
//! - `<root>/@<scope>/<name>/package.json`（スコープ付きパッケージ）

use super::descriptor::{ExtensionDescriptor, ExtensionRegistry};
use crate::error::{Result, ShellError};
use crate::fs::FileSystem;
use glob::{MatchOptions, Pattern};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// パッケージ記述子ファイル名
pub const PACKAGE_MANIFEST: &str = "package.json";

/// インストールマニフェストファイル名（任意）
pub const INSTALL_MANIFEST: &str = "install.json";

const UNSCOPED_PACKAGE: &str = "[!@]*";
const SCOPE_DIR: &str = "@*";
const SCOPED_PACKAGE: &str = "*";

/// ドットで始まる隠しディレクトリはワイルドカードに一致させない
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// ディレクトリ名に対する配置パターン
struct LayoutPatterns {
    unscoped: Pattern,
    scope: Pattern,
    scoped: Pattern,
}

impl LayoutPatterns {
    fn compile() -> Result<Self> {
        let compile = |p: &str| {
            Pattern::new(p).map_err(|e| {
                ShellError::InvalidArgument(format!("invalid layout pattern '{}': {}", p, e))
            })
        };
        Ok(Self {
            unscoped: compile(UNSCOPED_PACKAGE)?,
            scope: compile(SCOPE_DIR)?,
            scoped: compile(SCOPED_PACKAGE)?,
        })
    }
}

/// 拡張スキャナ
///
/// ファイルシステムを読むだけでロックは取らない。呼び出しごとに新しい
/// レジストリを返すので、複数リクエストから同時に使ってよい。
pub struct ExtensionScanner<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> ExtensionScanner<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// 拡張ルートを順に走査してレジストリを作る
    ///
    /// # Behavior
    /// - 同名パッケージは最初に見つかったものだけを残す（マージしない）
    /// - ルート内の列挙順はファイルシステム依存
    /// - 存在しないルートは空として扱う
    ///
    /// # Errors
    /// いずれかの package.json が不正なら `MalformedPackage` で走査全体が失敗する。
    /// 部分的なレジストリは返さない。
    pub fn scan<P: AsRef<Path>>(&self, extension_roots: &[P]) -> Result<ExtensionRegistry> {
        let patterns = LayoutPatterns::compile()?;
        let mut registry = ExtensionRegistry::new();

        for root in extension_roots {
            let root = root.as_ref();
            for package_dir in candidate_dirs(self.fs, root, &patterns) {
                let manifest_path = package_dir.join(PACKAGE_MANIFEST);
                let content = self
                    .fs
                    .read_to_string(&manifest_path)
                    .map_err(|e| match e {
                        ShellError::Io(io) if io.kind() == std::io::ErrorKind::InvalidData => {
                            ShellError::malformed(&manifest_path, io.to_string())
                        }
                        other => other,
                    })?;
                let descriptor =
                    ExtensionDescriptor::parse(&content, &manifest_path, root, &package_dir)?;

                if registry.contains_key(&descriptor.name) {
                    debug!(
                        name = %descriptor.name,
                        path = %package_dir.display(),
                        "duplicate extension ignored"
                    );
                    continue;
                }

                let install_info = self.load_install_info(&package_dir);
                registry.insert(
                    descriptor.name.clone(),
                    descriptor.with_install_info(install_info),
                );
            }
        }

        Ok(registry)
    }

    /// install.json を読み込む
    ///
    /// 壊れている場合は警告を出してインストール情報なしとして扱う。
    /// 拡張自体は使えるので走査は止めない。
    fn load_install_info(&self, package_dir: &Path) -> Option<Map<String, Value>> {
        let install_path = package_dir.join(INSTALL_MANIFEST);
        if !self.fs.exists(&install_path) {
            return None;
        }

        let parsed = self
            .fs
            .read_to_string(&install_path)
            .and_then(|content| {
                serde_json::from_str::<Map<String, Value>>(&content).map_err(ShellError::from)
            });

        match parsed {
            Ok(info) => Some(info),
            Err(e) => {
                let err = ShellError::malformed(&install_path, e.to_string());
                warn!("{}; continuing without install metadata", err);
                None
            }
        }
    }
}

/// 候補パッケージディレクトリを遅延列挙する
///
/// 直下の非スコープディレクトリ → スコープ配下の 2 階層目、の順に連結する。
/// package.json を持つものだけが候補。
fn candidate_dirs<'a>(
    fs: &'a dyn FileSystem,
    root: &Path,
    patterns: &'a LayoutPatterns,
) -> impl Iterator<Item = PathBuf> + 'a {
    let unscoped = child_dirs(fs, root, &patterns.unscoped);
    let scoped = child_dirs(fs, root, &patterns.scope)
        .flat_map(move |scope_dir| child_dirs(fs, &scope_dir, &patterns.scoped));

    unscoped
        .chain(scoped)
        .filter(move |dir| fs.exists(&dir.join(PACKAGE_MANIFEST)))
}

/// `dir` 直下で名前が `pattern` に一致するディレクトリ
///
/// 読めないディレクトリは空として扱う。リンクはリンク先がディレクトリなら含む。
fn child_dirs<'a>(
    fs: &'a dyn FileSystem,
    dir: &Path,
    pattern: &'a Pattern,
) -> impl Iterator<Item = PathBuf> + 'a {
    fs.read_dir(dir)
        .unwrap_or_default()
        .into_iter()
        .filter(move |entry| {
            entry
                .name()
                .map(|name| pattern.matches_with(name, MATCH_OPTIONS))
                .unwrap_or(false)
        })
        .filter(move |entry| entry.is_dir() || (entry.is_symlink() && fs.is_dir(&entry.path)))
        .map(|entry| entry.path)
}

#[cfg(test)]
#[path = "scanner_test.rs"]
mod tests;
