//! ファイルシステム抽象化
//!
//! 拡張スキャン、ブートストラップページの書き出し、静的ファイルの解決で使う
//! ファイル操作の抽象化レイヤー。テスト時に MockFs を注入できる。

use crate::error::{Result, ShellError};
use crate::path_ext::PathExt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsFileType {
    File,
    Dir,
    Symlink,
}

/// ファイルシステム抽象化のための独自 DirEntry
#[derive(Debug, Clone)]
pub struct FsDirEntry {
    pub path: PathBuf,
    pub file_type: FsFileType,
}

impl FsDirEntry {
    /// エントリ名（UTF-8 に変換できない場合は None）
    pub fn name(&self) -> Option<&str> {
        self.path.file_name_str()
    }

    /// ディレクトリかどうか
    pub fn is_dir(&self) -> bool {
        self.file_type == FsFileType::Dir
    }

    /// シンボリックリンクかどうか
    pub fn is_symlink(&self) -> bool {
        self.file_type == FsFileType::Symlink
    }
}

/// ファイルシステム操作を抽象化するトレイト
///
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが存在するか（シンボリックリンク追従）
    fn exists(&self, path: &Path) -> bool;

    /// ディレクトリかどうか（シンボリックリンク追従）
    fn is_dir(&self, path: &Path) -> bool;

    /// ファイル内容をバイト列で読み込み
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// ファイル内容を読み込み
    ///
    /// UTF-8 として不正なら `InvalidData` の IO エラー。
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// シンボリックリンクを解決した絶対パス
    ///
    /// 存在しないパスは Err。
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// 一時ファイル + リネームで書き込み
    ///
    /// 読み手から見えるのは旧内容か新内容のどちらかのみ。同時に書かれた場合は後勝ち。
    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// ディレクトリ内のエントリを取得
    ///
    /// - 順序は未定義
    /// - symlink_metadata を使用（シンボリックリンク非追従）
    /// - 引数がディレクトリでない場合は Err
    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>>;

    /// ディレクトリを再帰的に作成
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// ファイル・ディレクトリ・シンボリックリンクを削除
    ///
    /// - リンクはリンク自体のみ削除（リンク先は残す）
    /// - 存在しない場合は Ok(())
    fn remove(&self, path: &Path) -> Result<()>;

    /// ディレクトリを再帰的にコピー
    ///
    /// - 宛先ディレクトリにマージ（既存ファイルは上書き）
    /// - 同一/子孫パスへのコピーは Err
    fn copy_dir(&self, src: &Path, dst: &Path) -> Result<()>;

    /// ディレクトリへのシンボリックリンクを作成
    fn symlink_dir(&self, target: &Path, link: &Path) -> Result<()>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        Ok(std::fs::canonicalize(path)?)
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content)?;
        temp_file.flush()?;

        // Windows では既存ファイルがあると persist が失敗することがある
        match temp_file.persist(path) {
            Ok(_) => Ok(()),
            Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => {
                let _ = std::fs::remove_file(path);
                e.file.persist(path).map_err(|e| e.error)?;
                Ok(())
            }
            Err(e) => Err(e.error.into()),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let metadata = entry.path().symlink_metadata()?;
            let file_type = if metadata.is_symlink() {
                FsFileType::Symlink
            } else if metadata.is_dir() {
                FsFileType::Dir
            } else {
                FsFileType::File
            };
            entries.push(FsDirEntry {
                path: entry.path(),
                file_type,
            });
        }
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let metadata = match std::fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        if metadata.is_dir() {
            std::fs::remove_dir_all(path)?;
        } else {
            remove_file_or_link(path)?;
        }
        Ok(())
    }

    fn copy_dir(&self, src: &Path, dst: &Path) -> Result<()> {
        // 同一/子孫パスチェック
        if let (Ok(src_canonical), Ok(dst_canonical)) = (src.canonicalize(), dst.canonicalize()) {
            if dst_canonical.starts_with(&src_canonical) {
                return Err(ShellError::InvalidArgument(
                    "Cannot copy directory into itself or its subdirectory".into(),
                ));
            }
        }
        copy_dir_recursive(src, dst)
    }

    #[cfg(unix)]
    fn symlink_dir(&self, target: &Path, link: &Path) -> Result<()> {
        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::os::unix::fs::symlink(target, link)?;
        Ok(())
    }

    #[cfg(windows)]
    fn symlink_dir(&self, target: &Path, link: &Path) -> Result<()> {
        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::os::windows::fs::symlink_dir(target, link)?;
        Ok(())
    }
}

/// ファイルまたはリンクを削除
///
/// Windows のディレクトリリンクは remove_dir でしか消せない。
fn remove_file_or_link(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        #[cfg(windows)]
        Err(_) => std::fs::remove_dir(path),
        #[cfg(not(windows))]
        Err(e) => Err(e),
    }
}

/// ディレクトリを再帰的にコピー
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
