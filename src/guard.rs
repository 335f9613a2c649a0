//! 配信可能パスの封じ込め検査
//!
//! クライアントへ返すファイルは、シンボリックリンクを解決した実パスが
//! 設定済みルートのいずれか（こちらも実パス）と一致するか、その配下でなければならない。

use crate::fs::FileSystem;
use crate::path_ext::PathExt;
use std::path::{Path, PathBuf};

/// 配信を許可するルートディレクトリの集合
///
/// # 不変条件
///
/// - 各ルートは構築時に正規化済み（絶対パス、`.`/`..` なし）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSet {
    roots: Vec<PathBuf>,
}

impl RootSet {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut normalized: Vec<PathBuf> = Vec::new();
        for root in roots {
            let root = root.as_ref().absolutize();
            if !normalized.contains(&root) {
                normalized.push(root);
            }
        }
        Self { roots: normalized }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// ルートを追加した新しい集合
    pub fn with_roots<I, P>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let roots: Vec<PathBuf> = self
            .roots
            .iter()
            .cloned()
            .chain(extra.into_iter().map(|p| p.as_ref().to_path_buf()))
            .collect();
        Self::new(roots)
    }

    /// `candidate` がいずれかのルート自身、またはその配下か
    ///
    /// 判定はパスセグメント単位。`/srv/app` は `/srv/application` を含まない。
    /// ファイルシステムには触れない。
    pub fn contains(&self, candidate: &Path) -> bool {
        let candidate = candidate.absolutize();
        self.roots.iter().any(|root| candidate.starts_with(root))
    }

    /// 存在検査と封じ込め検査の両方を通ったパスを実パスで返す
    ///
    /// 字句上の封じ込めを先に評価し、ルート外のパスには存在確認すら行わない。
    /// 通ったものは実パス同士で再度判定するので、ルート外を指すリンクは弾かれる。
    pub fn servable(&self, fs: &dyn FileSystem, candidate: &Path) -> Option<PathBuf> {
        if !self.contains(candidate) {
            return None;
        }
        let real = fs.canonicalize(&candidate.absolutize()).ok()?;
        self.roots
            .iter()
            .filter_map(|root| fs.canonicalize(root).ok())
            .any(|root| real.starts_with(root))
            .then_some(real)
    }
}

/// `candidate` が `roots` のいずれかに含まれるか
pub fn is_contained(candidate: &Path, roots: &RootSet) -> bool {
    roots.contains(candidate)
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

#[cfg(test)]
#[path = "guard_proptests.rs"]
mod proptests;
