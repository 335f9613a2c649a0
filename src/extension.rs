//! フロントエンド拡張の検出と投影
//!
//! 拡張ルート配下の package.json を走査してレジストリを作り、
//! ブートストラップページ用のビルド記述子リストへ変換する。

mod descriptor;
mod projector;
mod scanner;

pub use descriptor::{ExtensionDescriptor, ExtensionRegistry, PluginMetadata};
pub use projector::{project, BuildDescriptor};
pub use scanner::{ExtensionScanner, INSTALL_MANIFEST, PACKAGE_MANIFEST};

use crate::error::Result;
use crate::fs::FileSystem;
use std::path::Path;

/// 走査して即座にビルド記述子リストへ投影する
///
/// ページ要求ごとに呼ばれる。キャッシュはしない。
pub fn discover_build_descriptors<P: AsRef<Path>>(
    fs: &dyn FileSystem,
    extension_roots: &[P],
) -> Result<Vec<BuildDescriptor>> {
    let registry = ExtensionScanner::new(fs).scan(extension_roots)?;
    project(&registry)
}
