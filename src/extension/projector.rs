use super::descriptor::ExtensionRegistry;
use crate::error::{Result, ShellError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// ブートストラップページに渡す拡張 1 件分のビルド情報
///
/// `jupyterlab._build` の中身に `name` を差し込んだもの。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub build: Map<String, Value>,
}

/// レジストリをビルド記述子リストへ投影する
///
/// - 順序はレジストリの挿入順（ソートしない）
/// - `_build` に `name` があっても記述子自身の名前で上書きする
///
/// # Errors
/// `_build` を持たない拡張が 1 件でもあれば `MissingBuildInfo`。部分リストは返さない。
pub fn project(registry: &ExtensionRegistry) -> Result<Vec<BuildDescriptor>> {
    registry
        .iter()
        .map(|(name, descriptor)| {
            let mut build = descriptor
                .plugin_metadata
                .build
                .clone()
                .ok_or_else(|| ShellError::MissingBuildInfo(name.clone()))?;
            build.remove("name");
            Ok(BuildDescriptor {
                name: descriptor.name.clone(),
                build,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "projector_test.rs"]
mod tests;
