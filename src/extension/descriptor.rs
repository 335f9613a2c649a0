use crate::error::{Result, ShellError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// 名前 → 拡張記述子。挿入順（= 走査順）を保持する
pub type ExtensionRegistry = IndexMap<String, ExtensionDescriptor>;

/// package.json の `jupyterlab` セクション
///
/// `_build` 以外のキーは中身を解釈せずに保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// ビルド成果物の情報（load / extension / style など）
    #[serde(rename = "_build", default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Map<String, Value>>,

    /// ビルド出力ディレクトリ（パッケージルートからの相対）
    #[serde(rename = "outputDir", default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// package.json のスキーマ（検証前）
#[derive(Debug, Deserialize)]
struct RawPackage {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    dependencies: Option<IndexMap<String, String>>,
    jupyterlab: Option<PluginMetadata>,
}

/// 検出された拡張パッケージ
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    /// 見つかった拡張ルート
    pub source_root: PathBuf,
    /// パッケージディレクトリ
    pub package_directory: PathBuf,
    /// 走査で見つかったものは常に false
    pub is_local: bool,
    pub dependencies: IndexMap<String, String>,
    pub plugin_metadata: PluginMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_info: Option<Map<String, Value>>,
}

impl ExtensionDescriptor {
    /// package.json の内容をパースして検証する
    ///
    /// # Errors
    /// JSON として不正、または `name` / `version` が欠けている場合は
    /// `MalformedPackage`。
    pub fn parse(
        content: &str,
        manifest_path: &Path,
        source_root: &Path,
        package_directory: &Path,
    ) -> Result<Self> {
        let raw: RawPackage = serde_json::from_str(content)
            .map_err(|e| ShellError::malformed(manifest_path, e.to_string()))?;

        let name = required(raw.name, "name", manifest_path)?;
        let version = required(raw.version, "version", manifest_path)?;

        Ok(Self {
            name,
            version,
            description: raw.description.unwrap_or_default(),
            source_root: source_root.to_path_buf(),
            package_directory: package_directory.to_path_buf(),
            is_local: false,
            dependencies: raw.dependencies.unwrap_or_default(),
            plugin_metadata: raw.jupyterlab.unwrap_or_default(),
            install_info: None,
        })
    }

    pub fn with_install_info(mut self, install_info: Option<Map<String, Value>>) -> Self {
        self.install_info = install_info;
        self
    }

    /// ビルド出力ディレクトリ（`outputDir` 未指定時は `labextension`）
    pub fn output_dir(&self) -> PathBuf {
        self.package_directory.join(
            self.plugin_metadata
                .output_dir
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_DIR),
        )
    }
}

/// `outputDir` 未指定時の出力ディレクトリ
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "labextension";

fn required(value: Option<String>, field: &str, manifest_path: &Path) -> Result<String> {
    value.ok_or_else(|| {
        ShellError::malformed(manifest_path, format!("missing required field `{}`", field))
    })
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod tests;
