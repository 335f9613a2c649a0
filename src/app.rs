//! 起動時の組み立て
//!
//! パス解決 → 拡張走査 → ベース設定構築 → ブートストラップページ書き出し、を
//! 一度だけ行い、以後のリクエストで共有する状態を持つ。

use crate::config::{FrontendPaths, ShellConfig};
use crate::error::Result;
use crate::extension::{discover_build_descriptors, ExtensionScanner};
use crate::fs::FileSystem;
use crate::guard::RootSet;
use crate::page::{
    build_base_config, materialize, BootstrapLayout, LoginAvailability, PageConfig, PageTemplate,
    StaticSettings,
};
use crate::session::LoginProviderRegistry;
use crate::state::FrontendState;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// 配信中のフロントエンド
pub struct FrontendApp {
    fs: Arc<dyn FileSystem>,
    settings: StaticSettings,
    paths: FrontendPaths,
    frontend_dir: PathBuf,
    frontend_roots: RootSet,
    extension_roots: RootSet,
    layout: BootstrapLayout,
    state: FrontendState,
}

impl FrontendApp {
    /// 起動処理
    ///
    /// # Errors
    /// - フロントエンドルートが見つからない: `StartupConfiguration`
    /// - 拡張の package.json が不正: `MalformedPackage`
    /// - `_build` のない拡張がある: `MissingBuildInfo`
    /// - テンプレートが読めない・描画できない
    pub fn register(
        config: &ShellConfig,
        fs: Arc<dyn FileSystem>,
        login: &dyn LoginProviderRegistry,
    ) -> Result<Self> {
        let paths = config.paths()?;
        let frontend_dir = paths.resolve_frontend_dir(fs.as_ref())?;
        paths.ensure_extensions_dir(fs.as_ref())?;
        info!(
            frontend = %frontend_dir.display(),
            extensions = %paths.extensions_dir.display(),
            "frontend configured"
        );

        let federated_extensions =
            discover_build_descriptors(fs.as_ref(), &[&paths.extensions_dir])?;
        let base_config = build_base_config(
            &config.page,
            LoginAvailability::from_registry(login),
            federated_extensions,
        );

        let layout = BootstrapLayout::new(&frontend_dir);
        let template = PageTemplate::load(fs.as_ref(), &layout.template_source())?;
        let state = FrontendState::new(base_config, template);
        materialize(fs.as_ref(), &layout, &state)?;

        Ok(Self {
            frontend_roots: RootSet::new([&frontend_dir, &paths.global_frontend_dir]),
            extension_roots: RootSet::new([&paths.extensions_dir]),
            settings: config.page.clone(),
            fs,
            paths,
            frontend_dir,
            layout,
            state,
        })
    }

    /// 拡張を走査し直してベース設定の拡張リストを差し替える
    ///
    /// 差し替え後のスナップショットを返す。
    pub fn refresh_extensions(&self) -> Result<Arc<PageConfig>> {
        let federated_extensions =
            discover_build_descriptors(self.fs.as_ref(), &[&self.paths.extensions_dir])?;
        let updated = self
            .state
            .base_config
            .snapshot()
            .with_extensions(federated_extensions);
        self.state.base_config.replace(updated);
        Ok(self.state.base_config.snapshot())
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn settings(&self) -> &StaticSettings {
        &self.settings
    }

    pub fn paths(&self) -> &FrontendPaths {
        &self.paths
    }

    /// 配信中のフロントエンドルート
    pub fn frontend_dir(&self) -> &Path {
        &self.frontend_dir
    }

    /// フロントエンド配下のファイルに使う RootSet
    pub fn frontend_roots(&self) -> &RootSet {
        &self.frontend_roots
    }

    /// 拡張ルートだけの RootSet
    pub fn extension_roots(&self) -> &RootSet {
        &self.extension_roots
    }

    /// 拡張アセットの配信に使う RootSet
    ///
    /// 拡張ルートに、現在インストールされている各パッケージディレクトリを加える。
    /// develop でリンクされたパッケージは実パスがルート外にあるため、
    /// パッケージ単位で許可する。
    pub fn extension_asset_roots(&self) -> Result<RootSet> {
        let registry =
            ExtensionScanner::new(self.fs.as_ref()).scan(&[&self.paths.extensions_dir])?;
        Ok(self
            .extension_roots
            .with_roots(registry.values().map(|d| &d.package_directory)))
    }

    pub fn layout(&self) -> &BootstrapLayout {
        &self.layout
    }

    pub fn state(&self) -> &FrontendState {
        &self.state
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
