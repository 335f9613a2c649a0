//! ブートストラップページの描画と静的ファイルへの書き出し

use super::config::PageConfig;
use super::template::PageTemplate;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::session::Profile;
use crate::state::{FrontendSettings, FrontendState};
use std::path::{Path, PathBuf};
use tracing::info;

/// テンプレートソース（フロントエンドルートからの相対）
pub const TEMPLATE_SOURCE: &str = "static/index.html.j2";

/// 書き出し先のブートストラップページ
pub const BOOTSTRAP_PAGE: &str = "static/index.html";

/// 任意のフロントエンド設定
pub const SETTINGS_FILE: &str = "templates/settings.json";

/// フロントエンドルート配下のブートストラップ関連ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapLayout {
    frontend_dir: PathBuf,
}

impl BootstrapLayout {
    pub fn new(frontend_dir: impl Into<PathBuf>) -> Self {
        Self {
            frontend_dir: frontend_dir.into(),
        }
    }

    pub fn template_source(&self) -> PathBuf {
        self.frontend_dir.join(TEMPLATE_SOURCE)
    }

    pub fn bootstrap_page(&self) -> PathBuf {
        self.frontend_dir.join(BOOTSTRAP_PAGE)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.frontend_dir.join(SETTINGS_FILE)
    }
}

/// ページ設定をテンプレートで描画する
///
/// プロフィールがあれば `logged_in_user_profile` を加えた派生設定で描画する。
/// `config` 自体は変更しない。
pub fn render(
    config: &PageConfig,
    profile: Option<&Profile>,
    template: &PageTemplate,
) -> Result<String> {
    match profile {
        Some(profile) => template.render(&config.with_profile(profile.to_compact_json()?)),
        None => template.render(config),
    }
}

/// テンプレートを読み直してベース設定で描画し、静的ファイルへ書き出す
///
/// 同時に呼ばれても内容はベース設定から決まるので後勝ちでよい。
/// settings.json があれば読み込んで共有状態を差し替える。
pub fn materialize(
    fs: &dyn FileSystem,
    layout: &BootstrapLayout,
    state: &FrontendState,
) -> Result<PathBuf> {
    let template = PageTemplate::load(fs, &layout.template_source())?;
    let config = state.base_config.snapshot().without_profile();
    let rendered = template.render(&config)?;

    let page = layout.bootstrap_page();
    fs.write_atomic(&page, rendered.as_bytes())?;
    state.template.replace(template);
    info!(path = %page.display(), "bootstrap page written");

    if let Some(settings) = load_settings(fs, &layout.settings_file())? {
        state.settings.replace(settings);
        info!("frontend settings loaded");
    }

    Ok(page)
}

/// 静的ブートストラップページがなければ書き出す
pub fn ensure_materialized(
    fs: &dyn FileSystem,
    layout: &BootstrapLayout,
    state: &FrontendState,
) -> Result<PathBuf> {
    let page = layout.bootstrap_page();
    if fs.exists(&page) {
        return Ok(page);
    }
    materialize(fs, layout, state)
}

fn load_settings(fs: &dyn FileSystem, path: &Path) -> Result<Option<FrontendSettings>> {
    if !fs.exists(path) {
        return Ok(None);
    }
    let content = fs.read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;
