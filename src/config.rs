//! 設定ファイルとインストールパス
//!
//! 設定は TOML。ファイルがなくても全項目にデフォルトがある。

use crate::env::{EnvVar, CONFIG_VAR, HOME_VAR};
use crate::error::{Result, ShellError};
use crate::fs::FileSystem;
use crate::page::StaticSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// labshell の設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// インストールルート
    pub home: Option<PathBuf>,
    /// 開発用のローカルフロントエンド
    pub local_app_dir: Option<PathBuf>,
    /// 認証側で登録済みのログインプロバイダ
    pub login_providers: Vec<String>,
    /// ページ設定の静的な値
    pub page: StaticSettings,
}

impl ShellConfig {
    /// TOML 文字列からパース
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ShellError::Config(e.to_string()))
    }

    /// ファイルから読み込み
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let content = fs.read_to_string(path)?;
        Self::parse(&content)
    }

    /// 明示パス → `LABSHELL_CONFIG` の順で設定ファイルを探して読み込む
    ///
    /// どちらもなければデフォルト設定。
    pub fn discover(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| EnvVar::get_path(CONFIG_VAR));
        match path {
            Some(path) => Self::load(fs, &path),
            None => Ok(Self::default()),
        }
    }

    /// インストールルートを解決
    ///
    /// 優先順位: 設定値 > `LABSHELL_HOME` > `$HOME/.labshell`
    pub fn resolve_home(&self) -> Result<PathBuf> {
        if let Some(home) = &self.home {
            return Ok(home.clone());
        }
        if let Some(home) = EnvVar::get_path(HOME_VAR) {
            return Ok(home);
        }
        EnvVar::get_path("HOME")
            .map(|home| home.join(".labshell"))
            .ok_or_else(|| {
                ShellError::StartupConfiguration(format!(
                    "neither {} nor HOME is set and no home is configured",
                    HOME_VAR
                ))
            })
    }

    /// インストールパス一式を解決
    pub fn paths(&self) -> Result<FrontendPaths> {
        Ok(FrontendPaths::new(
            self.resolve_home()?,
            self.local_app_dir.clone(),
        ))
    }
}

/// インストールパス
///
/// ```text
/// <home>/
/// ├── frontend/        グローバルフロントエンドルート
/// │   └── app/         link-frontend の配置先
/// └── extensions/      グローバル拡張ルート
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendPaths {
    pub home: PathBuf,
    pub local_app_dir: Option<PathBuf>,
    pub global_frontend_dir: PathBuf,
    pub global_app_dir: PathBuf,
    pub extensions_dir: PathBuf,
}

impl FrontendPaths {
    pub fn new(home: PathBuf, local_app_dir: Option<PathBuf>) -> Self {
        let global_frontend_dir = home.join("frontend");
        Self {
            global_app_dir: global_frontend_dir.join("app"),
            extensions_dir: home.join("extensions"),
            global_frontend_dir,
            local_app_dir,
            home,
        }
    }

    /// 配信に使うフロントエンドルートを選ぶ
    ///
    /// ローカル開発用 → グローバル app → グローバルフロントエンドの順で、
    /// 最初に存在するものを使う。
    ///
    /// # Errors
    /// どれも存在しなければ `StartupConfiguration`。
    pub fn resolve_frontend_dir(&self, fs: &dyn FileSystem) -> Result<PathBuf> {
        if let Some(local) = self.local_app_dir.as_ref().filter(|p| fs.exists(p)) {
            info!(path = %local.display(), "using local development frontend directory");
            return Ok(local.clone());
        }
        if fs.exists(&self.global_app_dir) {
            info!(path = %self.global_app_dir.display(), "using global app directory");
            return Ok(self.global_app_dir.clone());
        }
        if fs.exists(&self.global_frontend_dir) {
            info!(path = %self.global_frontend_dir.display(), "using global frontend directory");
            return Ok(self.global_frontend_dir.clone());
        }

        let mut searched = Vec::new();
        if let Some(local) = &self.local_app_dir {
            searched.push(format!("- {}", local.display()));
        }
        searched.push(format!("- {}", self.global_app_dir.display()));
        searched.push(format!("- {}", self.global_frontend_dir.display()));
        Err(ShellError::StartupConfiguration(format!(
            "could not find frontend files in:\n{}",
            searched.join("\n")
        )))
    }

    /// グローバル拡張ルートがなければ作る
    pub fn ensure_extensions_dir(&self, fs: &dyn FileSystem) -> Result<()> {
        if !fs.exists(&self.extensions_dir) {
            fs.create_dir_all(&self.extensions_dir)?;
            info!(path = %self.extensions_dir.display(), "created global extensions directory");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
