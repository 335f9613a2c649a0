//! リクエストパスから配信内容を決める
//!
//! ルーティング層はパス文字列とセッション情報を渡し、`Resolved` を受け取る。
//! ファイルを返すときは必ず存在検査と、実パスでの封じ込め検査の両方を通す。

use crate::app::FrontendApp;
use crate::error::{Result, ShellError};
use crate::guard::RootSet;
use crate::page::{ensure_materialized, render};
use crate::session::{ProfileSource, SessionContext};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// パス全体を保ったまま static 配下で探すカテゴリ
const ASSET_CATEGORIES: [&str; 3] = ["icons", "logos", "page-data"];

/// 常に空配列を返すモック API
const EMPTY_LIST_ENDPOINTS: [&str; 3] = ["api/sessions", "api/kernels", "api/kernelspecs"];

const SETTINGS_ENDPOINT: &str = "api/settings";

/// 配信内容
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// 動的に描画したページ（200）
    Page(String),
    /// そのまま返すファイル
    File(PathBuf),
    /// JSON レスポンス
    Json(Value),
}

/// リクエストディスパッチャ
pub struct RequestResolver {
    app: Arc<FrontendApp>,
    profiles: Arc<dyn ProfileSource>,
}

impl RequestResolver {
    pub fn new(app: Arc<FrontendApp>, profiles: Arc<dyn ProfileSource>) -> Self {
        Self { app, profiles }
    }

    pub fn app(&self) -> &FrontendApp {
        &self.app
    }

    /// リクエストパス全体を振り分ける
    ///
    /// `app_url` 配下のモック API・テーマ・拡張・static を先に判定し、
    /// それ以外は `resolve` に回す。
    pub fn route(&self, request_path: &str, ctx: &SessionContext) -> Result<Resolved> {
        if let Some(sub) = self.strip_app_prefix(request_path) {
            if EMPTY_LIST_ENDPOINTS.contains(&sub) {
                return Ok(Resolved::Json(Value::Array(Vec::new())));
            }
            if sub == SETTINGS_ENDPOINT {
                return Ok(self.settings());
            }
            if let Some(resource) = sub.strip_prefix("themes/") {
                return self.theme(resource);
            }
            if let Some(resource) = sub.strip_prefix("extensions/") {
                return self.extension_asset(resource);
            }
            if let Some(resource) = sub.strip_prefix("static/") {
                return self.static_asset(resource);
            }
        }

        self.resolve(request_path.trim_start_matches('/'), ctx)
    }

    /// キャッチオール
    ///
    /// - `.` を含む: static 配下のファイル。アセットカテゴリを含まなければ末尾セグメントだけを使う
    /// - それ以外: ページ要求。拡張を走査し直し、ログイン中なら動的描画、
    ///   未ログインなら静的ブートストラップページ（なければ書き出す）
    pub fn resolve(&self, resource: &str, ctx: &SessionContext) -> Result<Resolved> {
        if resource.contains('.') {
            let file_name = if ASSET_CATEGORIES.iter().any(|c| resource.contains(c)) {
                resource
            } else {
                resource.rsplit('/').next().unwrap_or(resource)
            };
            return self.static_asset(file_name);
        }

        let config = self.app.refresh_extensions()?;
        let state = self.app.state();

        match self.profiles.session_profile(ctx) {
            Some(profile) => {
                debug!(resource, "rendering page for logged-in user");
                let template = state.template.snapshot();
                Ok(Resolved::Page(render(&config, Some(&profile), &template)?))
            }
            None => {
                let page = ensure_materialized(self.app.fs(), self.app.layout(), state)?;
                Ok(Resolved::File(page))
            }
        }
    }

    /// `<frontend>/themes/<resource>`
    pub fn theme(&self, resource: &str) -> Result<Resolved> {
        let base = self.app.frontend_dir().join("themes");
        self.serve_file(&base, resource, self.app.frontend_roots())
    }

    /// `<extensions>/<resource>`
    pub fn extension_asset(&self, resource: &str) -> Result<Resolved> {
        let base = &self.app.paths().extensions_dir;
        let roots = self.app.extension_asset_roots()?;
        self.serve_file(base, resource, &roots)
    }

    /// `<frontend>/static/<resource>`
    pub fn static_asset(&self, resource: &str) -> Result<Resolved> {
        let base = self.app.frontend_dir().join("static");
        self.serve_file(&base, resource, self.app.frontend_roots())
    }

    /// キャッシュ済みのフロントエンド設定
    pub fn settings(&self) -> Resolved {
        let settings = self.app.state().settings.snapshot();
        Resolved::Json(Value::Object((*settings).clone()))
    }

    /// 配信内容をバイト列にする
    pub fn body(&self, resolved: &Resolved) -> Result<Vec<u8>> {
        match resolved {
            Resolved::Page(html) => Ok(html.clone().into_bytes()),
            Resolved::File(path) => self.app.fs().read(path),
            Resolved::Json(value) => Ok(serde_json::to_vec(value)?),
        }
    }

    /// 封じ込め → 存在の順で検査し、通らなければ NotFound
    fn serve_file(&self, base: &Path, resource: &str, roots: &RootSet) -> Result<Resolved> {
        let fs = self.app.fs();
        match roots.servable(fs, &base.join(resource)) {
            Some(path) if !fs.is_dir(&path) => Ok(Resolved::File(path)),
            _ => Err(ShellError::NotFound),
        }
    }

    /// `app_url` 配下なら残りのパスを返す
    fn strip_app_prefix<'p>(&self, request_path: &'p str) -> Option<&'p str> {
        let app = self.app.settings().app_url.trim_end_matches('/');
        let rest = request_path.strip_prefix(app)?;
        rest.strip_prefix('/')
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
