use crate::error::Result;
use crate::extension::BuildDescriptor;
use crate::path_ext::url_join;
use crate::session::LoginProviderRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 起動時に決まるページ設定値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticSettings {
    pub app_name: String,
    pub base_url: String,
    pub ws_url: String,
    /// フロントエンドのマウント先（API・テーマ・拡張の URL はこの配下）
    pub app_url: String,
    pub cache_files: bool,
    pub dev_mode: bool,
    pub mode: String,
    pub expose_app_in_browser: bool,
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self {
            app_name: "Lab Shell".to_string(),
            base_url: "/".to_string(),
            ws_url: String::new(),
            app_url: "/jlabmock".to_string(),
            cache_files: false,
            dev_mode: false,
            mode: "multiple-document".to_string(),
            expose_app_in_browser: false,
        }
    }
}

/// 対応しているログインプロバイダ
pub const LOGIN_PROVIDERS: [&str; 4] = ["github", "gitlab", "google", "azuread"];

/// ログインプロバイダごとの利用可否
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAvailability {
    pub github_login_available: bool,
    pub gitlab_login_available: bool,
    pub google_login_available: bool,
    pub azuread_login_available: bool,
}

impl LoginAvailability {
    /// 認証レジストリに各プロバイダの登録有無を問い合わせる
    pub fn from_registry(registry: &dyn LoginProviderRegistry) -> Self {
        Self {
            github_login_available: registry.is_registered("github"),
            gitlab_login_available: registry.is_registered("gitlab"),
            google_login_available: registry.is_registered("google"),
            azuread_login_available: registry.is_registered("azuread"),
        }
    }
}

/// ブートストラップページに埋め込むページ設定
///
/// シリアライズ後のキー順はフィールド順。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub app_name: String,
    pub base_url: String,
    pub ws_url: String,
    pub app_url: String,
    pub labextensions_url: String,
    pub themes_url: String,
    pub settings_url: String,
    pub listings_url: String,
    pub full_app_url: String,
    pub full_static_url: String,
    pub full_labextensions_url: String,
    pub full_themes_url: String,
    pub full_settings_url: String,
    pub full_listings_url: String,
    #[serde(rename = "federated_extensions")]
    pub federated_extensions: Vec<BuildDescriptor>,
    #[serde(flatten)]
    pub login: LoginAvailability,
    pub cache_files: bool,
    pub dev_mode: bool,
    pub mode: String,
    pub expose_app_in_browser: bool,
    /// セッション固有。ベース設定では常に None
    #[serde(
        rename = "logged_in_user_profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub logged_in_user_profile: Option<String>,
}

impl PageConfig {
    /// 拡張リストを差し替えた新しい設定
    pub fn with_extensions(&self, federated_extensions: Vec<BuildDescriptor>) -> Self {
        Self {
            federated_extensions,
            ..self.clone()
        }
    }

    /// プロフィールを加えた派生設定。元の設定は変更しない
    pub fn with_profile(&self, profile_json: String) -> Self {
        Self {
            logged_in_user_profile: Some(profile_json),
            ..self.clone()
        }
    }

    /// セッション固有フィールドを取り除いた設定
    pub fn without_profile(&self) -> Self {
        Self {
            logged_in_user_profile: None,
            ..self.clone()
        }
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// 静的設定・ログイン可否・拡張リストからベース設定を組み立てる
///
/// I/O なし。
pub fn build_base_config(
    settings: &StaticSettings,
    login: LoginAvailability,
    federated_extensions: Vec<BuildDescriptor>,
) -> PageConfig {
    let app = settings.app_url.as_str();
    let extensions_url = url_join(app, &["extensions"]);
    let themes_url = url_join(app, &["themes"]);
    let settings_url = url_join(app, &["api", "settings"]);
    let listings_url = url_join(app, &["api", "listings"]);

    PageConfig {
        app_name: settings.app_name.clone(),
        base_url: settings.base_url.clone(),
        ws_url: settings.ws_url.clone(),
        app_url: app.to_string(),
        labextensions_url: extensions_url.clone(),
        themes_url: themes_url.clone(),
        settings_url: settings_url.clone(),
        listings_url: listings_url.clone(),
        full_app_url: app.to_string(),
        full_static_url: url_join(app, &["static"]),
        full_labextensions_url: extensions_url,
        full_themes_url: themes_url,
        full_settings_url: settings_url,
        full_listings_url: listings_url,
        federated_extensions,
        login,
        cache_files: settings.cache_files,
        dev_mode: settings.dev_mode,
        mode: settings.mode.clone(),
        expose_app_in_browser: settings.expose_app_in_browser,
        logged_in_user_profile: None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
