//! ページ設定の組み立てとブートストラップページの描画

mod bootstrap;
mod config;
mod template;

pub use bootstrap::{
    ensure_materialized, materialize, render, BootstrapLayout, BOOTSTRAP_PAGE, SETTINGS_FILE,
    TEMPLATE_SOURCE,
};
pub use config::{
    build_base_config, LoginAvailability, PageConfig, StaticSettings, LOGIN_PROVIDERS,
};
pub use template::PageTemplate;
