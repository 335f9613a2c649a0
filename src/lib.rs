//! labshell: JupyterLab 互換フロントエンドシェルの配信コア
//!
//! 拡張パッケージの検出、ブートストラップページの生成、リクエストパスの解決を行う。
//! HTTP サーバー自体は持たず、ルーティング層から `RequestResolver` を呼び出す。

pub mod app;
pub mod config;
pub mod env;
pub mod error;
pub mod extension;
pub mod fs;
pub mod guard;
pub mod page;
pub mod path_ext;
pub mod resolver;
pub mod session;
pub mod state;

pub use app::FrontendApp;
pub use config::{FrontendPaths, ShellConfig};
pub use error::{Result, ShellError};
pub use resolver::{RequestResolver, Resolved};
