use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    clean, clean_frontend, develop, link_frontend, list, paths, render, resolve, uninstall,
};

#[derive(Debug, Parser)]
#[command(name = "labshell")]
#[command(about = "Lab Shell frontend server CLI", long_about = None)]
pub struct Cli {
    /// Path to a labshell.toml config file (defaults to $LABSHELL_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// インストールパスの表示
    Paths(paths::Args),

    /// インストール済み拡張の一覧
    List(list::Args),

    /// 開発中の拡張をリンク
    Develop(develop::Args),

    /// 拡張を削除
    Uninstall(uninstall::Args),

    /// 拡張ルートを削除
    Clean(clean::Args),

    /// ビルド済みフロントエンドを配置
    LinkFrontend(link_frontend::Args),

    /// 配置済みフロントエンドを削除
    CleanFrontend(clean_frontend::Args),

    /// ブートストラップページを書き出し直す
    Render(render::Args),

    /// リクエストパスの解決結果を表示
    Resolve(resolve::Args),
}
