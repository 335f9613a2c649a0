//! labshell link-frontend コマンド
//!
//! ビルド済みフロントエンドをグローバル app ディレクトリへ配置する。

use crate::output;
use labshell::fs::{FileSystem, RealFs};
use labshell::page::TEMPLATE_SOURCE;
use labshell::path_ext::PathExt;
use labshell::{FrontendPaths, ShellConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Built frontend directory (must contain static/index.html.j2)
    pub src: PathBuf,

    /// Symlink instead of copying
    #[arg(long)]
    pub development: bool,
}

pub async fn run(args: Args, config: &ShellConfig) -> Result<(), String> {
    let paths = config.paths().map_err(|e| e.to_string())?;
    let dest = link_frontend(&RealFs, &paths, &args.src, args.development)?;
    let how = if args.development { "Linked" } else { "Copied" };
    output::success(format!("{} frontend to {}", how, dest.display()));
    Ok(())
}

/// 既存の app ディレクトリを置き換えて配置する
pub(crate) fn link_frontend(
    fs: &dyn FileSystem,
    paths: &FrontendPaths,
    src: &Path,
    development: bool,
) -> Result<PathBuf, String> {
    let src = src.absolutize();
    if !fs.exists(&src.join(TEMPLATE_SOURCE)) {
        return Err(format!(
            "{} is not a built frontend ({} missing)",
            src.display(),
            TEMPLATE_SOURCE
        ));
    }

    let dest = &paths.global_app_dir;
    fs.remove(dest).map_err(|e| e.to_string())?;
    fs.create_dir_all(&paths.global_frontend_dir)
        .map_err(|e| e.to_string())?;

    if development {
        fs.symlink_dir(&src, dest)
            .map_err(|e| format!("Failed to create symlink: {}", e))?;
    } else {
        fs.copy_dir(&src, dest)
            .map_err(|e| format!("Failed to copy frontend: {}", e))?;
    }
    Ok(dest.clone())
}

#[cfg(test)]
#[path = "link_frontend_test.rs"]
mod tests;
