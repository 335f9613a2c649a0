//! labshell uninstall コマンド

use crate::output;
use labshell::fs::{FileSystem, RealFs};
use labshell::guard::RootSet;
use labshell::path_ext::PathExt;
use labshell::{FrontendPaths, ShellConfig, ShellError};
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Extension name (e.g. "my-ext" or "@org/my-ext")
    pub name: String,
}

pub async fn run(args: Args, config: &ShellConfig) -> Result<(), String> {
    let paths = config.paths().map_err(|e| e.to_string())?;
    let removed = uninstall(&RealFs, &paths, &args.name).map_err(|e| e.to_string())?;
    output::success(format!(
        "Extension '{}' uninstalled ({})",
        args.name,
        removed.display()
    ));
    Ok(())
}

/// 拡張ディレクトリを削除し、削除したパスを返す
///
/// 拡張ルートの配下（ルート自身は除く）でなければ `InvalidArgument`。
pub(crate) fn uninstall(
    fs: &dyn FileSystem,
    paths: &FrontendPaths,
    name: &str,
) -> labshell::Result<PathBuf> {
    let root = paths.extensions_dir.absolutize();
    let target = paths.extensions_dir.join(name).absolutize();
    if !RootSet::new([&root]).contains(&target) || target == root {
        return Err(ShellError::InvalidArgument(format!(
            "'{}' is outside the extension root",
            name
        )));
    }
    if !fs.exists(&target) {
        return Err(ShellError::InvalidArgument(format!(
            "Extension '{}' is not installed",
            name
        )));
    }
    fs.remove(&target)?;
    Ok(target)
}

#[cfg(test)]
#[path = "uninstall_test.rs"]
mod tests;
