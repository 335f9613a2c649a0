//! labshell develop コマンド
//!
//! 開発中の拡張のビルド出力ディレクトリを拡張ルートへシンボリックリンクする。

use crate::output;
use labshell::extension::{ExtensionDescriptor, PACKAGE_MANIFEST};
use labshell::fs::{FileSystem, RealFs};
use labshell::guard::RootSet;
use labshell::path_ext::PathExt;
use labshell::{FrontendPaths, ShellConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to the extension package (the directory holding package.json)
    pub ext_path: PathBuf,
}

pub async fn run(args: Args, config: &ShellConfig) -> Result<(), String> {
    let paths = config.paths().map_err(|e| e.to_string())?;
    let (name, link) = develop(&RealFs, &paths, &args.ext_path)?;
    output::success(format!("Linked '{}' -> {}", name, link.display()));
    Ok(())
}

/// 拡張をリンクし、拡張名とリンクパスを返す
///
/// リンク先に既存のものがあれば置き換える。
pub(crate) fn develop(
    fs: &dyn FileSystem,
    paths: &FrontendPaths,
    ext_path: &Path,
) -> Result<(String, PathBuf), String> {
    let package_dir = ext_path.absolutize();
    let manifest = package_dir.join(PACKAGE_MANIFEST);
    let content = fs
        .read_to_string(&manifest)
        .map_err(|_| format!("No {} found in {}", PACKAGE_MANIFEST, package_dir.display()))?;
    let descriptor = ExtensionDescriptor::parse(&content, &manifest, &package_dir, &package_dir)
        .map_err(|e| e.to_string())?;

    let output_dir = descriptor.output_dir();
    if !fs.is_dir(&output_dir) {
        return Err(format!(
            "Build output not found: {} (build the extension first)",
            output_dir.display()
        ));
    }

    let link = paths.extensions_dir.join(&descriptor.name);
    let roots = RootSet::new([&paths.extensions_dir]);
    if !roots.contains(&link) || link.absolutize() == paths.extensions_dir.absolutize() {
        return Err(format!("Invalid extension name: {}", descriptor.name));
    }

    if let Some(parent) = link.parent() {
        fs.create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    fs.remove(&link).map_err(|e| e.to_string())?;
    fs.symlink_dir(&output_dir, &link)
        .map_err(|e| format!("Failed to create symlink: {}", e))?;

    Ok((descriptor.name, link))
}

#[cfg(test)]
#[path = "develop_test.rs"]
mod tests;
