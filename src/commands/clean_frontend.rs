//! labshell clean-frontend コマンド

use crate::output;
use labshell::fs::{FileSystem, RealFs};
use labshell::ShellConfig;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn run(_args: Args, config: &ShellConfig) -> Result<(), String> {
    let paths = config.paths().map_err(|e| e.to_string())?;

    if !RealFs.exists(&paths.global_app_dir) {
        output::skipped("No frontend linked");
        return Ok(());
    }
    RealFs
        .remove(&paths.global_app_dir)
        .map_err(|e| format!("Failed to remove {}: {}", paths.global_app_dir.display(), e))?;
    output::success(format!("Removed {}", paths.global_app_dir.display()));
    Ok(())
}
