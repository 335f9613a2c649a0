//! labshell clean コマンド

use crate::output;
use labshell::fs::{FileSystem, RealFs};
use labshell::ShellConfig;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn run(_args: Args, config: &ShellConfig) -> Result<(), String> {
    let paths = config.paths().map_err(|e| e.to_string())?;

    if !RealFs.exists(&paths.extensions_dir) {
        output::skipped("Extension root does not exist");
        return Ok(());
    }
    RealFs
        .remove(&paths.extensions_dir)
        .map_err(|e| format!("Failed to remove {}: {}", paths.extensions_dir.display(), e))?;
    output::success(format!("Removed {}", paths.extensions_dir.display()));
    Ok(())
}
