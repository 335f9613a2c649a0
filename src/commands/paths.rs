//! labshell paths コマンド

use labshell::fs::{FileSystem, RealFs};
use labshell::ShellConfig;
use owo_colors::OwoColorize;
use std::path::Path;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn run(_args: Args, config: &ShellConfig) -> Result<(), String> {
    let paths = config.paths().map_err(|e| e.to_string())?;

    print_path("Home", &paths.home);
    if let Some(local) = &paths.local_app_dir {
        print_path("Local app", local);
    }
    print_path("Frontend", &paths.global_frontend_dir);
    print_path("App", &paths.global_app_dir);
    print_path("Extensions", &paths.extensions_dir);

    match paths.resolve_frontend_dir(&RealFs) {
        Ok(dir) => println!("\n{} {}", "Serving:".bold(), dir.display()),
        Err(_) => println!("\n{} no frontend installed", "Serving:".bold()),
    }
    Ok(())
}

fn print_path(label: &str, path: &Path) {
    let marker = if RealFs.exists(path) {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    };
    println!("{} {:<11} {}", marker, label, path.display());
}
