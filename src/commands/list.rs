//! labshell list コマンド
//!
//! グローバル拡張ルートにインストールされた拡張の一覧を表示する。

use comfy_table::{presets::UTF8_FULL, Table};
use labshell::extension::{ExtensionDescriptor, ExtensionScanner};
use labshell::fs::RealFs;
use labshell::ShellConfig;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, config: &ShellConfig) -> Result<(), String> {
    let paths = config.paths().map_err(|e| e.to_string())?;
    let registry = ExtensionScanner::new(&RealFs)
        .scan(&[&paths.extensions_dir])
        .map_err(|e| e.to_string())?;
    let extensions: Vec<&ExtensionDescriptor> = registry.values().collect();

    if args.json {
        print_json(&extensions)
    } else {
        print_table(&extensions);
        Ok(())
    }
}

fn print_json(extensions: &[&ExtensionDescriptor]) -> Result<(), String> {
    serde_json::to_string_pretty(extensions)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize extensions: {}", e))
}

fn print_table(extensions: &[&ExtensionDescriptor]) {
    if extensions.is_empty() {
        println!("No extensions installed");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Version", "Description", "Location"]);

    for extension in extensions {
        table.add_row(vec![
            extension.name.clone(),
            extension.version.clone(),
            extension.description.clone(),
            extension.package_directory.display().to_string(),
        ]);
    }

    println!("{table}");
    println!("{} extension(s)", extensions.len());
}
