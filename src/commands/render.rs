//! labshell render コマンド

use crate::output;
use labshell::fs::RealFs;
use labshell::session::StaticLoginProviders;
use labshell::{FrontendApp, ShellConfig};
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn run(_args: Args, config: &ShellConfig) -> Result<(), String> {
    let login = StaticLoginProviders::new(config.login_providers.iter());
    let app =
        FrontendApp::register(config, Arc::new(RealFs), &login).map_err(|e| e.to_string())?;

    let base = app.state().base_config.snapshot();
    output::success(format!(
        "Wrote {} ({} extension(s))",
        app.layout().bootstrap_page().display(),
        base.federated_extensions.len()
    ));
    Ok(())
}
