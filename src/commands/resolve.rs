//! labshell resolve コマンド
//!
//! リクエストパスを解決し、配信される内容を表示する。

use labshell::fs::RealFs;
use labshell::session::{InMemoryProfiles, Profile, SessionContext, StaticLoginProviders};
use labshell::{FrontendApp, RequestResolver, Resolved, ShellConfig};
use owo_colors::OwoColorize;
use std::sync::Arc;

/// --profile 指定時に使うセッション ID
const CLI_SESSION: &str = "cli";

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Request path (e.g. "/jlabmock/themes/light/index.css" or "/lab")
    pub path: String,

    /// Resolve as a logged-in user with this profile JSON
    #[arg(long)]
    pub profile: Option<String>,
}

pub async fn run(args: Args, config: &ShellConfig) -> Result<(), String> {
    let login = StaticLoginProviders::new(config.login_providers.iter());
    let app =
        FrontendApp::register(config, Arc::new(RealFs), &login).map_err(|e| e.to_string())?;

    let mut profiles = InMemoryProfiles::new();
    let ctx = match &args.profile {
        Some(json) => {
            let profile: Profile =
                serde_json::from_str(json).map_err(|e| format!("Invalid --profile: {}", e))?;
            profiles = profiles.with_profile(CLI_SESSION, profile);
            SessionContext::with_session(CLI_SESSION)
        }
        None => SessionContext::anonymous(),
    };

    let resolver = RequestResolver::new(Arc::new(app), Arc::new(profiles));
    match resolver.route(&args.path, &ctx) {
        Ok(Resolved::Page(html)) => {
            println!("{} rendered page", "200".green());
            println!("{html}");
        }
        Ok(Resolved::File(path)) => {
            println!("{} file {}", "200".green(), path.display());
        }
        Ok(Resolved::Json(value)) => {
            let json = serde_json::to_string_pretty(&value)
                .map_err(|e| format!("Failed to serialize response: {}", e))?;
            println!("{} json", "200".green());
            println!("{json}");
        }
        Err(err) => return Err(format!("{} {}", err.status_code(), err)),
    }
    Ok(())
}
