use crate::cli::{Cli, Command};
use labshell::fs::RealFs;
use labshell::ShellConfig;

pub mod clean;
pub mod clean_frontend;
pub mod develop;
pub mod link_frontend;
pub mod list;
pub mod paths;
pub mod render;
pub mod resolve;
pub mod uninstall;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let config =
        ShellConfig::discover(&RealFs, cli.config.as_deref()).map_err(|e| e.to_string())?;

    match cli.command {
        Command::Paths(args) => paths::run(args, &config).await,
        Command::List(args) => list::run(args, &config).await,
        Command::Develop(args) => develop::run(args, &config).await,
        Command::Uninstall(args) => uninstall::run(args, &config).await,
        Command::Clean(args) => clean::run(args, &config).await,
        Command::LinkFrontend(args) => link_frontend::run(args, &config).await,
        Command::CleanFrontend(args) => clean_frontend::run(args, &config).await,
        Command::Render(args) => render::run(args, &config).await,
        Command::Resolve(args) => resolve::run(args, &config).await,
    }
}
