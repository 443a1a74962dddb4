//! cloudtrust CLI entry point.

use anyhow::Context;
use clap::Parser;

use cloudtrust::cli::{commands, handle_error, Cli, CommandContext, Commands};
use cloudtrust::infrastructure::config::SettingsLoader;
use cloudtrust::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut settings = match SettingsLoader::load(cli.settings.as_deref()).context("Failed to load settings") {
        Ok(settings) => settings,
        Err(err) => handle_error(err, cli.json),
    };
    if let Some(path) = cli.clouds_file {
        settings.clouds_file = Some(path);
    }

    if let Err(err) = LoggerImpl::init(&settings.logging) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    let ctx = CommandContext::new(settings, cli.json);
    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args, &ctx),
        Commands::Show(args) => commands::show::execute(args, &ctx),
        Commands::Trust(args) => commands::trust::execute(args, &ctx),
        Commands::Probe(args) => commands::probe::execute(args, &ctx).await,
    };

    if let Err(err) = result {
        handle_error(err, ctx.json);
    }
}
