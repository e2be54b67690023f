// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{CacheCommands, Cli, Commands};
use origami::flatpak::OperationKind;
use origami::StoreConfig;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::from_env();

    match cli.command {
        Commands::Search { term, category } => commands::cmd_search(&config, term, &category),
        Commands::Installed => commands::cmd_installed(&config),
        Commands::Install { app_id } => {
            commands::cmd_operation(&config, OperationKind::Install, &app_id)
        }
        Commands::Uninstall { app_id } => {
            commands::cmd_operation(&config, OperationKind::Uninstall, &app_id)
        }
        Commands::Update { app_id: Some(id) } => {
            commands::cmd_operation(&config, OperationKind::Update, &id)
        }
        Commands::Update { app_id: None } => {
            commands::cmd_operation(&config, OperationKind::UpdateAll, "")
        }
        Commands::Run { app_id } => commands::cmd_operation(&config, OperationKind::Run, &app_id),
        Commands::Setup => commands::cmd_setup(&config),
        Commands::Prefetch { banners, jobs } => commands::cmd_prefetch(&config, banners, jobs),
        Commands::Cache {
            command: CacheCommands::Stats,
        } => commands::cmd_cache_stats(&config),
        Commands::Cache {
            command: CacheCommands::Clear,
        } => commands::cmd_cache_clear(&config),
    }
}
