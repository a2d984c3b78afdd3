mod commands;

use clap::{Parser, Subcommand};
use miette::Result;
use rune_auth::{RuneConfig, UserId, config};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rune")]
#[command(about = "Inspect Rune command authorization")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a user is a bot developer
    Dev { user_id: UserId },
    /// List bot developers
    Devs,
    /// Show the saved login limit for a user
    Quota {
        user_id: UserId,

        /// Treat the user as premium
        #[arg(long)]
        premium: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show effective configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    miette::set_panic_hook();
    let cli = Cli::parse();

    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if cli.debug {
        EnvFilter::new("rune_auth=debug,rune_cli=debug,warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rune_auth=info,rune_cli=info,warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    run(&cli).await
}

/// Dispatch a parsed command; only commands that need configuration load it
async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Dev { user_id } => commands::dev(*user_id),
        Commands::Devs => commands::devs(),
        Commands::Quota { user_id, premium } => {
            let config = load(cli).await?;
            commands::quota(*user_id, *premium, &config)
        }
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => commands::show_config(&load(cli).await?)?,
        },
    }

    Ok(())
}

/// Load configuration from `--config` or the standard locations
async fn load(cli: &Cli) -> Result<RuneConfig> {
    let config = if let Some(config_path) = &cli.config {
        info!("Loading config from: {:?}", config_path);
        config::load_config(config_path).await?
    } else {
        config::load_config_from_standard_locations().await?
    };
    Ok(config)
}
