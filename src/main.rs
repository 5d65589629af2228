use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use typextract::cli::Commands;
use typextract::{ChatConfig, ExtractTypesUseCase, OpenAiChatClient};

const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Parser)]
#[command(name = "typextract")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Environment file to load before reading configuration (defaults to ./.env when present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Override the API base URL (e.g. http://localhost:1234)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override the model identifier
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Variables already set in the process environment take precedence.
    let env_source = match cli.env_file.as_deref() {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            Some(path.display().to_string())
        }
        // Only ./.env; parent directories are not searched.
        None => match dotenvy::from_path(DEFAULT_ENV_FILE) {
            Ok(()) => Some(DEFAULT_ENV_FILE.to_string()),
            Err(e) if e.not_found() => None,
            Err(e) => return Err(e).context(format!("Failed to load env file {DEFAULT_ENV_FILE}")),
        },
    };

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(source) = env_source {
        debug!("Loaded environment from {source}");
    }

    let mut config = ChatConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    debug!("Using {config:?}");
    info!("Using chat-completion API at {}", config.base_url());

    let chat_client = Arc::new(OpenAiChatClient::new(config));
    let use_case = ExtractTypesUseCase::new(chat_client);

    match cli.command {
        Commands::Extract { file_path } => {
            info!("Extracting types from {}", file_path.display());
            let types = use_case.execute_file(&file_path).await?;
            println!("{types}");
        }
    }

    Ok(())
}
