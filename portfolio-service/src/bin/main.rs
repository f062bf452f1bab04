use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::model::portfolio::PortfolioDraft;
use dotenv::dotenv;
use portfolio_service::{PortfolioService, PortfolioServiceConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Portfolio ledger CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Ledger directory, defaults to $PORTFOLIO_DIR or ./data
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Commands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved portfolios
    List,
    /// Print one portfolio as JSON
    Show {
        /// Portfolio ID
        id: String,
    },
    /// Save a portfolio draft read from a JSON file
    Create {
        /// Path to the draft
        file: PathBuf,
    },
    /// Delete a portfolio
    Delete {
        /// Portfolio ID
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("portfolio_service={}", cli.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli.dir {
        Some(dir) => PortfolioServiceConfig::new(dir),
        None => PortfolioServiceConfig::from_env(),
    };
    info!("Using ledger at {}", config.storage_path().display());

    let service = PortfolioService::with_config(&config);

    match cli.command {
        Commands::List => {
            for portfolio in service.list().await? {
                println!(
                    "{}  {}  {} assets  {}",
                    portfolio.id,
                    portfolio.created_at.format("%Y-%m-%d %H:%M"),
                    portfolio.draft.assets.len(),
                    portfolio.draft.name
                );
            }
        }
        Commands::Show { id } => match service.get(&id).await? {
            Some(portfolio) => println!("{}", serde_json::to_string_pretty(&portfolio)?),
            None => return Err(format!("Portfolio {} not found", id).into()),
        },
        Commands::Create { file } => {
            let raw = tokio::fs::read(&file).await?;
            let draft: PortfolioDraft = serde_json::from_slice(&raw)?;
            let portfolio = service.create(draft).await?;
            println!("{}", portfolio.id);
        }
        Commands::Delete { id } => {
            let removed = service.delete(&id).await?;
            info!("Removed {}", removed.draft.name);
        }
    }

    Ok(())
}
