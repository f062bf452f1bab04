//! ETF gateway server

use std::net::SocketAddr;

use api_gateway::config::AppConfig;
use api_gateway::{app_router, AppState};
use clap::Parser;
use dotenv::dotenv;
use market_data::EtfService;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

/// ETF gateway API server
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Listening address, defaults to 0.0.0.0:$PORT
    #[clap(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging with debug level when DEBUG=1 env var is set
    let env = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env == "1" { Level::DEBUG } else { Level::INFO };

    let directives = if log_level == Level::DEBUG {
        "tower_http=debug,api_gateway=debug,market_data=debug"
    } else {
        "tower_http=info"
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .parse(directives)?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Debug logging enabled");

    let config = AppConfig::new();
    if config.vendor.credentials.is_provisioned() {
        info!(
            "Vendor mode: {} ({})",
            config.vendor.mode_label(),
            config.vendor.credentials.base_url
        );
    } else {
        warn!("KIS credentials not provisioned, serving mock ETF data");
    }

    let state = AppState::new(EtfService::new(config.vendor.clone())?);
    let app = app_router(state, log_level);

    // Start the server
    let addr: SocketAddr = args.addr.unwrap_or_else(|| config.listen_addr()).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    info!("API docs: http://{}/api/docs", addr);

    // Run until interrupt signal
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
