//! GTD Map server entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gtdmap_api::cli::Cli;
use gtdmap_api::{serve, ApiConfig, AppState};

#[tokio::main]
async fn main() {
    // Load .env.local if it exists (GTDMAP_* settings)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let config = cli.apply(ApiConfig::from_env());
    let state = AppState::with_item_store(config);

    if let Err(e) = serve(state).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
