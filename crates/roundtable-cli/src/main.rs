//! Roundtable server entry point.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use roundtable_api::{
    serve, ApiConfig, AppState, ChromiumRenderer, NoopStore, PdfRenderer, UnavailableRenderer,
};
use roundtable_cli::cli::Cli;
use roundtable_engine::DebateConfig;
use roundtable_oracle::GeminiClient;

#[tokio::main]
async fn main() {
    // Load .env.local if it exists (for GEMINI_API_KEY etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let oracle = Arc::new(
        GeminiClient::from_env()?
            .with_model(cli.model)
            .with_timeout(Duration::from_secs(cli.oracle_timeout_secs)),
    );

    let renderer: Arc<dyn PdfRenderer> = match ChromiumRenderer::discover() {
        Ok(renderer) => Arc::new(renderer),
        Err(e) => {
            warn!("PDF export disabled: {}", e);
            Arc::new(UnavailableRenderer)
        }
    };

    let debate = DebateConfig::default().with_turn_delay(Duration::from_millis(cli.turn_delay_ms));
    let config = ApiConfig::new(cli.host, cli.port);
    let state = AppState::new(
        config.clone(),
        oracle,
        debate,
        renderer,
        Arc::new(NoopStore),
    );

    serve(config, state).await?;
    Ok(())
}
