//! Render orchestrator binary.
//!
//! Reads a render request (JSON, camelCase wire format) from the file
//! given as the first argument, runs the pipeline, and prints the
//! playable result URL.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reel_engine::RenderClient;
use reel_orchestrator::{OrchestratorConfig, RenderOrchestrator, RenderRequest};

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("reel=info".parse().expect("valid directive"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let request_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("Usage: reel-orchestrator <request.json>");
            std::process::exit(2);
        }
    };

    let request: RenderRequest = match std::fs::read_to_string(&request_path)
        .map_err(anyhow::Error::from)
        .and_then(|body| serde_json::from_str(&body).map_err(anyhow::Error::from))
    {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to read render request from {}: {}", request_path, e);
            std::process::exit(2);
        }
    };

    let client = match RenderClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to configure render client: {}", e);
            std::process::exit(1);
        }
    };

    let orchestrator = RenderOrchestrator::new(client, OrchestratorConfig::from_env());

    info!(
        items = request.media_items.len(),
        "Starting render request"
    );

    match orchestrator.render(&request).await {
        Ok(url) => {
            info!("Render complete");
            println!("{}", url);
        }
        Err(e) => {
            error!("Render failed: {}", e);
            std::process::exit(1);
        }
    }
}
