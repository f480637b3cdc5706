use credit_status_api::analysis::CreditAnalyzer;
use credit_status_api::config::Config;
use credit_status_api::handlers::{self, AppState};
use credit_status_api::services::StaticPendencyRegistry;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, seeds the pendency registry and
/// serves the credit check routes behind body-size and per-IP rate limits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credit_status_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let registry = match config.pendencies_file {
        Some(ref path) => StaticPendencyRegistry::from_json_file(path)?,
        None => {
            tracing::warn!("PENDENCIES_FILE not set, every valid CPF will report no pendencies");
            StaticPendencyRegistry::default()
        }
    };
    tracing::info!("✓ Pendency registry ready ({} records)", registry.len());

    let app_state = Arc::new(AppState {
        analyzer: CreditAnalyzer::new(Arc::new(registry)),
    });

    let app = handlers::app(app_state, &config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
