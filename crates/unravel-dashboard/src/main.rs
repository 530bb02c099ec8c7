//! Unravel Dashboard binary entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unravel_dashboard::{AppState, DashboardConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unravel_dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DashboardConfig::from_env()?;
    let bind_addr = config.bind_address;
    tracing::info!(
        provider = %config.default_provider,
        default_shots = config.default_shots,
        max_shots = config.max_shots,
        seeded = config.seed.is_some(),
        "Loaded configuration"
    );

    let state = Arc::new(AppState::with_config(config));
    tracing::info!(
        backends = ?state.registry.available_backends(),
        "Registered simulator backends"
    );

    let app = create_router(state);

    tracing::info!("Starting Unravel Dashboard at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
