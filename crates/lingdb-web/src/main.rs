//! LingDB HTTP service binary.

use clap::Parser;
use lingdb_web::vocabulary::default_registry;
use lingdb_web::{create_router, AppState, Args, WebConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = WebConfig::from(&args);

    if config.description_length == 0 {
        anyhow::bail!("description_length must be positive");
    }

    let registry = default_registry();
    info!(
        listen = %config.listen_addr,
        enumerations = registry.len(),
        "Starting LingDB service"
    );

    let state = AppState::new(registry, config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
