use order_relay::config::Config;
use order_relay::router::create_app_router;
use order_relay::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    // Configuration is read once here and injected; nothing reads the
    // environment after startup.
    let config = Config::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = Arc::new(AppState::new(config)?);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    info!("server running on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
