use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::info;

use fleet_hub::config::EnvironmentConfig;
use fleet_hub::database::{create_pool, run_migrations};
use fleet_hub::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "fleet_hub=debug,info".to_string()),
        )
        .init();

    let config = EnvironmentConfig::from_env();

    let pool = create_pool(None).await?;
    run_migrations(&pool).await?;
    info!("database ready, migrations applied");

    let state = AppState::new(pool, config.clone());
    let app = fleet_hub::create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;
    info!(%addr, "fleet hub listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("ctrl+c received, shutting down");
        },
        _ = terminate => {
            info!("terminate signal received, shutting down");
        },
    }
}
