//! Camp signups server: opens the store, ensures tables, serves on 127.0.0.1:5555.

use camp_signups::{app, connect, ensure_tables, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("camp_signups=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let pool = connect(&config.database_url).await?;
    ensure_tables(&pool).await?;
    tracing::info!(database = %config.database_url, "store ready");

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState::new(pool))).await?;
    Ok(())
}
