//! Reset the store named by `DB_URI` and load the demo activities and campers.

use camp_signups::{connect, ensure_tables, seed, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("camp_signups=info")),
        )
        .init();

    let config = Config::from_env();
    let pool = connect(&config.database_url).await?;
    ensure_tables(&pool).await?;
    let (activities, campers) = seed(&pool).await?;
    tracing::info!(activities, campers, database = %config.database_url, "seeded");
    Ok(())
}
