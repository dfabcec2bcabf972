use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, warn};

const MAX_ATTEMPTS: u32 = 5;
const MAX_CONNECTIONS: u32 = 20;

/// Connects with exponential backoff so a briefly unavailable database
/// (container still starting, failover in progress) does not kill the
/// process on boot.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;
    let mut wait = Duration::from_secs(2);

    loop {
        match PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!(
                    "Database connection attempt {}/{} failed: {}. Retrying in {}s...",
                    attempt,
                    MAX_ATTEMPTS,
                    e,
                    wait.as_secs()
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
                wait *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
