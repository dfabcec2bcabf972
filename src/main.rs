use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_site::{
    db::postgres::create_pool, graceful_shutdown::shutdown_signal,
    repositories::memory::MemoryStore, routes::configure_routes, settings::AppConfig, AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url)
                .await
                .expect("Failed to create database connection pool");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            web::Data::new(AppState::with_postgres(&config, pool))
        }
        None => {
            tracing::warn!("APP_DATABASE_URL not set; serving the seeded in-memory store");
            web::Data::new(AppState::with_memory(&config, MemoryStore::seeded()))
        }
    };

    // Keep limiter slots around for two windows past their last hit.
    app_state
        .contact_limiter
        .spawn_idle_eviction(Duration::from_secs(config.contact_rate_window_secs * 2));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_origins))
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    origins.iter().fold(
        Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}
