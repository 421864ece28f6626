use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use bnb_api::{config::Config, create_app, AppState, Repositories};
use bnb_core::services::TokenCleanupService;
use bnb_infra::database::{DatabasePool, MySqlRepositories};
use bnb_shared::config::environment::LogFormat;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // `log` records from actix and the handlers go through the same subscriber
    let result = match config.logging.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&config);
    config.validate()?;

    tracing::info!(environment = %config.environment, "Starting Fullstackbnb API server");
    if config.jwt.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development default");
    }

    let pool = DatabasePool::connect_and_migrate(config.database.clone())
        .await
        .context("failed to initialise the database")?;
    tracing::info!("{}", pool.get_statistics());

    let repositories = Repositories::from(MySqlRepositories::new(pool.get_pool()));
    Arc::new(TokenCleanupService::new(
        repositories.revoked_tokens.clone(),
        config.token_cleanup_config(),
    ))
    .start_background_task();

    let state = web::Data::new(AppState::new(
        repositories,
        config.token_service_config(),
        config.auth_service_config(),
    ));

    let bind_address = config.server.bind_address();
    tracing::info!("Listening on {}", bind_address);

    let server_config = config.server.clone();
    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config, &cors_config))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
