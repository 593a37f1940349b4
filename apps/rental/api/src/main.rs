use axum_helpers::JwtAuth;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before anything fallible, so startup errors are rendered with span traces
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        app = config.app.name,
        version = config.app.version,
        environment = ?config.environment,
        "Starting rental API"
    );

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    let jwt_auth = JwtAuth::new(&config.jwt);

    let state = AppState {
        config: config.clone(),
        db,
        jwt_auth,
    };

    let app = create_router::<openapi::ApiDoc>(api::routes(&state), config.cors_origins.clone())
        .merge(health_router(config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Docs at http://{}/swagger-ui", config.server.address());

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Closing PostgreSQL pool");
        if let Err(e) = state.db.close().await {
            tracing::error!(error = %e, "Failed to close PostgreSQL pool");
        }
    })
    .await?;

    Ok(())
}
