//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use eventhub_common::{AppConfig, AppError, JwtService};
use eventhub_core::Geocoder;
use eventhub_db::{
    create_pool, run_migrations, PgAttendanceRepository, PgEventRepository, PgUserRepository,
};
use eventhub_geo::{MapboxConfig, MapboxGeocoder};
use eventhub_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware so probes bypass rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies with the Mapbox geocoder
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let geocoder = MapboxGeocoder::new(MapboxConfig::from(&config.geocoding))
        .map_err(|e| AppError::Config(format!("Failed to create geocoder: {e}")))?;

    create_app_state_with_geocoder(config, Arc::new(geocoder)).await
}

/// Initialize all dependencies around the given geocoder
pub async fn create_app_state_with_geocoder(
    config: AppConfig,
    geocoder: Arc<dyn Geocoder>,
) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = eventhub_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        statement_timeout: Duration::from_millis(config.database.statement_timeout_ms),
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let event_repo = Arc::new(PgEventRepository::new(pool.clone()));
    let attendance_repo = Arc::new(PgAttendanceRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .event_repo(event_repo)
        .attendance_repo(attendance_repo)
        .user_repo(user_repo)
        .geocoder(geocoder)
        .jwt_service(jwt_service)
        .tally_labels(config.tally.labels)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
