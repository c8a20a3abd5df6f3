//! Mediparc Server - Field Service Management System
//!
//! A Rust REST API server for managing client practices and the maintenance
//! of their installed medical equipment.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediparc_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mediparc_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mediparc Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool (embedded SQLite)
    let connect_options = SqliteConnectOptions::from_str(&config.database.url)
        .expect("Invalid database URL")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_with(connect_options)
        .await
        .expect("Failed to open database");

    tracing::info!("Database opened");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone())
        .expect("Failed to create services");

    // Seed an admin account on a fresh install, drop stale sessions
    services.auth.ensure_default_admin().await?;
    let purged = services.auth.purge_expired_sessions().await?;
    if purged > 0 {
        tracing::info!("Purged {} expired sessions", purged);
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Clients
        .route("/clients", get(api::clients::list_clients))
        .route("/clients", post(api::clients::create_client))
        .route("/clients/map", get(api::clients::map_clients))
        .route("/clients/:id", get(api::clients::get_client))
        .route("/clients/:id", put(api::clients::update_client))
        .route("/clients/:id", delete(api::clients::delete_client))
        // Installed equipment
        .route("/clients/:id/equipment", get(api::installations::list_client_equipment))
        .route("/clients/:id/equipment", post(api::installations::create_installation))
        .route("/equipment/:id", put(api::installations::update_installation))
        .route("/equipment/:id", delete(api::installations::delete_installation))
        .route("/equipment/:id/maintenance", post(api::installations::record_maintenance))
        // Equipment catalog
        .route("/catalog", get(api::equipment::list_catalog))
        .route("/catalog", post(api::equipment::create_catalog_equipment))
        .route("/catalog/:id", get(api::equipment::get_catalog_equipment))
        .route("/catalog/:id", put(api::equipment::update_catalog_equipment))
        .route("/catalog/:id", delete(api::equipment::delete_catalog_equipment))
        // Reports
        .route("/reports", get(api::reports::list_reports))
        .route("/reports", post(api::reports::create_report))
        .route("/reports/:id", get(api::reports::get_report))
        .route("/reports/:id", put(api::reports::update_report))
        .route("/reports/:id", delete(api::reports::delete_report))
        // Checklists
        .route("/checklists", get(api::checklists::list_checklists))
        .route("/checklists", post(api::checklists::create_checklist))
        .route("/checklists/:id", get(api::checklists::get_checklist))
        .route("/checklists/:id", put(api::checklists::update_checklist))
        .route("/checklists/:id", delete(api::checklists::delete_checklist))
        .route("/checklists/:id/items", post(api::checklists::create_checklist_item))
        .route("/checklist-items/:id", delete(api::checklists::delete_checklist_item))
        // Appointments
        .route("/appointments", get(api::appointments::list_appointments))
        .route("/appointments", post(api::appointments::create_appointment))
        .route("/appointments/:id", get(api::appointments::get_appointment))
        .route("/appointments/:id", put(api::appointments::update_appointment))
        .route("/appointments/:id", delete(api::appointments::delete_appointment))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
