//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module builds the [`AppState`] (configuration, the repositories picked
//! by `REPOSITORY_BACKEND`, the clock), creates the Axum router, applies
//! middleware, and starts the HTTP server.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, map_res, require_admin, require_auth, stamp_req, RequestStamp};
use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use lib_core::{
    create_pool, ensure_database_dir, CheckInRepository, Clock, Config, DbPool, GymRepository,
    InMemoryCheckInRepository, InMemoryGymRepository, InMemoryUserRepository, RepositoryBackend,
    SqliteCheckInRepository, SqliteGymRepository, SqliteUserRepository, SystemClock,
    UserRepository, MIGRATOR,
};
use std::sync::Arc;
use tower_cookies::CookieManagerLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
///
/// Repositories sit behind trait objects so the same handlers and services
/// run against SQLite or memory.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserRepository>,
    pub gyms: Arc<dyn GymRepository>,
    pub check_ins: Arc<dyn CheckInRepository>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State backed by SQLite through `pool`.
    pub fn sqlite(config: Config, pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            users: Arc::new(SqliteUserRepository::new(pool.clone())),
            gyms: Arc::new(SqliteGymRepository::new(pool.clone())),
            check_ins: Arc::new(SqliteCheckInRepository::new(pool)),
            clock,
        }
    }

    /// State backed by process memory. Nothing survives a restart.
    pub fn in_memory(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            users: Arc::new(InMemoryUserRepository::new()),
            gyms: Arc::new(InMemoryGymRepository::new()),
            check_ins: Arc::new(InMemoryCheckInRepository::new()),
            clock,
        }
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3333")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3333".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration loading or validation fails
/// - Database connection fails
/// - Database migrations fail
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(&log_level)
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    info!(" GYMPASS API STARTING");
    info!(" Log level: {}", log_level);

    info!("Loading configuration...");
    let app_config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    app_config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let state = match app_config.repository_backend {
        RepositoryBackend::Sqlite => {
            info!("Database URL: {}", app_config.database_url);
            ensure_database_dir(&app_config.database_url)?;

            info!("Connecting to database...");
            let pool = create_pool(&app_config.database_url).await?;

            info!(" Running database migrations");
            MIGRATOR.run(&pool).await?;
            info!(" Migrations complete");

            AppState::sqlite(app_config, pool, clock)
        }
        RepositoryBackend::Memory => {
            info!(" Using in-memory repositories; data is lost on restart");
            AppState::in_memory(app_config, clock)
        }
    };

    let app = create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main application router with all routes
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    use axum::http::{header, HeaderValue, Method};

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    info!("[ROUTE SETUP] Registering HTTP routes...");

    let admin_routes = Router::new()
        .route("/gyms", post(handlers::gyms::create_gym))
        .route(
            "/check-ins/{check_in_id}/validate",
            patch(handlers::check_ins::validate_check_in),
        )
        .route_layer(middleware::from_fn(require_admin));

    let protected_routes = Router::new()
        .route("/me", get(handlers::users::profile))
        .route("/gyms/search", get(handlers::gyms::search_gyms))
        .route("/gyms/nearby", get(handlers::gyms::nearby_gyms))
        .route("/gyms/{gym_id}/check-ins", post(handlers::check_ins::create_check_in))
        .route("/check-ins/history", get(handlers::check_ins::history))
        .route("/check-ins/metrics", get(handlers::check_ins::metrics))
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/users", post(handlers::users::register))
        .route("/sessions", post(handlers::users::authenticate))
        .route("/token/refresh", patch(handlers::users::refresh))
        .route("/health", get(|| async { "OK" }))
        .merge(protected_routes)
        .fallback(|| async {
            info!("[404 HANDLER] Unmatched route - returning 404");
            (axum::http::StatusCode::NOT_FOUND, "Route not found")
        })
        .with_state(state)
        .layer(CookieManagerLayer::new())
        .layer(middleware::from_fn(map_res))
        .layer(middleware::from_fn(log_requests))
        // Tower HTTP trace layer for spans
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                },
            ),
        )
        // Request stamping runs first so every layer below sees the ID
        .layer(middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!(" USERS:");
    info!("   • POST  /users");
    info!("   • POST  /sessions");
    info!("   • PATCH /token/refresh");
    info!("   • GET   /me");
    info!(" GYMS:");
    info!("   • POST  /gyms (admin)");
    info!("   • GET   /gyms/search?q={{query}}&page={{page}}");
    info!("   • GET   /gyms/nearby?latitude={{lat}}&longitude={{lng}}");
    info!(" CHECK-INS:");
    info!("   • POST  /gyms/{{gym_id}}/check-ins");
    info!("   • GET   /check-ins/history?page={{page}}");
    info!("   • GET   /check-ins/metrics");
    info!("   • PATCH /check-ins/{{check_in_id}}/validate (admin)");
    info!(" HEALTH:");
    info!("   • GET   /health");
}
// endregion: --- Server Setup
