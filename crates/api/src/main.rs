use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinelist_api::catalog::CatalogService;
use cinelist_api::config::ServerConfig;
use cinelist_api::routes;
use cinelist_api::state::AppState;
use cinelist_db::DbPool;
use cinelist_omdb::{OmdbClient, OmdbConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(addr = %config.bind_addr(), "Configuration loaded");

    let pool = connect_database().await;

    let catalog = CatalogService::new(pool.clone(), OmdbClient::new(OmdbConfig::from_env()));
    tracing::info!("Metadata provider client ready");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog,
    };
    let app = build_app(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Could not bind listen address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server exited with an error");

    tracing::info!("Shutdown complete");
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` controls the filter when set; otherwise the API and
/// tower-http log at debug.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinelist_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to Postgres, verify the connection, and apply migrations.
///
/// Startup aborts on any failure here; a process without a working
/// database has nothing to serve.
async fn connect_database() -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = cinelist_db::create_pool(&url)
        .await
        .expect("Postgres connection failed");

    cinelist_db::health_check(&pool)
        .await
        .expect("Database did not answer the startup ping");

    cinelist_db::run_migrations(&pool)
        .await
        .expect("Applying migrations failed");

    tracing::info!("Database ready, migrations applied");
    pool
}

/// Assemble the router and its middleware stack.
///
/// Layers added later wrap everything added before, so on the way in a
/// request passes CORS first, then request-id assignment and tracing,
/// while the timeout and the panic guard sit closest to the handlers.
fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS layer for the configured origins.
///
/// An origin that fails to parse aborts startup rather than silently
/// serving with a partial allow-list.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Resolve when the process is asked to stop.
///
/// Listens for SIGINT and, on Unix, SIGTERM, so both an interactive
/// Ctrl-C and a process manager's stop request drain in-flight work
/// before exit.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Could not install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Could not install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("SIGINT received, draining connections"),
        () = terminate => tracing::info!("SIGTERM received, draining connections"),
    }
}
