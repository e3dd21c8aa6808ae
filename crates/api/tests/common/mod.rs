use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use cinelist_api::auth::jwt::JwtConfig;
use cinelist_api::auth::password::hash_password;
use cinelist_api::catalog::CatalogService;
use cinelist_api::config::ServerConfig;
use cinelist_api::routes;
use cinelist_api::state::AppState;
use cinelist_db::models::user::{CreateUser, User};
use cinelist_db::repositories::UserRepo;
use cinelist_omdb::{OmdbClient, OmdbConfig};

/// Placeholder provider endpoint for tests that never enrich. Port 9 is
/// the discard service; nothing answers there.
const NO_PROVIDER_URL: &str = "http://127.0.0.1:9/";

/// JWT config shared by the test app and any token assertions.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-not-for-production".to_string(),
        access_token_ttl: chrono::Duration::minutes(60),
    }
}

/// Server settings the test app runs with: the dev-default CORS origin
/// and a 30 second timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// The application as production runs it, minus the listener.
///
/// Router and middleware assembly is kept in step with `main.rs` by
/// hand, so a request here crosses the same CORS, request-id, tracing,
/// timeout, and panic layers. `omdb_url` points the metadata client at
/// a stub server; `None` aims it at an endpoint nothing listens on,
/// which suits tests that never enrich.
pub fn build_test_app(pool: PgPool, omdb_url: Option<&str>) -> Router {
    let config = test_config();

    let omdb_config = OmdbConfig {
        api_url: omdb_url.unwrap_or(NO_PROVIDER_URL).to_string(),
        api_key: "test-key".to_string(),
    };
    let catalog = CatalogService::new(pool.clone(), OmdbClient::new(omdb_config));

    let state = AppState {
        pool,
        config: Arc::new(config),
        catalog,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body, no authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database with the given password.
pub async fn create_user(pool: &PgPool, email: &str, password: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(password).expect("hashing should succeed"),
        fullname: "Test User".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Log in via the API and return the bearer token.
pub async fn login_token(pool: &PgPool, email: &str, password: &str) -> String {
    let app = build_test_app(pool.clone(), None);
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("token must be a string")
        .to_string()
}
