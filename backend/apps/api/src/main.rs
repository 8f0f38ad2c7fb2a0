//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use kernel::extract::Json;
use members::{PostgrestMemberStore, StoreConfig, members_router};
use serde::Serialize;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Response for GET /
#[derive(Debug, Serialize)]
struct HealthResponse {
    message: &'static str,
}

/// GET /
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Club Member Management API is running!",
    })
}

/// Top-level router: health check plus the member routes
fn app(api: Router) -> Router {
    Router::new().route("/", get(health)).merge(api)
}

fn cors_layer(frontend_origins: &str) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,members=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Store configuration, read once
    let store_config = StoreConfig::from_env().context("Invalid member store configuration")?;
    tracing::info!(
        endpoint = %store_config.table_endpoint(),
        timeout_secs = store_config.timeout.map(|t| t.as_secs()),
        "Member store configured"
    );

    let store =
        PostgrestMemberStore::new(&store_config).context("Failed to create member store client")?;

    // CORS configuration
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());

    // Build router
    let app = app(members_router(store))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&frontend_origins));

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("BIND_ADDR is not a socket address: {}", bind_addr))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
