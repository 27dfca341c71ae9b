// ABOUTME: Server assembly for the tagcloud backend
// ABOUTME: Loads config, wires the store and router, and serves HTTP

use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub mod api;
pub mod config;
pub mod error;

use api::AppState;
use config::Config;
use tagcloud_tags::{Store, TagStore};

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // The pool is lazy; a down database is logged but does not stop the
    // server from coming up.
    let store = Store::connect(&config.store);
    match store.probe().await {
        Ok(now) => info!("Successfully connected to the database ({now})"),
        Err(err) => error!("Error connecting to the database: {err}"),
    }

    let state = AppState {
        tags: Arc::new(TagStore::new(store)),
    };

    // Single allowed origin with credentials, so no wildcards anywhere
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let app = api::create_router(state, &config.static_dir).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running on port {}", config.port);
    info!("CORS origin: {}", config.cors_origin);
    info!("Static assets from: {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
