//! travel-api: HTTP service for the travel network.
//!
//! Binds the four network operations (register cities, search cities,
//! register road, list roads) to axum routes. All graph access goes
//! through a [`travel_graph::TravelStore`] handed to [`NetworkService`].

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

pub use error::ApiError;
pub use service::NetworkService;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(service: NetworkService) -> Router {
    Router::new()
        .route(
            "/City",
            post(routes::cities::create_cities).get(routes::cities::find_cities),
        )
        .route(
            "/Path",
            post(routes::roads::create_road).get(routes::roads::list_roads),
        )
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve the API on `bind` until Ctrl-C.
pub async fn run_server(service: NetworkService, bind: &str) -> anyhow::Result<()> {
    let app = create_router(service);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "Travel API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Travel API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
