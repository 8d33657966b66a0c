//! Demo server: fresh in-memory stores, common and resource routes at the root.

use axum::Router;
use petclinic_backend::{api_routes, common_routes, AppState, ServerConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("petclinic_backend=info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::new();

    let app = Router::new()
        .merge(common_routes())
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
