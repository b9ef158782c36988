//! Users API Library
//!
//! The HTTP boundary over the user service: decodes requests, calls the
//! lifecycle operations, and maps each error kind to a status code.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Bootstrap the database, wire the service, and serve HTTP.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database = user_service_lib::bootstrap(&config.user_service).await?;
    let user_service = user_service_lib::build_service(&database);

    let state = AppState::new(user_service, database);
    let app = create_router(state);

    let addr: SocketAddr = config.addr().parse()?;
    info!("Users API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
