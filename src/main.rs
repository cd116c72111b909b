// The binary reuses the library modules directly; helpers that only the
// library's public API exercises would otherwise warn here.
#![allow(dead_code)]

mod api;
mod app;
mod domain;
mod infra;

#[cfg(test)]
mod test_utils;

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use crate::api::create_router;
use crate::app::AppState;
use crate::infra::PostgresClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // One Postgres client backs both store traits.
    let db = Arc::new(PostgresClient::with_defaults(&database_url).await?);
    db.run_migrations().await?;

    // Wire services to the stores and build the router.
    let app_state = Arc::new(AppState::new(
        Arc::clone(&db) as _,
        Arc::clone(&db) as _,
    ));
    let router = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Server starting");

    axum::serve(listener, router).await?;

    Ok(())
}
