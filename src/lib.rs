//! Microblog API
//!
//! A minimal social-media backend exposing account registration/login and
//! message CRUD over HTTP, built around trait-based abstraction and
//! dependency injection so the business rules are testable without a
//! database.
//!
//! # Architecture Overview
//!
//! This crate is organized into four main layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   API Layer                  │
//! │  HTTP handlers, routing, status mapping      │
//! ├─────────────────────────────────────────────┤
//! │               Application Layer              │
//! │    Account/Message services, validation      │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │   Traits, types, errors (no dependencies)    │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │         PostgreSQL store via sqlx            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Trait-based abstraction**: persistence is hidden behind `AccountStore`
//!   and `MessageStore` traits
//! - **Dependency injection**: services receive their stores through
//!   constructors
//! - **Testability**: in-memory mock stores enable fast, isolated tests
//! - **Error handling**: typed errors pattern-matched into HTTP statuses at
//!   the API boundary
//! - **Logging**: structured logging with `tracing`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use microblog_api::api::create_router;
//! use microblog_api::app::AppState;
//! use microblog_api::infra::PostgresClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Arc::new(PostgresClient::with_defaults(&database_url).await?);
//!     db.run_migrations().await?;
//!
//!     let state = Arc::new(AppState::new(db.clone(), db));
//!
//!     let router = create_router(state);
//!     axum::serve(listener, router).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infra;

// In-memory mock stores, shared by unit tests and the integration suite.
pub mod test_utils;
