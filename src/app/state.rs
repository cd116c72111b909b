//! Application state management.
//!
//! This module provides the shared application state that is
//! accessible to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::domain::{AccountStore, MessageStore};

use super::service::{AccountService, MessageService};

/// Shared application state for the Axum web server.
///
/// Holds thread-safe references to the services and the underlying stores,
/// allowing handlers to access them without knowing their concrete
/// implementations.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
///
/// let db = Arc::new(PostgresClient::with_defaults(&url).await?);
/// let state = AppState::new(db.clone(), db);
///
/// let router = Router::new()
///     .route("/register", post(register_handler))
///     .with_state(Arc::new(state));
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Account registration/login rules.
    pub accounts: Arc<AccountService>,

    /// Message CRUD rules.
    pub messages: Arc<MessageService>,

    /// Account persistence handle.
    pub account_store: Arc<dyn AccountStore>,

    /// Message persistence handle.
    pub message_store: Arc<dyn MessageStore>,
}

impl AppState {
    /// Creates a new `AppState`, wiring both services to the provided stores.
    #[must_use]
    pub fn new(account_store: Arc<dyn AccountStore>, message_store: Arc<dyn MessageStore>) -> Self {
        let accounts = Arc::new(AccountService::new(Arc::clone(&account_store)));
        let messages = Arc::new(MessageService::new(Arc::clone(&message_store)));

        Self {
            accounts,
            messages,
            account_store,
            message_store,
        }
    }
}
