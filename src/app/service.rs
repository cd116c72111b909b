//! Application service layer.
//!
//! This module contains the business rules for accounts and messages,
//! enforcing input validation before delegating to the store traits.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::{
    Account, AccountStore, AppError, Message, MessageStore, NewAccount, NewMessage,
};

/// Minimum password length accepted at registration.
const MIN_PASSWORD_LEN: usize = 4;

/// Registration and login rules over an [`AccountStore`].
///
/// # Example
///
/// ```ignore
/// let db = Arc::new(PostgresClient::with_defaults(&url).await?);
/// let accounts = AccountService::new(db);
///
/// let account = accounts.register(&request).await?;
/// ```
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if:
    /// - the username is missing or blank after trimming
    /// - the password is missing or shorter than 4 characters
    /// - an account with the same username already exists
    /// - the store operation fails
    #[instrument(skip(self, candidate))]
    pub async fn register(&self, candidate: &NewAccount) -> Result<Account, AppError> {
        let username = candidate.username.as_deref().unwrap_or("");
        if username.trim().is_empty() {
            warn!("Registration rejected: blank username");
            return Err(AppError::validation("Username cannot be blank"));
        }

        // Character count, not byte length; multibyte passwords count per char.
        let password_len = candidate
            .password
            .as_deref()
            .map_or(0, |p| p.chars().count());
        if password_len < MIN_PASSWORD_LEN {
            warn!(username = %username, "Registration rejected: password too short");
            return Err(AppError::validation(
                "Password must be at least 4 characters long",
            ));
        }

        // Check-then-insert; the unique constraint on username is what makes
        // this correct under concurrent registrations.
        if self
            .store
            .get_account_by_username(username)
            .await?
            .is_some()
        {
            warn!(username = %username, "Registration rejected: username taken");
            return Err(AppError::conflict("Username already exists"));
        }

        let account = self.store.create_account(candidate).await?;
        info!(account_id = account.account_id, username = %account.username, "Account registered");
        Ok(account)
    }

    /// Validates login credentials and returns the stored account.
    ///
    /// An unknown username and a wrong password are indistinguishable to the
    /// caller; both yield the same error. Comparison is exact and
    /// case-sensitive.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Account, AppError> {
        let account = self
            .store
            .get_account_by_username(username)
            .await?
            .filter(|account| account.password == password)
            .ok_or_else(|| AppError::unauthorized("Invalid login credentials"))?;

        info!(account_id = account.account_id, "Login succeeded");
        Ok(account)
    }
}

/// Message CRUD rules over a [`MessageStore`].
pub struct MessageService {
    store: Arc<dyn MessageStore>,
}

impl MessageService {
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Posts a new message.
    ///
    /// The referenced `posted_by` account id must be present in the request
    /// but is not checked for existence.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if:
    /// - the message text is missing or blank after trimming
    /// - `posted_by` is absent
    /// - the store operation fails
    #[instrument(skip(self, message))]
    pub async fn create_message(&self, message: &NewMessage) -> Result<Message, AppError> {
        let text = message.message_text.as_deref().unwrap_or("");
        if text.trim().is_empty() {
            warn!("Message rejected: blank text");
            return Err(AppError::validation("Message text cannot be blank"));
        }
        if message.posted_by.is_none() {
            warn!("Message rejected: missing posting account");
            return Err(AppError::validation("Message must have a valid user"));
        }

        let message = self.store.create_message(message).await?;
        info!(
            message_id = message.message_id,
            posted_by = message.posted_by,
            "Message posted"
        );
        Ok(message)
    }

    /// Every stored message, in store order.
    #[instrument(skip(self))]
    pub async fn all_messages(&self) -> Result<Vec<Message>, AppError> {
        self.store.list_messages().await
    }

    /// All messages posted by the given account; empty when there are none.
    #[instrument(skip(self))]
    pub async fn messages_by_account(&self, account_id: i32) -> Result<Vec<Message>, AppError> {
        self.store.list_messages_by_account(account_id).await
    }

    /// Looks up a single message. Absence is `None` for the caller to
    /// interpret, not an error.
    #[instrument(skip(self))]
    pub async fn message_by_id(&self, message_id: i32) -> Result<Option<Message>, AppError> {
        self.store.get_message(message_id).await
    }

    /// Replaces a message's text and returns the updated-row count (always 1
    /// on success).
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if no message with that id exists, or if the
    /// new text is missing or blank after trimming.
    #[instrument(skip(self, new_text))]
    pub async fn update_message(
        &self,
        message_id: i32,
        new_text: Option<&str>,
    ) -> Result<u64, AppError> {
        if self.store.get_message(message_id).await?.is_none() {
            return Err(AppError::not_found("Message not found"));
        }

        let text = new_text.unwrap_or("");
        if text.trim().is_empty() {
            return Err(AppError::validation("Message text cannot be blank"));
        }

        let rows = self.store.update_message_text(message_id, text).await?;
        info!(message_id, rows, "Message updated");
        Ok(rows)
    }

    /// Deletes a message and returns the deleted-row count.
    ///
    /// Deleting an absent id is a no-op returning 0, never an error.
    #[instrument(skip(self))]
    pub async fn delete_message(&self, message_id: i32) -> Result<u64, AppError> {
        let rows = self.store.delete_message(message_id).await?;
        if rows > 0 {
            info!(message_id, "Message deleted");
        }
        Ok(rows)
    }
}
