//! Domain traits defining contracts for persistence.

use async_trait::async_trait;

use super::error::AppError;
use super::types::{Account, Message, NewAccount, NewMessage};

/// Persistence contract for accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Look up an account by its exact username.
    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AppError>;

    /// Persist a new account; the store assigns the id.
    ///
    /// Callers pass an already-validated request; the store relies on the
    /// unique constraint on `username` to serialize concurrent inserts.
    async fn create_account(&self, data: &NewAccount) -> Result<Account, AppError>;
}

/// Persistence contract for messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a new message; the store assigns the id.
    async fn create_message(&self, data: &NewMessage) -> Result<Message, AppError>;

    /// Look up a message by id. Absence is `None`, not an error.
    async fn get_message(&self, message_id: i32) -> Result<Option<Message>, AppError>;

    /// Every stored message, in the store's natural order.
    async fn list_messages(&self) -> Result<Vec<Message>, AppError>;

    /// All messages posted by the given account id.
    async fn list_messages_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<Message>, AppError>;

    /// Replace a message's text in place. Returns the affected-row count.
    async fn update_message_text(&self, message_id: i32, text: &str) -> Result<u64, AppError>;

    /// Delete a message by id. Returns the affected-row count; 0 when the
    /// id is absent.
    async fn delete_message(&self, message_id: i32) -> Result<u64, AppError>;
}
