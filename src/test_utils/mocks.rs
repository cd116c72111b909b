//! Mock implementations for testing.
//!
//! These mocks provide in-memory implementations of the store traits that
//! can be configured to simulate success and failure scenarios.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::{
    Account, AccountStore, AppError, Message, MessageStore, NewAccount, NewMessage, StoreError,
};

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// If true, operations will fail.
    pub should_fail: bool,
    /// Custom error message for failures.
    pub error_message: Option<String>,
}

impl MockConfig {
    /// Creates a config that always succeeds.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a config that always fails.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            error_message: Some(message.into()),
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.should_fail {
            let msg = self
                .error_message
                .clone()
                .unwrap_or_else(|| "Mock store error".to_string());
            return Err(AppError::Store(StoreError::Query(msg)));
        }
        Ok(())
    }
}

/// Mock account store backed by a `HashMap`.
///
/// Ids are assigned from an atomic sequence, mimicking the database's
/// identity column.
///
/// # Example
///
/// ```
/// use microblog_api::test_utils::{MockAccountStore, mocks::MockConfig};
///
/// let mock = MockAccountStore::new();
/// let failing_mock = MockAccountStore::with_config(MockConfig::failure("DB error"));
/// ```
pub struct MockAccountStore {
    storage: Arc<Mutex<HashMap<i32, Account>>>,
    next_id: AtomicI32,
    config: MockConfig,
    call_count: AtomicU64,
}

impl MockAccountStore {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicI32::new(1),
            config,
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Gets the number of times any method was called.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Number of stored accounts.
    pub fn account_count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    fn increment_call_count(&self) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for MockAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let storage = self.storage.lock().unwrap();
        Ok(storage
            .values()
            .find(|account| account.username == username)
            .cloned())
    }

    async fn create_account(&self, data: &NewAccount) -> Result<Account, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let mut storage = self.storage.lock().unwrap();

        // Unique-constraint backstop, as the real schema enforces.
        let username = data.username.clone().unwrap_or_default();
        if storage.values().any(|account| account.username == username) {
            return Err(AppError::Store(StoreError::Duplicate(format!(
                "Key (username)=({username}) already exists.",
            ))));
        }

        let account_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let account = Account {
            account_id,
            username,
            password: data.password.clone().unwrap_or_default(),
        };
        storage.insert(account_id, account.clone());

        Ok(account)
    }
}

/// Mock message store backed by a `HashMap`.
pub struct MockMessageStore {
    storage: Arc<Mutex<HashMap<i32, Message>>>,
    next_id: AtomicI32,
    config: MockConfig,
    call_count: AtomicU64,
}

impl MockMessageStore {
    /// Creates a new mock with default (success) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MockConfig::success())
    }

    /// Creates a new mock with the given configuration.
    #[must_use]
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicI32::new(1),
            config,
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a mock that always fails.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_config(MockConfig::failure(message))
    }

    /// Gets the number of times any method was called.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Number of stored messages.
    pub fn message_count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Direct read of a stored message, bypassing the trait.
    pub fn get_stored_message(&self, message_id: i32) -> Option<Message> {
        self.storage.lock().unwrap().get(&message_id).cloned()
    }

    fn increment_call_count(&self) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for MockMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageStore for MockMessageStore {
    async fn create_message(&self, data: &NewMessage) -> Result<Message, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let message_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let message = Message {
            message_id,
            posted_by: data.posted_by.unwrap_or_default(),
            message_text: data.message_text.clone().unwrap_or_default(),
            time_posted_epoch: data.time_posted_epoch,
        };

        let mut storage = self.storage.lock().unwrap();
        storage.insert(message_id, message.clone());

        Ok(message)
    }

    async fn get_message(&self, message_id: i32) -> Result<Option<Message>, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let storage = self.storage.lock().unwrap();
        Ok(storage.get(&message_id).cloned())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let storage = self.storage.lock().unwrap();
        let mut messages: Vec<Message> = storage.values().cloned().collect();
        messages.sort_by_key(|m| m.message_id);
        Ok(messages)
    }

    async fn list_messages_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<Message>, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let storage = self.storage.lock().unwrap();
        let mut messages: Vec<Message> = storage
            .values()
            .filter(|m| m.posted_by == account_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.message_id);
        Ok(messages)
    }

    async fn update_message_text(&self, message_id: i32, text: &str) -> Result<u64, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let mut storage = self.storage.lock().unwrap();
        match storage.get_mut(&message_id) {
            Some(message) => {
                message.message_text = text.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_message(&self, message_id: i32) -> Result<u64, AppError> {
        self.increment_call_count();
        self.config.check()?;

        let mut storage = self.storage.lock().unwrap();
        Ok(u64::from(storage.remove(&message_id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_account_store_assigns_sequential_ids() {
        let store = MockAccountStore::new();

        let first = store
            .create_account(&NewAccount::new("a", "pass1"))
            .await
            .unwrap();
        let second = store
            .create_account(&NewAccount::new("b", "pass2"))
            .await
            .unwrap();

        assert_eq!(first.account_id, 1);
        assert_eq!(second.account_id, 2);
    }

    #[tokio::test]
    async fn test_mock_account_store_enforces_unique_username() {
        let store = MockAccountStore::new();

        store
            .create_account(&NewAccount::new("bob", "pass1"))
            .await
            .unwrap();

        let err = store
            .create_account(&NewAccount::new("bob", "pass2"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Duplicate(_))));
        assert_eq!(store.account_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_mock_returns_configured_error() {
        let store = MockMessageStore::failing("disk on fire");

        let err = store.list_messages().await.unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Query(msg)) if msg == "disk on fire"));
    }

    #[tokio::test]
    async fn test_mock_message_store_counts_calls() {
        let store = MockMessageStore::new();

        store.list_messages().await.unwrap();
        store.get_message(1).await.unwrap();
        store.delete_message(1).await.unwrap();

        assert_eq!(store.call_count(), 3);
    }
}
