//! PostgreSQL store implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::domain::{
    Account, AccountStore, AppError, Message, MessageStore, NewAccount, NewMessage, StoreError,
};

/// PostgreSQL connection pool configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(3),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// PostgreSQL-backed store for accounts and messages, sharing one pool.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client with custom configuration
    pub async fn new(database_url: &str, config: PostgresConfig) -> Result<Self, AppError> {
        info!("Connecting to PostgreSQL...");
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .connect(database_url)
            .await
            .map_err(|e| AppError::Store(StoreError::Connection(e.to_string())))?;
        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client with default configuration
    pub async fn with_defaults(database_url: &str) -> Result<Self, AppError> {
        Self::new(database_url, PostgresConfig::default()).await
    }

    /// Run database migrations using sqlx migrate
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Store(StoreError::Migration(e.to_string())))?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying connection pool (for testing)
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_account(row: &sqlx::postgres::PgRow) -> Account {
        Account {
            account_id: row.get("account_id"),
            username: row.get("username"),
            password: row.get("password"),
        }
    }

    fn row_to_message(row: &sqlx::postgres::PgRow) -> Message {
        Message {
            message_id: row.get("message_id"),
            posted_by: row.get("posted_by"),
            message_text: row.get("message_text"),
            time_posted_epoch: row.get("time_posted_epoch"),
        }
    }
}

#[async_trait]
impl AccountStore for PostgresClient {
    #[instrument(skip(self))]
    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AppError> {
        let row = sqlx::query(
            "SELECT account_id, username, password FROM account WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(row.as_ref().map(Self::row_to_account))
    }

    #[instrument(skip(self, data))]
    async fn create_account(&self, data: &NewAccount) -> Result<Account, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO account (username, password)
            VALUES ($1, $2)
            RETURNING account_id, username, password
            "#,
        )
        .bind(data.username.as_deref())
        .bind(data.password.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(Self::row_to_account(&row))
    }
}

#[async_trait]
impl MessageStore for PostgresClient {
    #[instrument(skip(self, data))]
    async fn create_message(&self, data: &NewMessage) -> Result<Message, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO message (posted_by, message_text, time_posted_epoch)
            VALUES ($1, $2, $3)
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(data.posted_by)
        .bind(data.message_text.as_deref())
        .bind(data.time_posted_epoch)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(Self::row_to_message(&row))
    }

    #[instrument(skip(self))]
    async fn get_message(&self, message_id: i32) -> Result<Option<Message>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM message
            WHERE message_id = $1
            "#,
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(row.as_ref().map(Self::row_to_message))
    }

    #[instrument(skip(self))]
    async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM message
            ORDER BY message_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(rows.iter().map(Self::row_to_message).collect())
    }

    #[instrument(skip(self))]
    async fn list_messages_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT message_id, posted_by, message_text, time_posted_epoch
            FROM message
            WHERE posted_by = $1
            ORDER BY message_id
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(rows.iter().map(Self::row_to_message).collect())
    }

    #[instrument(skip(self, text))]
    async fn update_message_text(&self, message_id: i32, text: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE message SET message_text = $1 WHERE message_id = $2")
            .bind(text)
            .bind(message_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_message(&self, message_id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM message WHERE message_id = $1")
            .bind(message_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;

        Ok(result.rows_affected())
    }
}
