//! Infrastructure layer containing concrete store implementations.

pub mod database;

pub use database::{PostgresClient, PostgresConfig};
