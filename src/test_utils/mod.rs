//! Testing utilities: in-memory mock stores.

pub mod mocks;

pub use mocks::{MockAccountStore, MockConfig, MockMessageStore};
