//! Domain layer containing core business types, traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AppError, StoreError};
pub use traits::{AccountStore, MessageStore};
pub use types::{Account, Message, NewAccount, NewMessage};
