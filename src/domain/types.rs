use serde::{Deserialize, Serialize};

/// Row identifier assigned by the store.
pub type EntityId = i32;

/// A registered user identified by a unique username/password pair.
///
/// The password is stored and compared as plain text and is included in
/// responses as-is; no hashing or redaction is part of this contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: EntityId,
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(account_id: EntityId, username: String, password: String) -> Self {
        Self {
            account_id,
            username,
            password,
        }
    }
}

/// Request payload for registration and login.
///
/// Both fields are optional so that bodies with missing keys deserialize and
/// reach the service, which owns the validation rules and their messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl NewAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

/// A text post authored by an account.
///
/// `posted_by` is a plain account id; referential integrity is deliberately
/// not enforced. `time_posted_epoch` is an opaque client-supplied timestamp,
/// never validated or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: EntityId,
    pub posted_by: EntityId,
    pub message_text: String,
    pub time_posted_epoch: Option<i64>,
}

/// Request payload for posting a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub message_text: Option<String>,
    pub posted_by: Option<EntityId>,
    pub time_posted_epoch: Option<i64>,
}

impl NewMessage {
    pub fn new(message_text: impl Into<String>, posted_by: EntityId) -> Self {
        Self {
            message_text: Some(message_text.into()),
            posted_by: Some(posted_by),
            time_posted_epoch: None,
        }
    }

    pub fn with_time_posted(mut self, epoch: i64) -> Self {
        self.time_posted_epoch = Some(epoch);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_wire_field_names() {
        let account = Account::new(7, "bob".to_string(), "pass1".to_string());

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["accountId"], 7);
        assert_eq!(json["username"], "bob");
        assert_eq!(json["password"], "pass1");
    }

    #[test]
    fn test_message_wire_field_names() {
        let message = Message {
            message_id: 3,
            posted_by: 1,
            message_text: "hi".to_string(),
            time_posted_epoch: Some(1_700_000_000),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["messageId"], 3);
        assert_eq!(json["postedBy"], 1);
        assert_eq!(json["messageText"], "hi");
        assert_eq!(json["timePostedEpoch"], 1_700_000_000i64);
    }

    #[test]
    fn test_new_account_tolerates_missing_fields() {
        let partial: NewAccount = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(partial.username.as_deref(), Some("bob"));
        assert!(partial.password.is_none());

        let empty: NewAccount = serde_json::from_str("{}").unwrap();
        assert!(empty.username.is_none());
        assert!(empty.password.is_none());
    }

    #[test]
    fn test_new_message_builder() {
        let request = NewMessage::new("hello", 1).with_time_posted(123);
        assert_eq!(request.message_text.as_deref(), Some("hello"));
        assert_eq!(request.posted_by, Some(1));
        assert_eq!(request.time_posted_epoch, Some(123));
    }

    #[test]
    fn test_message_serialization_round_trip() {
        let message = Message {
            message_id: 1,
            posted_by: 2,
            message_text: "round trip".to_string(),
            time_posted_epoch: None,
        };

        let json = serde_json::to_string(&message).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(message, deserialized);
    }
}
