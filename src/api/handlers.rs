//! HTTP request handlers and the error-to-status mapping.
//!
//! Status codes and bodies follow the legacy wire contract, including the
//! places it deviates from REST convention: a missing message is reported as
//! HTTP 200 with an empty body (never 404), and a not-found update is a 400.
//! Existing clients depend on these behaviors, so they are kept as-is.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::app::AppState;
use crate::domain::{Account, AppError, Message, NewAccount, NewMessage, StoreError};

/// `POST /register` — create a new account.
///
/// 200 with the stored account on success, 400 on validation failure,
/// 409 when the username is taken.
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAccount>,
) -> Result<Json<Account>, AppError> {
    let account = state.accounts.register(&payload).await?;
    Ok(Json(account))
}

/// `POST /login` — validate credentials.
///
/// 200 with the full account record on success, 401 on bad credentials.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewAccount>,
) -> Result<Json<Account>, AppError> {
    let username = payload.username.as_deref().unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");
    let account = state.accounts.login(username, password).await?;
    Ok(Json(account))
}

/// `POST /messages` — post a new message.
pub async fn post_message_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewMessage>,
) -> Result<Json<Message>, AppError> {
    let message = state.messages.create_message(&payload).await?;
    Ok(Json(message))
}

/// `GET /messages` — every stored message.
pub async fn get_all_messages_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.messages.all_messages().await?;
    Ok(Json(messages))
}

/// `GET /messages/{message_id}` — a single message.
///
/// When the id is absent the response is 200 with an empty body, not 404.
pub async fn get_message_by_id_handler(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<i32>,
) -> Result<Response, AppError> {
    let response = match state.messages.message_by_id(message_id).await? {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    };
    Ok(response)
}

/// `DELETE /messages/{message_id}` — idempotent delete.
///
/// 200 with the deleted-row count when a row was removed; 200 with an empty
/// body when nothing was deleted.
pub async fn delete_message_handler(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<i32>,
) -> Result<Response, AppError> {
    let rows = state.messages.delete_message(message_id).await?;
    let response = if rows == 0 {
        StatusCode::OK.into_response()
    } else {
        Json(rows).into_response()
    };
    Ok(response)
}

/// `PATCH /messages/{message_id}` — replace a message's text.
///
/// The body is read as a raw JSON object and only its `messageText` field is
/// consulted. Returns the updated-row count; malformed body, unknown id and
/// blank text all map to 400.
pub async fn update_message_handler(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<i32>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<u64>, AppError> {
    let new_text = body.get("messageText").and_then(|v| v.as_str());
    let rows = state.messages.update_message(message_id, new_text).await?;
    Ok(Json(rows))
}

/// `GET /accounts/{account_id}/messages` — messages by author.
pub async fn get_messages_by_account_handler(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<i32>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.messages.messages_by_account(account_id).await?;
    Ok(Json(messages))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            // Clients expect 400 for a missing resource here, not 404.
            AppError::NotFound(_) => StatusCode::BAD_REQUEST,
            AppError::Store(store_err) => match store_err {
                // Unique-violation backstop for the registration race.
                StoreError::Duplicate(_) => StatusCode::CONFLICT,
                _ => StatusCode::BAD_REQUEST,
            },
        };

        let message = match &self {
            // The storage layer caught the duplicate the service check
            // missed; report it with the same contract message.
            AppError::Store(StoreError::Duplicate(_)) => "Username already exists".to_string(),
            _ => self.to_string(),
        };

        if let AppError::Store(store_err) = &self {
            error!(error = %store_err, "Store failure surfaced to client");
        }

        // Plain-text error body; no structured payload in this contract.
        (status, message).into_response()
    }
}
