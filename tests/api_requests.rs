//! Additional integration tests for specific request flows.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use microblog_api::api::create_router;
use microblog_api::app::AppState;
use microblog_api::domain::{Account, Message, NewAccount, NewMessage};
use microblog_api::test_utils::{MockAccountStore, MockMessageStore};

fn create_test_state() -> Arc<AppState> {
    let accounts = Arc::new(MockAccountStore::new());
    let messages = Arc::new(MockMessageStore::new());
    Arc::new(AppState::new(accounts, messages))
}

#[tokio::test]
async fn test_full_message_lifecycle_flow() {
    let state = create_test_state();
    let router = create_router(state);

    // 1. POST - Register an account
    let register_payload = NewAccount::new("poster", "hunter2");
    let register_request = Request::builder()
        .method("POST")
        .uri("/register")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&register_payload).unwrap()))
        .unwrap();

    let register_response = router.clone().oneshot(register_request).await.unwrap();
    assert_eq!(register_response.status(), StatusCode::OK);

    let body_bytes = register_response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let account: Account = serde_json::from_slice(&body_bytes).unwrap();

    // 2. POST - Create a message under that account
    let message_payload = NewMessage::new("hello lifecycle", account.account_id);
    let create_request = Request::builder()
        .method("POST")
        .uri("/messages")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&message_payload).unwrap()))
        .unwrap();

    let create_response = router.clone().oneshot(create_request).await.unwrap();
    assert_eq!(create_response.status(), StatusCode::OK);

    let body_bytes = create_response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let created: Message = serde_json::from_slice(&body_bytes).unwrap();
    let message_id = created.message_id;
    assert_eq!(created.message_text, "hello lifecycle");

    // 3. GET - Retrieve the created message by ID
    let get_request = Request::builder()
        .method("GET")
        .uri(format!("/messages/{}", message_id))
        .body(Body::empty())
        .unwrap();

    let get_response = router.clone().oneshot(get_request).await.unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);

    let body_bytes = get_response.into_body().collect().await.unwrap().to_bytes();
    let retrieved: Message = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(retrieved, created);

    // 4. DELETE - Remove it; body is the deleted-row count
    let delete_request = Request::builder()
        .method("DELETE")
        .uri(format!("/messages/{}", message_id))
        .body(Body::empty())
        .unwrap();

    let delete_response = router.clone().oneshot(delete_request).await.unwrap();
    assert_eq!(delete_response.status(), StatusCode::OK);

    let body_bytes = delete_response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    assert_eq!(&body_bytes[..], b"1");

    // 5. GET - Now absent: 200 with an empty body
    let get_request = Request::builder()
        .method("GET")
        .uri(format!("/messages/{}", message_id))
        .body(Body::empty())
        .unwrap();

    let get_response = router.oneshot(get_request).await.unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);

    let body_bytes = get_response.into_body().collect().await.unwrap().to_bytes();
    assert!(body_bytes.is_empty());
}

#[tokio::test]
async fn test_register_login_flow() {
    let state = create_test_state();
    let router = create_router(state);

    let credentials = NewAccount::new("bob", "pass1");
    let body = serde_json::to_string(&credentials).unwrap();

    let register_request = Request::builder()
        .method("POST")
        .uri("/register")
        .header("Content-Type", "application/json")
        .body(Body::from(body.clone()))
        .unwrap();

    let register_response = router.clone().oneshot(register_request).await.unwrap();
    assert_eq!(register_response.status(), StatusCode::OK);

    let body_bytes = register_response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let registered: Account = serde_json::from_slice(&body_bytes).unwrap();
    assert!(registered.account_id > 0);
    assert_eq!(registered.username, "bob");
    assert_eq!(registered.password, "pass1");

    let login_request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let login_response = router.oneshot(login_request).await.unwrap();
    assert_eq!(login_response.status(), StatusCode::OK);

    let body_bytes = login_response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes();
    let logged_in: Account = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(logged_in, registered);
}

#[tokio::test]
async fn test_login_with_missing_fields_is_401() {
    let state = create_test_state();
    let router = create_router(state);

    // No account exists; an empty credentials object is simply bad credentials.
    let login_request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("Content-Type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = router.oneshot(login_request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_message_for_unknown_account_is_accepted() {
    // The contract performs no referential check on postedBy.
    let state = create_test_state();
    let router = create_router(state);

    let payload = NewMessage::new("ghost post", 424_242);
    let request = Request::builder()
        .method("POST")
        .uri("/messages")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
