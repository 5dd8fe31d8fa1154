//! Router-level tests for the journal API.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::{Duration, Utc};
use entities::{JournalEntry, User};
use journal_server::{config::Config, create_app, create_state, state::AppState};
use journal_store::{EntryFilter, JournalStore, MemoryJournalStore};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-long-enough-for-security".to_string(),
        jwt_expiration_hours: 24,
        log_level: "info".to_string(),
    }
}

fn setup() -> (Router, Arc<AppState<MemoryJournalStore>>) {
    let state = create_state(test_config(), MemoryJournalStore::new());
    (create_app(state.clone()), state)
}

fn token_for(state: &AppState<MemoryJournalStore>, user_id: Uuid) -> String {
    state
        .session_manager
        .issue(user_id, "test@example.com".to_string(), None)
        .unwrap()
}

fn entry_at(user_id: Uuid, title: &str, minutes_ago: i64) -> JournalEntry {
    let mut entry = JournalEntry::new(user_id, title, "content");
    entry.created_at = Utc::now() - Duration::minutes(minutes_ago);
    entry
}

fn create_request(token: Option<&str>, body: Value) -> Request<Body> {
    let builder = Request::builder()
        .method("POST")
        .uri("/api/journal/create")
        .header(header::CONTENT_TYPE, "application/json");
    let builder = match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    };
    builder.body(Body::from(body.to_string())).unwrap()
}

fn authed_get(token: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn stored_entry_count(state: &AppState<MemoryJournalStore>) -> u32 {
    let (_, total) = state.store.list_entries(EntryFilter::default()).await.unwrap();
    total
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let (app, _state) = setup();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_create_requires_session() -> Result<()> {
    let (app, state) = setup();

    let body = json!({ "title": "Day 1", "content": "Started journaling" });
    let response = app.oneshot(create_request(None, body)).await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await?, json!({ "error": "Unauthorized" }));
    assert_eq!(stored_entry_count(&state).await, 0);
    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_token() -> Result<()> {
    let (app, state) = setup();

    let body = json!({ "title": "Day 1", "content": "Started journaling" });
    let response = app
        .oneshot(create_request(Some("not-a-session-token"), body))
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await?, json!({ "error": "Unauthorized" }));
    assert_eq!(stored_entry_count(&state).await, 0);
    Ok(())
}

#[tokio::test]
async fn test_create_requires_title_and_content() -> Result<()> {
    let (app, state) = setup();
    let token = token_for(&state, Uuid::new_v4());

    // Empty field and missing field are both rejected.
    for body in [
        json!({ "title": "", "content": "Started journaling" }),
        json!({ "title": "Day 1", "content": "" }),
        json!({ "title": "Day 1" }),
        json!({}),
    ] {
        let response = app
            .clone()
            .oneshot(create_request(Some(&token), body))
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await?,
            json!({ "error": "Title and content are required" })
        );
    }

    assert_eq!(stored_entry_count(&state).await, 0);
    Ok(())
}

#[tokio::test]
async fn test_create_echoes_stored_entry() -> Result<()> {
    let (app, state) = setup();
    let user_id = Uuid::new_v4();
    let token = token_for(&state, user_id);

    let body = json!({ "title": "Day 1", "content": "Started journaling" });
    let response = app.oneshot(create_request(Some(&token), body)).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let entry = body_json(response).await?;
    assert_eq!(entry["title"], "Day 1");
    assert_eq!(entry["content"], "Started journaling");
    assert_eq!(entry["userId"], user_id.to_string());
    assert!(entry["id"].is_string());
    assert!(entry["createdAt"].is_string());

    let (stored, total) = state
        .store
        .list_entries(EntryFilter {
            user_id: Some(user_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(stored[0].id.to_string(), entry["id"]);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_creates_make_distinct_entries() -> Result<()> {
    let (app, state) = setup();
    let token = token_for(&state, Uuid::new_v4());

    let body = json!({ "title": "Day 1", "content": "Started journaling" });
    let first = app
        .clone()
        .oneshot(create_request(Some(&token), body.clone()))
        .await?;
    let second = app.oneshot(create_request(Some(&token), body)).await?;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first = body_json(first).await?;
    let second = body_json(second).await?;
    assert_ne!(first["id"], second["id"]);
    assert_eq!(stored_entry_count(&state).await, 2);
    Ok(())
}

#[tokio::test]
async fn test_list_is_scoped_and_newest_first() -> Result<()> {
    let (app, state) = setup();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    state.store.create_entry(entry_at(alice, "oldest", 30)).await?;
    state.store.create_entry(entry_at(alice, "newest", 1)).await?;
    state.store.create_entry(entry_at(alice, "middle", 10)).await?;
    state.store.create_entry(entry_at(bob, "bob entry", 5)).await?;

    let token = token_for(&state, alice);
    let response = app.oneshot(authed_get(&token, "/api/journal/list")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["total"], 3);

    let titles: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);

    let owners: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["userId"].as_str().unwrap())
        .collect();
    assert!(owners.iter().all(|o| *o == alice.to_string()));
    Ok(())
}

#[tokio::test]
async fn test_list_pagination_window() -> Result<()> {
    let (app, state) = setup();
    let user_id = Uuid::new_v4();

    for i in 0..5 {
        state
            .store
            .create_entry(entry_at(user_id, &format!("entry {i}"), i))
            .await?;
    }

    let token = token_for(&state, user_id);
    let response = app
        .oneshot(authed_get(&token, "/api/journal/list?limit=2&offset=1"))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["total"], 5);

    let titles: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["entry 1", "entry 2"]);
    Ok(())
}

#[tokio::test]
async fn test_list_requires_session() -> Result<()> {
    let (app, _state) = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/journal/list")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await?, json!({ "error": "Unauthorized" }));
    Ok(())
}

#[tokio::test]
async fn test_current_user_endpoint() -> Result<()> {
    let (app, state) = setup();
    let user = User::new("alice@example.com").with_name("Alice");
    state.store.create_user(user.clone()).await?;

    let token = token_for(&state, user.id);
    let response = app
        .clone()
        .oneshot(authed_get(&token, "/api/auth/me"))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["name"], "Alice");

    // A valid session for an unprovisioned user is a 404.
    let token = token_for(&state, Uuid::new_v4());
    let response = app.oneshot(authed_get(&token, "/api/auth/me")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await?, json!({ "error": "User not found" }));
    Ok(())
}
