// Mock of the Spotify accounts service and Web API shared by the integration tests.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use sptracks::{
    config::{Credentials, Settings},
    types::Token,
};

pub const ACCESS_TOKEN: &str = "mock-access-token";
pub const PAGE_SIZE: usize = 2;

#[derive(Clone)]
pub struct MockSpotify {
    pub base_url: String,
    pub items: Arc<Vec<Value>>,
    pub reject_credentials: bool,
    pub token_requests: Arc<AtomicUsize>,
    pub page_requests: Arc<AtomicUsize>,
    pub cache_seen_during_paging: Arc<AtomicUsize>,
    pub cache_path: Arc<PathBuf>,
}

async fn token(
    State(state): State<MockSpotify>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.token_requests.fetch_add(1, Ordering::SeqCst);

    let basic = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Basic "));
    let grant = form.get("grant_type").map(String::as_str);

    if state.reject_credentials || !basic || grant != Some("client_credentials") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_client", "error_description": "Invalid client"})),
        )
            .into_response();
    }

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

async fn playlist_tracks(
    State(state): State<MockSpotify>,
    UrlPath(id): UrlPath<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.page_requests.fetch_add(1, Ordering::SeqCst);

    if state.cache_path.is_file() {
        state.cache_seen_during_paging.fetch_add(1, Ordering::SeqCst);
    }

    let expected = format!("Bearer {ACCESS_TOKEN}");
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"status": 401, "message": "Invalid access token"}})),
        )
            .into_response();
    }

    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"status": 404, "message": "Resource not found"}})),
        )
            .into_response();
    }

    if id == "broken" {
        return (StatusCode::BAD_GATEWAY, "upstream exploded").into_response();
    }

    if id == "garbled" {
        return Json(json!({"items": "not-a-list", "next": null})).into_response();
    }

    let offset: usize = query
        .get("offset")
        .and_then(|o| o.parse().ok())
        .unwrap_or(0);
    let end = (offset + PAGE_SIZE).min(state.items.len());
    let page: Vec<Value> = state.items[offset.min(end)..end].to_vec();
    let next = (end < state.items.len()).then(|| {
        format!(
            "{}/v1/playlists/{}/tracks?offset={}&limit={}",
            state.base_url, id, end, PAGE_SIZE
        )
    });

    Json(json!({
        "items": page,
        "next": next,
        "offset": offset,
        "limit": PAGE_SIZE,
        "total": state.items.len()
    }))
    .into_response()
}

pub struct MockServer {
    pub state: MockSpotify,
    pub settings: Settings,
    _cache_dir: tempfile::TempDir,
}

pub async fn start_mock(items: Vec<Value>, reject_credentials: bool) -> MockServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let cache_dir = tempfile::tempdir().unwrap();
    let cache_path = cache_dir.path().join("token.json");

    let state = MockSpotify {
        base_url: base_url.clone(),
        items: Arc::new(items),
        reject_credentials,
        token_requests: Arc::new(AtomicUsize::new(0)),
        page_requests: Arc::new(AtomicUsize::new(0)),
        cache_seen_during_paging: Arc::new(AtomicUsize::new(0)),
        cache_path: Arc::new(cache_path.clone()),
    };

    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/playlists/{id}/tracks", get(playlist_tracks))
        .with_state(state.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let settings = Settings {
        api_url: format!("{}/v1", base_url),
        token_url: format!("{}/api/token", base_url),
        token_cache: cache_path,
    };

    MockServer {
        state,
        settings,
        _cache_dir: cache_dir,
    }
}

// Helper function to create a raw API playlist item
pub fn track_item(id: &str, name: &str, artists: &[&str]) -> Value {
    json!({
        "added_at": "2024-05-01T12:00:00Z",
        "is_local": false,
        "track": {
            "id": id,
            "name": name,
            "type": "track",
            "artists": artists.iter().map(|a| json!({"name": a})).collect::<Vec<_>>()
        }
    })
}

pub fn removed_item() -> Value {
    json!({"added_at": "2024-05-01T12:00:00Z", "track": null})
}

pub fn credentials() -> Credentials {
    Credentials::new("mock-client", "mock-secret")
}

pub fn write_cached_token(path: &Path, client_id: &str) {
    let token = Token {
        access_token: ACCESS_TOKEN.to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        obtained_at: chrono::Utc::now().timestamp() as u64,
        client_id: client_id.to_string(),
    };
    std::fs::write(path, serde_json::to_string(&token).unwrap()).unwrap();
}
