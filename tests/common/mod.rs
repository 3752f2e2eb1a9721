// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use dignemi_admin::auth::{KeyValueStore, MemoryStore};
use dignemi_admin::config::Config;
use dignemi_admin::AdminApp;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

/// Path prefix the mock serves under, like the real API's version prefix.
pub const API_PREFIX: &str = "/v1";

/// One request as the mock API received it.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
pub struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    forced: Arc<Mutex<Option<(StatusCode, Value)>>>,
    responses: Arc<Mutex<HashMap<String, Value>>>,
    texts: Arc<Mutex<HashMap<String, String>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

/// Mock of the content REST API on an ephemeral port.
pub struct MockApi {
    pub base_url: String,
    state: MockState,
}

#[allow(dead_code)]
impl MockApi {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Answer every request with `status` and `body`.
    pub fn force_status(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        *self.state.forced.lock().unwrap() = Some((status, body));
    }

    /// Canned 200 body for `"{METHOD} {path}"`, e.g. `"GET /content/catalog"`.
    pub fn respond(&self, route: &str, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(route.to_string(), body);
    }

    /// Canned plain-text 200 body for `"{METHOD} {path}"`.
    pub fn respond_text(&self, route: &str, body: &str) {
        self.state
            .texts
            .lock()
            .unwrap()
            .insert(route.to_string(), body.to_string());
    }

    pub fn delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = Some(delay);
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();
    let body = (!body.is_empty())
        .then(|| serde_json::from_slice::<Value>(&body).ok())
        .flatten();
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body,
    });

    let delay = *state.delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let forced = state.forced.lock().unwrap().clone();
    if let Some((status, body)) = forced {
        return (status, Json(body)).into_response();
    }

    let key = format!("{method} {path}");
    let canned = state.responses.lock().unwrap().get(&key).cloned();
    if let Some(body) = canned {
        return Json(body).into_response();
    }
    let text = state.texts.lock().unwrap().get(&key).cloned();
    if let Some(text) = text {
        return text.into_response();
    }
    if method == Method::POST || method == Method::PATCH {
        return (StatusCode::CREATED, Json(json!({ "id": "c-1" }))).into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Not Found", "statusCode": 404 })),
    )
        .into_response()
}

/// Start the mock API and return a handle to it.
pub async fn spawn_mock_api() -> MockApi {
    let state = MockState::default();
    let app = Router::new().fallback(handle).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("Mock API has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock API failed");
    });

    MockApi {
        base_url: format!("http://{addr}{API_PREFIX}"),
        state,
    }
}

/// App context talking to `base_url`, with in-memory storage.
#[allow(dead_code)]
pub fn test_app(base_url: &str, start_path: &str) -> (AdminApp, Arc<MemoryStore>) {
    let mut config = Config::test_default()
        .with_api_url(base_url)
        .expect("Mock URL should be valid");
    config.start_path = start_path.to_string();

    let storage = Arc::new(MemoryStore::new());
    let app = AdminApp::new(config, storage.clone()).expect("App should build");
    (app, storage)
}

/// App context with an authenticated editor session already stored.
#[allow(dead_code)]
pub fn signed_in_app(base_url: &str) -> (AdminApp, Arc<MemoryStore>) {
    let (app, storage) = test_app(base_url, "/verify");
    let token = mint_token(json!({
        "sub": "u-1",
        "email": "editora@dignemi.org",
        "role": "EDITOR",
    }));
    app.auth.verify(&token).expect("Token should verify");
    assert!(storage.get("auth_token").unwrap().is_some());
    (app, storage)
}

/// Mint an HS256 token with the given claims.
#[allow(dead_code)]
pub fn mint_token(claims: Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test_signing_key"),
    )
    .expect("Failed to create JWT")
}
