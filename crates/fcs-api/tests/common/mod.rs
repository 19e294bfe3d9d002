#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use fcs_api::{ApiState, config::Environment, router};
use fcs_db::Store;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Builds an `ApiState` over a fresh, migrated in-memory database
pub struct TestStateBuilder {
    environment: Environment,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            environment: Environment::Development,
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub async fn build(self) -> anyhow::Result<ApiState> {
        let store = Store::in_memory().await?;
        Ok(ApiState::with_store(store, self.environment))
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh state plus a client over the fully layered app
pub async fn setup() -> (ApiState, TestClient) {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");
    let app = router::app(state.clone(), &["http://localhost:3000".to_string()]);
    (state, TestClient::new(app))
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            body,
            headers,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, Body::empty(), false).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send("DELETE", uri, Body::empty(), false).await
    }

    pub async fn post_json<T: Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");
        self.send("POST", uri, Body::from(json_body), true).await
    }

    pub async fn patch_json<T: Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");
        self.send("PATCH", uri, Body::from(json_body), true).await
    }

    /// Send a body verbatim, for malformed payloads
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        self.send("POST", uri, Body::from(body), true).await
    }

    async fn send(&self, method: &str, uri: &str, body: Body, json: bool) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if json {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder.body(body).expect("Failed to build request");
        self.request(request).await
    }

    /// Create a user and return its id
    pub async fn create_user(&self, username: &str) -> String {
        let response = self
            .post_json("/users", &json!({ "username": username }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_str()
            .expect("user id")
            .to_string()
    }

    /// Create a deck with the given cards and return the response body
    pub async fn create_deck(&self, user_id: &str, name: &str, cards: Value) -> Value {
        let response = self
            .post_json(
                "/decks",
                &json!({ "name": name, "userId": user_id, "cards": cards }),
            )
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// The `error` field of an error body
    pub fn error(&self) -> String {
        self.json::<Value>()["error"]
            .as_str()
            .expect("error body")
            .to_string()
    }

    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}

/// Direct database helpers for asserting on persisted state
pub mod db {
    use sqlx::SqlitePool;

    pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .expect("Failed to count rows")
    }

    pub async fn deck_description(pool: &SqlitePool, deck_id: &str) -> Option<String> {
        sqlx::query_scalar("SELECT description FROM decks WHERE id = ?")
            .bind(deck_id)
            .fetch_one(pool)
            .await
            .expect("Failed to read deck")
    }
}
