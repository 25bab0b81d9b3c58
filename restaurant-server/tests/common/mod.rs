#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use restaurant_server::db::DocumentStore;
use restaurant_server::{Config, ServerState, build_router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub state: ServerState,
    pub router: Router,
}

impl TestApp {
    /// Fresh application over its own in-memory store
    pub async fn new() -> Self {
        let config = Config::in_memory(SECRET);
        let state = ServerState::initialize(&config).await.unwrap();
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// Application over a store prepared by the test
    pub fn over_store(store: Arc<dyn DocumentStore>) -> Self {
        let state = ServerState::new(Config::in_memory(SECRET), store);
        let router = build_router(state.clone());
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("token", token);
        }
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(token), Some(body)).await
    }

    /// Sign up a user and return the response body
    pub async fn sign_up(&self, email: &str, phone: &str) -> Value {
        let (status, body) = self
            .request(
                Method::POST,
                "/users/signup",
                None,
                Some(json!({
                    "first_name": "Grace",
                    "last_name": "Hopper",
                    "email": email,
                    "password": "cobol1959",
                    "phone": phone,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "sign up failed: {body}");
        body
    }

    /// Access token of a freshly signed-up user
    pub async fn token(&self) -> String {
        let body = self.sign_up("grace@example.com", "555-0100").await;
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn create_menu(&self, token: &str) -> Value {
        let (status, body) = self
            .post(
                "/menus",
                token,
                json!({"name": "Lunch", "category": "main"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "menu create failed: {body}");
        body
    }

    pub async fn create_food(&self, token: &str, menu_id: &str, price: f64) -> Value {
        let (status, body) = self
            .post(
                "/foods",
                token,
                json!({
                    "name": "Tomato Soup",
                    "price": price,
                    "food_image": "https://img.example.com/soup.png",
                    "menu_id": menu_id,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "food create failed: {body}");
        body
    }

    pub async fn create_order(&self, token: &str) -> Value {
        let (status, body) = self.post("/orders", token, json!({})).await;
        assert_eq!(status, StatusCode::OK, "order create failed: {body}");
        body
    }
}
