//! # Handler Tests
//!
//! Drive the full router (middleware included) with `oneshot`, on in-memory
//! repositories and a fixed clock.

mod gyms;

use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use lib_auth::hash_password;
use lib_core::model::{Role, UserForCreate};
use lib_core::{Config, FixedClock, RepositoryBackend, UserRepository};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create test config
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_access_expiration_minutes: 10,
        jwt_refresh_expiration_days: 7,
        check_in_utc_offset_minutes: 0,
        repository_backend: RepositoryBackend::Memory,
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: Arc<FixedClock>,
}

/// Create test app with routes
pub fn test_app() -> TestApp {
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 20, 13, 40, 0).unwrap()));
    let state = AppState::in_memory(test_config(), clock.clone());
    let router = create_router(state.clone(), &[]);

    TestApp {
        router,
        state,
        clock,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Store a user directly and log in through `POST /sessions`.
    pub async fn create_and_authenticate_user(&self, is_admin: bool) -> String {
        let role = if is_admin { Role::Admin } else { Role::Member };
        self.state
            .users
            .create(UserForCreate {
                role,
                ..UserForCreate::member(
                    "John Doe".to_string(),
                    "johndoe@example.com".to_string(),
                    hash_password("123456").unwrap(),
                )
            })
            .await
            .unwrap();

        let response = self
            .send(
                Method::POST,
                "/sessions",
                None,
                Some(serde_json::json!({
                    "email": "johndoe@example.com",
                    "password": "123456",
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);

        response.body["token"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let response = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app();

    let response = app.send(Method::GET, "/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
