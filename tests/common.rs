use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use parkeasy_backend::{
    api::router::create_router, config::Config, infra::factory::build_state, state::AppState,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
            auth_issuer: "test-issuer".to_string(),
            timezone: "UTC".to_string(),
            admin_email: "admin@parkeasy.com".to_string(),
            admin_password: "admin123".to_string(),
        };

        let state = Arc::new(build_state(&config, pool.clone()).await);
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> axum::response::Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("access_token={token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(
        &self,
        uri: &str,
        payload: Value,
        token: Option<&str>,
    ) -> axum::response::Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("access_token={token}"));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(payload.to_string())).unwrap())
            .await
            .unwrap()
    }

    /// Registers a fresh user and returns their session token.
    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> String {
        let response = self
            .post_json(
                "/api/register",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "full_name": full_name,
                }),
                None,
            )
            .await;

        if !response.status().is_success() {
            panic!("Registration failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["token"].as_str().expect("No token in register response").to_string()
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post_json(
                "/api/login",
                serde_json::json!({ "email": email, "password": password }),
                None,
            )
            .await;

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["token"].as_str().expect("No token in login response").to_string()
    }

    /// Token for the seeded admin account.
    pub async fn admin_token(&self) -> String {
        let email = self.state.config.admin_email.clone();
        let password = self.state.config.admin_password.clone();
        self.login(&email, &password).await
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
