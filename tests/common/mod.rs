use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use gatehouse::config::Config;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn signup(&self, email: &str, password: &str) -> (Value, StatusCode) {
        self.post(
            "/auth/signup",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> (Value, StatusCode) {
        self.post(
            "/auth/login",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn forgot_password(&self, email: &str) -> (Value, StatusCode) {
        self.post("/auth/forgot-password", &json!({ "email": email }))
            .await
    }

    pub async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> (Value, StatusCode) {
        self.post(
            "/auth/reset-password",
            &json!({ "email": email, "otp": otp, "new_password": new_password }),
        )
        .await
    }

    /// Fetch the most recent reset code stored for an email.
    pub async fn latest_code(&self, email: &str) -> Option<String> {
        sqlx::query_scalar::<_, String>(
            "SELECT code FROM one_time_codes WHERE email = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .expect("code lookup failed")
    }

    pub async fn count_codes(&self, email: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM one_time_codes WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .expect("code count failed")
    }

    async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!(
        "gatehouse_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    );

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and create the schema
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    gatehouse::db::schema::ensure(&pool)
        .await
        .expect("Failed to create schema on test database");

    let config = Config {
        database_url: test_url,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        smtp: None,
    };

    let app = gatehouse::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
