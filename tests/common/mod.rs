//! Shared test fixtures
//!
//! Spins up the full application against a throwaway SQLite database so
//! the end-to-end tests exercise the real router, middleware, and
//! persistence layer.

use axum_test::TestServer;
use changelog_api::server::config::ServerConfig;
use changelog_api::server::init::create_app;
use tempfile::TempDir;

/// Signing secret used by every test server
pub const TEST_SECRET: &str = "test-secret";

/// A running test application with its backing database
pub struct TestApp {
    pub server: TestServer,
    // Held so the database file outlives the server
    _db_dir: TempDir,
}

/// Build the application against a fresh temp-file SQLite database
pub async fn spawn_app() -> TestApp {
    let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let database_url = format!(
        "sqlite://{}/test.db?mode=rwc",
        db_dir.path().display()
    );

    let config = ServerConfig {
        port: 0,
        database_url,
        jwt_secret: TEST_SECRET.to_string(),
    };

    let app = create_app(&config).await.expect("Failed to create app");

    TestApp {
        server: TestServer::new(app).expect("Failed to create test server"),
        _db_dir: db_dir,
    }
}

/// Sign up a user and return the issued token
pub async fn signup_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/user")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("signup response missing token")
        .to_string()
}
