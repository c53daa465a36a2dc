//! Test utilities for integration tests
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use tempfile::TempDir;

use converse::api::AppState;
use converse::api::app;
use converse::core::AppConfig;
use converse::transcript::TranscriptStore;

pub struct TestApp {
    pub app: Router,
    pub history_path: PathBuf,
    // Keeps the temp dir alive for the duration of the test
    _dir: TempDir,
}

/// Creates a test application router backed by a temporary directory,
/// pointed at the given completion API hostname (usually a mockito
/// server URL).
pub fn test_app(api_hostname: &str) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let history_path = dir.path().join("conversation_history.json");

    let static_dir = dir.path().join("static");
    fs::create_dir_all(&static_dir).expect("Failed to create static directory");
    fs::write(
        static_dir.join("index.html"),
        "<!doctype html><html><head><title>Converse</title></head><body></body></html>",
    )
    .expect("Failed to write landing page");

    let app_config = AppConfig {
        history_path: history_path.display().to_string(),
        static_dir: static_dir.display().to_string(),
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4"),
        system_message: String::from("You are a helpful assistant."),
        cors_allowed_origin: None,
    };
    let store = Arc::new(TranscriptStore::new(
        &history_path,
        &app_config.system_message,
    ));
    let app_state = AppState::new(store, app_config);

    TestApp {
        app: app(Arc::new(RwLock::new(app_state))),
        history_path,
        _dir: dir,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}
