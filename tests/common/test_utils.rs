use super::MockInferenceBackend;
use axum::{Router, body::Body, http::Response};
use magic_eight_ball::{
    Result,
    answerer::QuestionAnswerer,
    config::{Config, InferenceConfig, LogsConfig, ServerConfig},
    server,
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        inference: InferenceConfig {
            base_url: base_url.to_string(),
            auth_token: None,
            model: "llama2-chat".to_string(),
            timeout_secs: None,
        },
    }
}

/// Build a router whose answers come from the given mock
pub fn create_test_app(backend: Arc<MockInferenceBackend>) -> Router {
    server::router(Arc::new(QuestionAnswerer::new(backend, "llama2-chat")))
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Collect a response body into bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
